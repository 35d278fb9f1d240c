pub mod initialize_token_mint;
pub mod add_movie_review;
pub mod update_movie_review;
pub mod delete_movie_review;

pub use initialize_token_mint::*;
pub use add_movie_review::*;
pub use update_movie_review::*;
pub use delete_movie_review::*;
