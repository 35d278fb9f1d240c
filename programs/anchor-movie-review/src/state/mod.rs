pub mod movie_review;

pub use movie_review::*;
