pub mod pda;
pub mod reward;

pub use pda::*;
pub use reward::*;
