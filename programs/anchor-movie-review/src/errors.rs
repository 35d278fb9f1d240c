use anchor_lang::prelude::*;

#[error_code]
pub enum MovieReviewError {
    #[msg("Rating should be between 1 and 5")]
    InvalidRating,

    #[msg("Title exceeds the maximum length")]
    TitleTooLong,

    #[msg("Description exceeds the maximum length")]
    DescriptionTooLong,

    #[msg("Only the reviewer can modify this review")]
    Unauthorized,

    #[msg("Mint authority mismatch")]
    InvalidMintAuthority,

    #[msg("Numerical overflow")]
    NumericalOverflow,

    #[msg("No valid bump seed for the derived address")]
    AddressDerivationFailed,
}
