//! Client-side address derivation
//!
//! On chain the review and mint addresses come from the `seeds` constraints
//! in each instruction context. These helpers reproduce the same derivations
//! for callers building instructions, and the integration tests use them to
//! address every account they send.

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::MovieReviewError;

/// Derive the review record PDA for a (title, reviewer) pair
///
/// Seeds: [title bytes, reviewer pubkey]. Titles longer than a single seed
/// are rejected up front instead of failing inside the derivation.
pub fn derive_review_address(
    program_id: &Pubkey,
    title: &str,
    reviewer: &Pubkey,
) -> Result<(Pubkey, u8)> {
    require!(
        title.len() <= MAX_TITLE_LENGTH,
        MovieReviewError::TitleTooLong
    );

    Pubkey::try_find_program_address(&[title.as_bytes(), reviewer.as_ref()], program_id)
        .ok_or_else(|| error!(MovieReviewError::AddressDerivationFailed))
}

/// Derive the singleton reward mint PDA
///
/// Seeds: ["mint"]
pub fn derive_mint_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[MINT_SEED], program_id)
        .ok_or_else(|| error!(MovieReviewError::AddressDerivationFailed))
}
