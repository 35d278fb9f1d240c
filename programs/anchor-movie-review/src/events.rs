use anchor_lang::prelude::*;

/// Emitted once, when the reward mint is created
#[event]
pub struct TokenMintInitialized {
    pub mint: Pubkey,
    pub mint_authority: Pubkey,
    pub decimals: u8,
    pub payer: Pubkey,
}

/// Emitted when a review record is created
#[event]
pub struct MovieReviewAdded {
    pub review: Pubkey,
    pub reviewer: Pubkey,
    pub title: String,
    pub description: String,
    pub rating: u8,
}

/// Emitted after the reward for a new review lands in the reviewer's holding
#[event]
pub struct RewardIssued {
    pub mint: Pubkey,
    pub recipient: Pubkey,
    pub token_account: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

#[event]
pub struct MovieReviewUpdated {
    pub review: Pubkey,
    pub reviewer: Pubkey,
    pub title: String,
    pub description: String,
    pub rating: u8,
}

#[event]
pub struct MovieReviewDeleted {
    pub review: Pubkey,
    pub reviewer: Pubkey,
    pub title: String,
}
