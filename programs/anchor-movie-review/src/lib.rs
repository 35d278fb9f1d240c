#![allow(unexpected_cfgs, deprecated)]
use anchor_lang::prelude::*;

declare_id!("EoqoSfLhdgvr9YxPcu17apnZ6vroTXfTFMskA8dvpMV2");

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;
pub mod instructions;


use instructions::*;

#[program]
pub mod movie_review_program {
    use super::*;

    /// Create the singleton reward mint at the ["mint"] PDA
    pub fn initialize_token_mint(ctx: Context<InitializeTokenMint>) -> Result<()> {
        instructions::initialize_token_mint::initialize_token_mint(ctx)
    }

    /// Add a movie review and mint the reviewer's reward
    /// 
    /// # Arguments
    /// * `title` - Movie title, at most 32 bytes; seeds the review PDA
    /// * `description` - Review text, at most 500 bytes
    /// * `rating` - 1 to 5
    ///
    /// A title over 32 bytes cannot seed the review PDA, so the transaction
    /// fails during account validation before any content check runs.
    /// Clients should check it with `helpers::derive_review_address` first,
    /// which reports `TitleTooLong`.
    pub fn add_movie_review(
        ctx: Context<AddMovieReview>,
        title: String,
        description: String,
        rating: u8,
    ) -> Result<()> {
        instructions::add_movie_review::add_movie_review(ctx, title, description, rating)
    }

    /// Replace description and rating of the caller's own review
    pub fn update_movie_review(
        ctx: Context<UpdateMovieReview>,
        title: String,
        description: String,
        rating: u8,
    ) -> Result<()> {
        instructions::update_movie_review::update_movie_review(ctx, title, description, rating)
    }

    /// Delete the caller's own review and reclaim its rent
    pub fn delete_movie_review(ctx: Context<DeleteMovieReview>, title: String) -> Result<()> {
        instructions::delete_movie_review::delete_movie_review(ctx, title)
    }
}
