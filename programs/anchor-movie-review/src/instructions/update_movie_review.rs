use anchor_lang::prelude::*;
use crate::events::MovieReviewUpdated;
use crate::state::*;

/// Overwrite description and rating of an existing review.
/// No reward is minted on update.
pub fn update_movie_review(
    ctx: Context<UpdateMovieReview>,
    title: String,
    description: String,
    rating: u8,
) -> Result<()> {
    #[cfg(feature = "verbose")]
    msg!("Title: {}, Description: {}", title, description);
    
    let caller = ctx.accounts.initializer.key();
    let movie_review = &mut ctx.accounts.movie_review;
    movie_review.apply_update(&caller, description, rating)?;
    
    msg!("Movie review account space reallocated, rating: {}", rating);
    
    emit!(MovieReviewUpdated {
        review: movie_review.key(),
        reviewer: movie_review.reviewer,
        title,
        description: movie_review.description.clone(),
        rating: movie_review.rating,
    });
    
    Ok(())
}

#[derive(Accounts)]
#[instruction(title: String, description: String)]
pub struct UpdateMovieReview<'info> {
    /// Review record PDA, re-derived from the stored reviewer so a foreign
    /// signer reaches the ownership check instead of a seeds mismatch
    #[account(
        mut,
        seeds = [title.as_bytes(), movie_review.reviewer.as_ref()],
        bump = movie_review.bump,
        realloc = MovieAccountState::space(&title, &description),
        realloc::payer = initializer,
        realloc::zero = true,
    )]
    pub movie_review: Account<'info, MovieAccountState>,
    
    /// Must be the reviewer; pays for growth, refunded on shrink
    #[account(mut)]
    pub initializer: Signer<'info>,
    
    /// System program
    pub system_program: Program<'info, System>,
}
