use anchor_lang::prelude::*;
use crate::events::MovieReviewDeleted;
use crate::state::*;

/// Close a review and refund its rent to the reviewer.
/// Rewards already minted for it are kept.
pub fn delete_movie_review(ctx: Context<DeleteMovieReview>, title: String) -> Result<()> {
    let movie_review = &ctx.accounts.movie_review;
    movie_review.ensure_reviewer(&ctx.accounts.initializer.key())?;
    
    msg!("Movie review for {} deleted", title);
    
    emit!(MovieReviewDeleted {
        review: movie_review.key(),
        reviewer: movie_review.reviewer,
        title,
    });
    
    Ok(())
}

#[derive(Accounts)]
#[instruction(title: String)]
pub struct DeleteMovieReview<'info> {
    /// Review record PDA, closed to the reviewer on success
    #[account(
        mut,
        seeds = [title.as_bytes(), movie_review.reviewer.as_ref()],
        bump = movie_review.bump,
        close = initializer,
    )]
    pub movie_review: Account<'info, MovieAccountState>,
    
    /// Must be the reviewer; receives the reclaimed lamports
    #[account(mut)]
    pub initializer: Signer<'info>,
    
    /// System program
    pub system_program: Program<'info, System>,
}
