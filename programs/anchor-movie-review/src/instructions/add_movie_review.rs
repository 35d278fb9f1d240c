use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use anchor_spl::associated_token::AssociatedToken;
use crate::constants::*;
use crate::events::{MovieReviewAdded, RewardIssued};
use crate::helpers::reward;
use crate::state::*;

/// Store a new review and reward the reviewer with freshly minted tokens
///
/// Record creation and the mint CPI run in one instruction, so either both
/// land or the transaction is rejected as a whole.
///
/// Titles over `MAX_TITLE_LENGTH` bytes never reach this handler: the
/// `movie_review` seeds reject them while accounts are validated, so the
/// `TitleTooLong` check below only covers direct callers. Clients should
/// pre-check with `derive_review_address`, which returns `TitleTooLong`.
pub fn add_movie_review(
    ctx: Context<AddMovieReview>,
    title: String,
    description: String,
    rating: u8,
) -> Result<()> {
    #[cfg(feature = "verbose")]
    msg!("Title: {}, Description: {}", title, description);
    
    MovieAccountState::validate_content(&title, &description, rating)?;
    reward::ensure_mint_authority(&ctx.accounts.mint.mint_authority, &ctx.accounts.mint.key())?;
    
    let reviewer = ctx.accounts.initializer.key();
    let movie_review = &mut ctx.accounts.movie_review;
    movie_review.reviewer = reviewer;
    movie_review.rating = rating;
    movie_review.title = title;
    movie_review.description = description;
    movie_review.bump = ctx.bumps.movie_review;
    
    msg!("Movie review account created by: {}, rating: {}", reviewer, rating);
    
    emit!(MovieReviewAdded {
        review: movie_review.key(),
        reviewer,
        title: movie_review.title.clone(),
        description: movie_review.description.clone(),
        rating,
    });
    
    let amount = reward::reward_amount(ctx.accounts.mint.decimals)?;
    reward::mint_reward(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.token_account,
        ctx.bumps.mint,
        amount,
    )?;
    
    ctx.accounts.token_account.reload()?;
    let balance = ctx.accounts.token_account.amount;
    
    msg!("Minted {} reward units to: {}, balance: {}", amount, reviewer, balance);
    
    emit!(RewardIssued {
        mint: ctx.accounts.mint.key(),
        recipient: reviewer,
        token_account: ctx.accounts.token_account.key(),
        amount,
        balance,
    });
    
    Ok(())
}

#[derive(Accounts)]
#[instruction(title: String, description: String)]
pub struct AddMovieReview<'info> {
    /// Review record PDA; `init` rejects an address that is already in use
    #[account(
        init,
        seeds = [title.as_bytes(), initializer.key().as_ref()],
        bump,
        payer = initializer,
        space = MovieAccountState::space(&title, &description),
    )]
    pub movie_review: Account<'info, MovieAccountState>,
    
    /// The reviewer, pays for the record and the token account
    #[account(mut)]
    pub initializer: Signer<'info>,
    
    /// Reward mint PDA
    #[account(
        mut,
        seeds = [MINT_SEED],
        bump,
    )]
    pub mint: Account<'info, Mint>,
    
    /// Reviewer's reward holding (ATA)
    /// Will be created if it doesn't exist
    #[account(
        init_if_needed,
        payer = initializer,
        associated_token::mint = mint,
        associated_token::authority = initializer,
    )]
    pub token_account: Account<'info, TokenAccount>,
    
    /// Token program
    pub token_program: Program<'info, Token>,
    
    /// Associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
    
    /// System program
    pub system_program: Program<'info, System>,
}
