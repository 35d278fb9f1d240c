use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};
use crate::constants::*;
use crate::events::TokenMintInitialized;

/// Create the reward mint. Runs once: a second call fails because the
/// mint PDA is already allocated.
pub fn initialize_token_mint(ctx: Context<InitializeTokenMint>) -> Result<()> {
    let mint = &ctx.accounts.mint;
    
    msg!("Token mint initialized: {}, decimals: {}", mint.key(), mint.decimals);
    
    emit!(TokenMintInitialized {
        mint: mint.key(),
        mint_authority: mint.key(),
        decimals: mint.decimals,
        payer: ctx.accounts.user.key(),
    });
    
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeTokenMint<'info> {
    /// Reward mint PDA, also its own mint authority
    #[account(
        init,
        seeds = [MINT_SEED],
        bump,
        payer = user,
        mint::decimals = REWARD_MINT_DECIMALS,
        mint::authority = mint,
    )]
    pub mint: Account<'info, Mint>,
    
    /// Pays for the mint account
    #[account(mut)]
    pub user: Signer<'info>,
    
    /// Token program
    pub token_program: Program<'info, Token>,
    
    /// Rent sysvar
    pub rent: Sysvar<'info, Rent>,
    
    /// System program
    pub system_program: Program<'info, System>,
}
