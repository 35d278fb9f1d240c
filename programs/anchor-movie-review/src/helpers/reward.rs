use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};
use crate::constants::*;
use crate::errors::MovieReviewError;

/// Base units minted per new review: REWARD_TOKENS scaled by the mint decimals
pub fn reward_amount(decimals: u8) -> Result<u64> {
    10u64
        .checked_pow(decimals as u32)
        .and_then(|scale| REWARD_TOKENS.checked_mul(scale))
        .ok_or_else(|| error!(MovieReviewError::NumericalOverflow))
}

/// The reward mint must be its own mint authority
pub fn ensure_mint_authority(mint_authority: &COption<Pubkey>, mint: &Pubkey) -> Result<()> {
    require!(
        *mint_authority == COption::Some(*mint),
        MovieReviewError::InvalidMintAuthority
    );
    Ok(())
}

/// Mint reward tokens into `to`, signing as the mint PDA
#[inline(never)]
pub fn mint_reward<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    to: &Account<'info, TokenAccount>,
    mint_bump: u8,
    amount: u64,
) -> Result<()> {
    let mint_seeds = &[MINT_SEED, &[mint_bump]];
    let signer_seeds = &[&mint_seeds[..]];

    token::mint_to(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            MintTo {
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: mint.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}
