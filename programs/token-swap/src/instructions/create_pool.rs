// Create Pool Instruction
//
// Creates the pool record, its authority PDA, the share mint, both vaults
// and the account holding the locked minimum liquidity.
// Only the AMM admin can create pools.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, events::PoolCreated, state::*};

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [AMM_SEED, amm.id.as_ref()],
        bump = amm.bump,
        has_one = admin,
    )]
    pub amm: Box<Account<'info, Amm>>,

    pub mint_a: Box<Account<'info, Mint>>,
    pub mint_b: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + Pool::INIT_SPACE,
        seeds = [
            amm.key().as_ref(),
            mint_a.key().as_ref(),
            mint_b.key().as_ref(),
        ],
        bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: PDA signer for vaults and share mint, holds no data
    #[account(
        seeds = [
            amm.key().as_ref(),
            mint_a.key().as_ref(),
            mint_b.key().as_ref(),
            AUTHORITY_SEED,
        ],
        bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        seeds = [
            amm.key().as_ref(),
            mint_a.key().as_ref(),
            mint_b.key().as_ref(),
            LIQUIDITY_SEED,
        ],
        bump,
        mint::decimals = LIQUIDITY_DECIMALS,
        mint::authority = pool_authority,
    )]
    pub mint_liquidity: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = admin,
        associated_token::mint = mint_a,
        associated_token::authority = pool_authority,
    )]
    pub pool_account_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = admin,
        associated_token::mint = mint_b,
        associated_token::authority = pool_authority,
    )]
    pub pool_account_b: Box<Account<'info, TokenAccount>>,

    // Receives MINIMUM_LIQUIDITY on the first deposit; nothing transfers out of it
    #[account(
        init,
        payer = admin,
        seeds = [pool.key().as_ref(), LOCKED_LIQUIDITY_SEED],
        bump,
        token::mint = mint_liquidity,
        token::authority = pool_authority,
    )]
    pub locked_liquidity: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreatePool<'info> {
    pub fn create_pool(&mut self, bumps: &CreatePoolBumps) -> Result<()> {
        Pool::assert_canonical_pair(&self.mint_a.key(), &self.mint_b.key())?;

        self.pool.set_inner(Pool {
            amm: self.amm.key(),
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            authority_bump: bumps.pool_authority,
            mint_bump: bumps.mint_liquidity,
            locked_bump: bumps.locked_liquidity,
            bump: bumps.pool,
        });

        emit!(PoolCreated {
            amm: self.amm.key(),
            pool: self.pool.key(),
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            mint_liquidity: self.mint_liquidity.key(),
        });

        msg!(
            "Pool created: {} / {}",
            self.mint_a.key(),
            self.mint_b.key()
        );

        Ok(())
    }
}
