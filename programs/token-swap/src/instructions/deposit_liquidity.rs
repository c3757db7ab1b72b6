// Deposit Liquidity Instruction
//
// Adds liquidity to a pool and credits shares to the depositor.
// First deposit: shares = sqrt(a * b) - MINIMUM_LIQUIDITY
// Subsequent: deficient side raised to the pool ratio, shares proportional

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{mint_to, transfer, Mint, MintTo, Token, TokenAccount, Transfer},
};

use crate::{
    adapter::{execute_deposit, CollateralAdapter, ShareRecipient},
    constants::*,
    errors::*,
    events::LiquidityDeposited,
    ledger::PoolLedger,
    provisioning::{AssetSide, DepositLimits, DepositRequest},
    state::*,
};

#[derive(Accounts)]
pub struct DepositLiquidity<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        seeds = [
            pool.amm.as_ref(),
            pool.mint_a.as_ref(),
            pool.mint_b.as_ref(),
        ],
        bump = pool.bump,
        has_one = mint_a,
        has_one = mint_b,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: PDA signer
    #[account(
        seeds = [
            pool.amm.as_ref(),
            pool.mint_a.as_ref(),
            pool.mint_b.as_ref(),
            AUTHORITY_SEED,
        ],
        bump = pool.authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [
            pool.amm.as_ref(),
            pool.mint_a.as_ref(),
            pool.mint_b.as_ref(),
            LIQUIDITY_SEED,
        ],
        bump = pool.mint_bump,
        mint::authority = pool_authority,
    )]
    pub mint_liquidity: Box<Account<'info, Mint>>,

    pub mint_a: Box<Account<'info, Mint>>,
    pub mint_b: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = pool_authority,
    )]
    pub pool_account_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint_b,
        associated_token::authority = pool_authority,
    )]
    pub pool_account_b: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [pool.key().as_ref(), LOCKED_LIQUIDITY_SEED],
        bump = pool.locked_bump,
        token::mint = mint_liquidity,
        token::authority = pool_authority,
    )]
    pub locked_liquidity: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = mint_liquidity,
        associated_token::authority = depositor,
    )]
    pub depositor_account_liquidity: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint_a,
        token::authority = depositor,
    )]
    pub depositor_account_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint_b,
        token::authority = depositor,
    )]
    pub depositor_account_b: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> DepositLiquidity<'info> {
    pub fn deposit_liquidity(
        &mut self,
        amount_a: u64,
        amount_b: u64,
        limits: Option<DepositLimits>,
    ) -> Result<()> {
        // Vault balances, not a cached counter, are the reserves
        let mut ledger = PoolLedger::from_vaults(
            self.pool_account_a.amount,
            self.pool_account_b.amount,
            self.mint_liquidity.supply,
        );

        let request = DepositRequest {
            desired_a: amount_a,
            desired_b: amount_b,
            limits,
        };

        let quote = execute_deposit(&mut ledger, &mut SplTokenAdapter { accounts: self }, request)?;

        self.verify_vaults(&ledger)?;

        if let Some(side) = quote.raised_side {
            msg!(
                "Deficient side {:?} raised to {} to match pool ratio",
                side,
                quote.amount(side)
            );
        }
        msg!(
            "Deposited: {} A, {} B -> {} shares ({} locked)",
            quote.amount_a,
            quote.amount_b,
            quote.shares_minted,
            quote.locked_shares
        );

        let (reserve_a, reserve_b) = ledger.current_reserves();
        emit!(LiquidityDeposited {
            pool: self.pool.key(),
            depositor: self.depositor.key(),
            amount_a: quote.amount_a,
            amount_b: quote.amount_b,
            shares_minted: quote.shares_minted,
            locked_shares: quote.locked_shares,
            raised_side: quote.raised_side,
            reserve_a,
            reserve_b,
            share_supply: ledger.current_share_supply(),
        });

        Ok(())
    }

    // The committed ledger must match what the token program actually did
    fn verify_vaults(&mut self, ledger: &PoolLedger) -> Result<()> {
        self.pool_account_a.reload()?;
        self.pool_account_b.reload()?;
        self.mint_liquidity.reload()?;

        let observed = PoolLedger::from_vaults(
            self.pool_account_a.amount,
            self.pool_account_b.amount,
            self.mint_liquidity.supply,
        );
        require!(observed == *ledger, SwapError::LedgerMismatch);

        Ok(())
    }
}

// SPL Token implementation of the transfer collaborator
struct SplTokenAdapter<'a, 'info> {
    accounts: &'a DepositLiquidity<'info>,
}

impl<'a, 'info> CollateralAdapter for SplTokenAdapter<'a, 'info> {
    fn deposit_collateral(&mut self, side: AssetSide, amount: u64) -> Result<()> {
        let (from, to) = match side {
            AssetSide::A => (
                self.accounts.depositor_account_a.to_account_info(),
                self.accounts.pool_account_a.to_account_info(),
            ),
            AssetSide::B => (
                self.accounts.depositor_account_b.to_account_info(),
                self.accounts.pool_account_b.to_account_info(),
            ),
        };

        transfer(
            CpiContext::new(
                self.accounts.token_program.to_account_info(),
                Transfer {
                    from,
                    to,
                    authority: self.accounts.depositor.to_account_info(),
                },
            ),
            amount,
        )
    }

    fn mint_shares(&mut self, recipient: ShareRecipient, amount: u64) -> Result<()> {
        let to = match recipient {
            ShareRecipient::Depositor => self.accounts.depositor_account_liquidity.to_account_info(),
            ShareRecipient::Locked => self.accounts.locked_liquidity.to_account_info(),
        };

        let pool = &self.accounts.pool;
        let authority_seeds = &[
            pool.amm.as_ref(),
            pool.mint_a.as_ref(),
            pool.mint_b.as_ref(),
            AUTHORITY_SEED,
            &[pool.authority_bump],
        ];
        let signer_seeds = &[&authority_seeds[..]];

        mint_to(
            CpiContext::new_with_signer(
                self.accounts.token_program.to_account_info(),
                MintTo {
                    mint: self.accounts.mint_liquidity.to_account_info(),
                    to,
                    authority: self.accounts.pool_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}
