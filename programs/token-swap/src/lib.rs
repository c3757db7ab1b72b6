// Token Swap Program
//
// Two-asset liquidity pool issuing a share token for proportional
// ownership of the reserves. All share math is integer-exact.
//
// Instructions:
// - create_amm: Register a market (id, fee, admin)
// - create_pool: Create vaults and share mint for a token pair
// - deposit_liquidity: Add tokens, receive shares
// - deposit_liquidity_with_limits: Same, rejecting amounts above caller maximums

use anchor_lang::prelude::*;

pub mod adapter;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod provisioning;
pub mod state;

use instructions::*;
use provisioning::DepositLimits;

declare_id!("8ayFHcu4Ra9z9x3HKWiq8G9Qzr57BCexURYh4FdG99K3");

#[program]
pub mod token_swap {
    use super::*;

    pub fn create_amm(ctx: Context<CreateAmm>, id: Pubkey, fee: u16) -> Result<()> {
        ctx.accounts.create_amm(id, fee, &ctx.bumps)
    }

    pub fn create_pool(ctx: Context<CreatePool>) -> Result<()> {
        ctx.accounts.create_pool(&ctx.bumps)
    }

    // The deficient side is raised to the pool ratio and may exceed the
    // amount passed in. Use deposit_liquidity_with_limits to cap it.
    pub fn deposit_liquidity(
        ctx: Context<DepositLiquidity>,
        amount_a: u64,
        amount_b: u64,
    ) -> Result<()> {
        ctx.accounts.deposit_liquidity(amount_a, amount_b, None)
    }

    pub fn deposit_liquidity_with_limits(
        ctx: Context<DepositLiquidity>,
        amount_a: u64,
        amount_b: u64,
        max_amount_a: u64,
        max_amount_b: u64,
    ) -> Result<()> {
        ctx.accounts.deposit_liquidity(
            amount_a,
            amount_b,
            Some(DepositLimits {
                max_amount_a,
                max_amount_b,
            }),
        )
    }
}
