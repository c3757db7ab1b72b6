// Liquidity Provisioning Engine
//
// Turns a requested two-sided deposit into the exact amounts to pull from
// the depositor and the shares to mint.
//
// First deposit:  shares = sqrt(a * b) - MINIMUM_LIQUIDITY
// Subsequent:     the deficient side is raised to the pool ratio,
//                 shares = min(a * S / reserve_a, b * S / reserve_b)

use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;
use std::cmp::Ordering;

use crate::{
    constants::MINIMUM_LIQUIDITY,
    errors::SwapError,
    ledger::PoolLedger,
    math::{checked_add, checked_sub, cross_cmp, geometric_mean, mul_div},
};

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSide {
    A,
    B,
}

impl AssetSide {
    pub fn other(self) -> Self {
        match self {
            AssetSide::A => AssetSide::B,
            AssetSide::B => AssetSide::A,
        }
    }
}

// Upper bounds a caller can opt into; without them the deficient side
// may be debited more than was asked for
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositLimits {
    pub max_amount_a: u64,
    pub max_amount_b: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositRequest {
    pub desired_a: u64,
    pub desired_b: u64,
    pub limits: Option<DepositLimits>,
}

impl DepositRequest {
    pub fn new(desired_a: u64, desired_b: u64) -> Self {
        Self {
            desired_a,
            desired_b,
            limits: None,
        }
    }

    pub fn with_limits(self, max_amount_a: u64, max_amount_b: u64) -> Self {
        Self {
            limits: Some(DepositLimits {
                max_amount_a,
                max_amount_b,
            }),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositQuote {
    pub amount_a: u64,
    pub amount_b: u64,
    // Credited to the depositor
    pub shares_minted: u64,
    // Credited to no one; non-zero only on the bootstrap deposit
    pub locked_shares: u64,
    // Side whose amount was raised above the caller's figure to match the pool ratio
    pub raised_side: Option<AssetSide>,
}

impl DepositQuote {
    pub fn amount(&self, side: AssetSide) -> u64 {
        match side {
            AssetSide::A => self.amount_a,
            AssetSide::B => self.amount_b,
        }
    }

    // Total increase of the share supply
    pub fn supply_delta(&self) -> Result<u64> {
        checked_add(self.shares_minted, self.locked_shares)
    }

    pub fn enforce_limits(&self, limits: &DepositLimits) -> Result<()> {
        require!(self.amount_a <= limits.max_amount_a, SwapError::ExcessiveDepositAmount);
        require!(self.amount_b <= limits.max_amount_b, SwapError::ExcessiveDepositAmount);
        Ok(())
    }
}

pub fn provision(ledger: &PoolLedger, desired_a: u64, desired_b: u64) -> Result<DepositQuote> {
    require!(desired_a > 0, SwapError::InvalidAmount);
    require!(desired_b > 0, SwapError::InvalidAmount);

    if ledger.is_empty() {
        bootstrap_deposit(desired_a, desired_b)
    } else {
        let (reserve_a, reserve_b) = ledger.current_reserves();
        proportional_deposit(
            desired_a,
            desired_b,
            reserve_a,
            reserve_b,
            ledger.current_share_supply(),
        )
    }
}

// No existing ratio to respect: both amounts are taken in full
fn bootstrap_deposit(amount_a: u64, amount_b: u64) -> Result<DepositQuote> {
    let total_shares = geometric_mean(amount_a, amount_b)?;

    require!(total_shares > MINIMUM_LIQUIDITY, SwapError::DeficientLiquidity);

    let shares_minted = checked_sub(total_shares, MINIMUM_LIQUIDITY)?;

    Ok(DepositQuote {
        amount_a,
        amount_b,
        shares_minted,
        locked_shares: MINIMUM_LIQUIDITY,
        raised_side: None,
    })
}

fn proportional_deposit(
    desired_a: u64,
    desired_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    share_supply: u64,
) -> Result<DepositQuote> {
    // Shares outstanding against an empty vault cannot be priced
    require!(reserve_a > 0 && reserve_b > 0, SwapError::DeficientLiquidity);

    // desired_a / desired_b < reserve_a / reserve_b  =>  A is deficient
    let a_deficient = cross_cmp(desired_a, desired_b, reserve_a, reserve_b) == Ordering::Less;

    let (amount_a, amount_b, raised_side) = if a_deficient {
        let amount_a = mul_div(desired_b, reserve_a, reserve_b)?;
        let raised = (amount_a > desired_a).then_some(AssetSide::A);
        (amount_a, desired_b, raised)
    } else {
        let amount_b = mul_div(desired_a, reserve_b, reserve_a)?;
        let raised = (amount_b > desired_b).then_some(AssetSide::B);
        (desired_a, amount_b, raised)
    };

    require!(amount_a > 0 && amount_b > 0, SwapError::DeficientLiquidity);

    // The floored side can be worth far less than the side held fixed
    // when its amount is a few units; credit the smaller claim
    let shares_minted = mul_div(amount_a, share_supply, reserve_a)?
        .min(mul_div(amount_b, share_supply, reserve_b)?);

    require!(shares_minted > 0, SwapError::DeficientLiquidity);

    Ok(DepositQuote {
        amount_a,
        amount_b,
        shares_minted,
        locked_shares: 0,
        raised_side,
    })
}
