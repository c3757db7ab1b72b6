// Collateral Transfer Adapter
//
// The engine only computes amounts. Moving tokens and minting shares is
// delegated to a CollateralAdapter: SPL Token CPIs on-chain, in-memory
// balances in tests.

use anchor_lang::prelude::*;

use crate::{
    ledger::PoolLedger,
    provisioning::{provision, AssetSide, DepositQuote, DepositRequest},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareRecipient {
    Depositor,
    // Permanently locked minimum liquidity
    Locked,
}

pub trait CollateralAdapter {
    // Move `amount` of the asset on `side` from the depositor into the pool vault
    fn deposit_collateral(&mut self, side: AssetSide, amount: u64) -> Result<()>;

    fn mint_shares(&mut self, recipient: ShareRecipient, amount: u64) -> Result<()>;
}

// Runs the engine and applies the result as one unit of work.
// The ledger update is staged on a copy and only committed once every
// adapter call succeeded; on error the caller's ledger is unchanged.
pub fn execute_deposit<A: CollateralAdapter>(
    ledger: &mut PoolLedger,
    adapter: &mut A,
    request: DepositRequest,
) -> Result<DepositQuote> {
    let quote = provision(ledger, request.desired_a, request.desired_b)?;

    if let Some(limits) = &request.limits {
        quote.enforce_limits(limits)?;
    }

    let mut staged = *ledger;
    staged.apply_deposit(
        quote.amount_a,
        quote.amount_b,
        quote.shares_minted,
        quote.locked_shares,
    )?;

    adapter.deposit_collateral(AssetSide::A, quote.amount_a)?;
    adapter.deposit_collateral(AssetSide::B, quote.amount_b)?;

    if quote.locked_shares > 0 {
        adapter.mint_shares(ShareRecipient::Locked, quote.locked_shares)?;
    }
    adapter.mint_shares(ShareRecipient::Depositor, quote.shares_minted)?;

    *ledger = staged;

    Ok(quote)
}
