// Pool Ledger
//
// Reserve balances and share supply of one pool. Built from the vault
// balances and the share mint supply, never from a cached counter, so
// direct transfers into the vaults are always accounted for.

use anchor_lang::prelude::*;

use crate::math::checked_add;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolLedger {
    reserve_a: u64,
    reserve_b: u64,
    share_supply: u64,
}

impl PoolLedger {
    pub fn from_vaults(reserve_a: u64, reserve_b: u64, share_supply: u64) -> Self {
        Self {
            reserve_a,
            reserve_b,
            share_supply,
        }
    }

    pub fn current_reserves(&self) -> (u64, u64) {
        (self.reserve_a, self.reserve_b)
    }

    pub fn current_share_supply(&self) -> u64 {
        self.share_supply
    }

    // No shares outstanding: the next deposit sets the exchange rate
    pub fn is_empty(&self) -> bool {
        self.share_supply == 0
    }

    // Sole mutation entry point for provisioning.
    // All sums are checked before any field is written.
    pub fn apply_deposit(
        &mut self,
        amount_a: u64,
        amount_b: u64,
        shares_minted: u64,
        locked_delta: u64,
    ) -> Result<()> {
        let reserve_a = checked_add(self.reserve_a, amount_a)?;
        let reserve_b = checked_add(self.reserve_b, amount_b)?;
        let share_supply = checked_add(checked_add(self.share_supply, shares_minted)?, locked_delta)?;

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.share_supply = share_supply;

        Ok(())
    }
}
