// Pool State
//
// Reserves are not stored here: the vault balances and the share mint
// supply are the source of truth (see ledger.rs).

use anchor_lang::prelude::*;

use crate::errors::*;

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub amm: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub authority_bump: u8,
    pub mint_bump: u8,
    pub locked_bump: u8,
    pub bump: u8,
}

impl Pool {
    // One pool per unordered pair: callers must pass mint_a < mint_b
    pub fn assert_canonical_pair(mint_a: &Pubkey, mint_b: &Pubkey) -> Result<()> {
        require_keys_neq!(*mint_a, *mint_b, SwapError::IdenticalTokenMints);
        require!(mint_a < mint_b, SwapError::UnorderedTokenMints);
        Ok(())
    }
}
