// AMM Registry Entry

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

#[account]
#[derive(InitSpace)]
pub struct Amm {
    pub id: Pubkey,     // Distinguishes markets on the same token pair
    pub admin: Pubkey,  // Only signer allowed to create pools
    pub fee: u16,       // Swap fee in basis points, fixed at creation
    pub bump: u8,
}

impl Amm {
    pub fn validate_fee(fee: u16) -> Result<()> {
        require!(fee < MAX_FEE_BASIS_POINTS, SwapError::InvalidFee);
        Ok(())
    }
}
