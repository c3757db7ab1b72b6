use anchor_lang::prelude::*;

use crate::provisioning::AssetSide;

/// Emitted when a registry entry is created
#[event]
pub struct AmmCreated {
    pub amm: Pubkey,
    pub id: Pubkey,
    pub admin: Pubkey,
    pub fee: u16,
}

/// Emitted when a pool is created under an AMM
#[event]
pub struct PoolCreated {
    pub amm: Pubkey,
    pub pool: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub mint_liquidity: Pubkey,
}

/// Emitted after every successful deposit
#[event]
pub struct LiquidityDeposited {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub amount_a: u64,
    pub amount_b: u64,
    pub shares_minted: u64,
    pub locked_shares: u64,
    pub raised_side: Option<AssetSide>,
    pub reserve_a: u64,
    pub reserve_b: u64,
    pub share_supply: u64,
}
