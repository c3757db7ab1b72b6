// Token Swap Program Constants

pub const AMM_SEED: &[u8] = b"amm";
pub const AUTHORITY_SEED: &[u8] = b"authority";
pub const LIQUIDITY_SEED: &[u8] = b"liquidity";
pub const LOCKED_LIQUIDITY_SEED: &[u8] = b"locked_liquidity";

// Fee is stored in basis points and must stay strictly below 100%
pub const MAX_FEE_BASIS_POINTS: u16 = 10_000;

// Shares minted on the first deposit and credited to no depositor.
pub const MINIMUM_LIQUIDITY: u64 = 100;

pub const LIQUIDITY_DECIMALS: u8 = 6;

pub const ANCHOR_DISCRIMINATOR: usize = 8;
