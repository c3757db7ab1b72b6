// Instructions module
// - create_amm
// - create_pool (admin only)
// - deposit_liquidity
// - deposit_liquidity_with_limits

pub mod create_amm;
pub mod create_pool;
pub mod deposit_liquidity;

pub use create_amm::*;
pub use create_pool::*;
pub use deposit_liquidity::*;
