use anchor_lang::prelude::*;

#[error_code]
pub enum SwapError {
    #[msg("Fee must be below 10000 basis points")]
    InvalidFee,

    #[msg("Token mints must be different - cannot create pool with same token")]
    IdenticalTokenMints,

    #[msg("Token mints must be passed in canonical order (mint_a < mint_b)")]
    UnorderedTokenMints,

    #[msg("Deposit amount cannot be zero")]
    InvalidAmount,

    #[msg("Arithmetic overflow occurred")]
    ArithmeticOverflow,

    #[msg("Division by zero attempted")]
    DivisionByZero,

    #[msg("Deposit is too small to mint any liquidity")]
    DeficientLiquidity,

    #[msg("Deposited amount exceeds maximum allowed")]
    ExcessiveDepositAmount,

    #[msg("Vault balances do not match the pool ledger after deposit")]
    LedgerMismatch,
}
