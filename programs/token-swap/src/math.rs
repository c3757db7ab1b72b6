// Integer arithmetic kernel
//
// Every reserve/share computation goes through these helpers.
// Products are widened to u128; results that do not fit back into u64
// fail with ArithmeticOverflow instead of wrapping.

use anchor_lang::prelude::*;

use crate::errors::SwapError;

// floor(a * b / c)
pub fn mul_div(a: u64, b: u64, c: u64) -> Result<u64> {
    require!(c != 0, SwapError::DivisionByZero);

    // u64 * u64 always fits in u128
    let product = (a as u128)
        .checked_mul(b as u128)
        .ok_or(SwapError::ArithmeticOverflow)?;

    let quotient = product
        .checked_div(c as u128)
        .ok_or(SwapError::DivisionByZero)?;

    u64::try_from(quotient).map_err(|_| error!(SwapError::ArithmeticOverflow))
}

// floor(sqrt(n)) using integer Newton iteration.
// Starts from a power of two >= sqrt(n) so the sequence decreases monotonically.
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    let bits = 128 - n.leading_zeros();
    let mut x = 1u128 << ((bits + 1) / 2);

    loop {
        let y = (x + n / x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}

// sqrt(a * b), floored
pub fn geometric_mean(a: u64, b: u64) -> Result<u64> {
    let product = (a as u128)
        .checked_mul(b as u128)
        .ok_or(SwapError::ArithmeticOverflow)?;

    u64::try_from(isqrt(product)).map_err(|_| error!(SwapError::ArithmeticOverflow))
}

pub fn checked_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(error!(SwapError::ArithmeticOverflow))
}

pub fn checked_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(error!(SwapError::ArithmeticOverflow))
}

// Exact comparison of a/b against c/d without division: a*d vs c*b
pub fn cross_cmp(a: u64, b: u64, c: u64, d: u64) -> std::cmp::Ordering {
    ((a as u128) * (d as u128)).cmp(&((c as u128) * (b as u128)))
}
