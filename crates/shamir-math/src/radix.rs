//! Positional notation in radices 2 through 36.
//!
//! Digits are `0-9` followed by the letters `a-z`, which are accepted in
//! either case. Values are decoded into unbounded integers so no base or
//! length can overflow.

use crate::{Error, Result};
use num_bigint::BigInt;
use num_traits::Zero;

/// Smallest supported radix.
pub const MIN_BASE: u32 = 2;

/// Largest supported radix.
pub const MAX_BASE: u32 = 36;

fn check_base(base: u32) -> Result<()> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::InvalidBase(base));
    }
    Ok(())
}

/// Returns the value of the digit `c` in radix `base`, or `None` if `c` is
/// not a digit of that radix.
pub fn digit_value(c: char, base: u32) -> Option<u32> {
    c.to_digit(MAX_BASE).filter(|d| *d < base)
}

/// Decode `value`, written most significant digit first in radix `base`.
///
/// Returns an error at the first character that is not a digit of `base`;
/// no partial result is ever produced.
pub fn decode(value: &str, base: u32) -> Result<BigInt> {
    check_base(base)?;
    if value.is_empty() {
        return Err(Error::EmptyValue);
    }

    let mut result = BigInt::zero();
    for (position, character) in value.chars().enumerate() {
        let digit = digit_value(character, base).ok_or(Error::InvalidDigit {
            character,
            position,
            base,
        })?;
        result *= base;
        result += digit;
    }
    Ok(result)
}

/// Encode `value` in radix `base` with lowercase digits and no leading zeros.
/// Negative values are prefixed with `-`.
pub fn encode(value: &BigInt, base: u32) -> Result<String> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}
