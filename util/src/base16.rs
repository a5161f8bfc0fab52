#![deny(clippy::expect_used)]
#![deny(clippy::manual_assert)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]

//! Fixed-width uppercase hex rendering of `BigUint`, matching the encoding used
//! throughout the published election artifacts.

use anyhow::{bail, ensure, Result};
use num_bigint::BigUint;

/// Parses a `BigUint` from a hex literal that may contain whitespace (including
/// newlines) as visual grouping, such as the multi-line constants used to embed
/// the standard 4096-bit and 256-bit ElectionGuard parameters in source code.
pub fn hex_to_biguint(s: &str) -> BigUint {
    let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    BigUint::parse_bytes(digits.as_bytes(), 16).unwrap_or_default()
}

/// Converts a `BigUint` to a string using uppercase hex digits with no prefix.
///
/// `fixed_len_bits` - the result will be padded with leading zeros to the *number of bytes* required
/// to hold the specified number of bits. If the input number is too large, then an error is returned.
pub fn to_string_uppercase_hex_bits(u: &BigUint, fixed_len_bits: u32) -> Result<String> {
    let fixed_len_bits = (fixed_len_bits as u64).max(1);
    let fixed_len_bytes = fixed_len_bits.div_ceil(8);
    let fixed_len_digits = fixed_len_bytes * 2;
    let fixed_len_bits = fixed_len_digits * 4;

    let value_bits = u.bits().max(1);
    ensure!(
        value_bits <= fixed_len_bits,
        "Value of {value_bits} bits is too large for specified fixed length of {fixed_len_bits} bit result."
    );

    let value_digits = value_bits.div_ceil(4);

    let s = if value_digits < fixed_len_digits {
        let prepend_leading = fixed_len_digits - value_digits;
        let leading_zeros = "0".repeat(prepend_leading as usize);
        format!("{leading_zeros}{u:X}")
    } else {
        format!("{u:X}")
    };

    ensure!(
        s.len() as u64 == fixed_len_digits,
        "Output length mismatch. Got {}, expected {fixed_len_digits}",
        s.len()
    );

    Ok(s)
}

/// Read a `BigUint` number from a string, requiring uppercase hex digits only.
pub fn biguint_from_str_uppercase_hex_bits(s: &str, fixed_len_bits: u32) -> Result<BigUint> {
    let needed_bytes = (fixed_len_bits as u64).div_ceil(8);
    let needed_digits = needed_bytes * 2;

    let s_len = s.len();
    let s_len_u64 = s_len as u64;
    ensure!(
        needed_digits == s_len_u64,
        "Expecting {needed_digits} uppercase hex digits, got {s_len} characters."
    );

    // Iterate the string in reverse, to accumulate the limbs in little-endian order.

    let mut limbs = Vec::<u32>::with_capacity(s.len() / 8 + 1);
    let mut u: u32 = 0;
    let mut next_shift = 0;

    for ch in s.chars().rev() {
        let hexdigit_value = match ch {
            '0'..='9' => ch as u32 - b'0' as u32,
            'A'..='F' => ch as u32 - b'A' as u32 + 10,
            _ => bail!("Invalid character in base16 uppercase number: {}", ch),
        };

        u |= hexdigit_value << next_shift;
        next_shift += 4;

        if next_shift == 32 {
            limbs.push(u);
            u = 0;
            next_shift = 0;
        }
    }

    if u != 0 {
        limbs.push(u);
    }

    while limbs.last() == Some(&0) {
        limbs.pop();
    }

    Ok(BigUint::new(limbs))
}
