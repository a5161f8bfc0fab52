#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Small integer helpers shared by [`crate::algebra`] and [`crate::bigmodarith`].

use std::borrow::Borrow;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use std::mem;

/// Returns the number of bits required to encode the given number.
pub fn cnt_bits_repr<T: Borrow<BigUint>>(n: &T) -> usize {
    let n: &BigUint = n.borrow();
    if n.is_zero() {
        1
    } else {
        n.bits() as usize
    }
}

/// Encodes a [`BigUint`] in big-endian as a left-padded byte string of length `len`.
pub fn to_be_bytes_left_pad<T: Borrow<BigUint>>(n: &T, len: usize) -> Vec<u8> {
    let n: &BigUint = n.borrow();

    let mut v = n.to_bytes_be();

    if v.len() < len {
        let left_pad = len - v.len();
        v.reserve(left_pad);
        v.extend(std::iter::repeat(0).take(left_pad));
        v.rotate_right(left_pad);
    }

    v
}

/// Computes the inverse of `a_u` modulo `m_u`, if it exists.
pub fn mod_inverse(a_u: &BigUint, m_u: &BigUint) -> Option<BigUint> {
    if m_u.is_zero() {
        return None;
    }
    let m = BigInt::from_biguint(Sign::Plus, m_u.clone());
    let mut t = (BigInt::zero(), BigInt::one());
    let mut r = (m.clone(), BigInt::from_biguint(Sign::Plus, a_u.clone()));
    while !r.1.is_zero() {
        let q = &r.0 / &r.1;
        let f = |mut r: (BigInt, BigInt)| {
            mem::swap(&mut r.0, &mut r.1);
            r.1 -= &q * &r.0;
            r
        };
        r = f(r);
        t = f(t);
    }
    if r.0.is_one() {
        if t.0 < BigInt::zero() {
            return Some((t.0 + m).magnitude().clone());
        }
        return Some(t.0.magnitude().clone());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cnt_bits_repr() {
        assert_eq!(cnt_bits_repr(&BigUint::from(0_u8)), 1);
        assert_eq!(cnt_bits_repr(&BigUint::from(1_u8)), 1);
        assert_eq!(cnt_bits_repr(&BigUint::from(2_u8)), 2);
        assert_eq!(cnt_bits_repr(&BigUint::from(255_u8)), 8);
        assert_eq!(cnt_bits_repr(&BigUint::from(256_u32)), 9);
    }

    #[test]
    fn test_to_be_bytes_left_pad() {
        let x_ff = BigUint::from(0xff_usize);
        assert_eq!(to_be_bytes_left_pad(&x_ff, 0), vec![0xff]);
        assert_eq!(to_be_bytes_left_pad(&x_ff, 1), vec![0xff]);
        assert_eq!(to_be_bytes_left_pad(&x_ff, 2), vec![0x00, 0xff]);
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(
            mod_inverse(&BigUint::from(3_u8), &BigUint::from(11_u8)),
            Some(BigUint::from(4_u8))
        );
        assert_eq!(mod_inverse(&BigUint::from(0_u8), &BigUint::from(11_u8)), None);
        assert_eq!(mod_inverse(&BigUint::from(3_u8), &BigUint::from(12_u8)), None);
    }
}
