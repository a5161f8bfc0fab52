#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Raw modular-arithmetic operations over `BigUint`, used by the hash composer and
//! the verification stages before values are lifted into the typed [`crate::algebra`]
//! wrappers (or after they are lowered back out of them for hashing).
//!
//! Every operation here is pure and side-effect free: it reads published values, it
//! never generates secret material.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::algebra::{Group, ScalarField};

/// Namespace for the modular-arithmetic operations over the election's fixed
/// group `Z_p^r` and field `Z_q`.
pub struct BigModArith;

impl BigModArith {
    /// Computes the product of an arbitrary number of factors modulo `p`.
    ///
    /// The empty product is defined to be `1`, the multiplicative identity.
    pub fn mul_p(group: &Group, factors: &[&BigUint]) -> BigUint {
        factors
            .iter()
            .fold(BigUint::one(), |acc, f| (acc * *f) % group.modulus())
    }

    /// Computes `base^exponent mod p`.
    pub fn pow_p(group: &Group, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, group.modulus())
    }

    /// Computes the sum of an arbitrary number of terms modulo `q`.
    ///
    /// The empty sum is defined to be `0`, the additive identity.
    pub fn add_q(field: &ScalarField, terms: &[&BigUint]) -> BigUint {
        terms
            .iter()
            .fold(BigUint::zero(), |acc, t| (acc + *t) % field.order())
    }

    /// Lifts an arbitrary non-negative integer into `Z_p` by reducing it modulo `p`.
    ///
    /// Zero is not itself a valid group element (it has no multiplicative inverse),
    /// so a value that reduces to zero is mapped to `p` instead, matching the
    /// convention used by the published artifacts when an encoded message happens
    /// to land on a multiple of the modulus.
    pub fn int_to_p(group: &Group, x: &BigUint) -> BigUint {
        let reduced = x % group.modulus();
        if reduced.is_zero() {
            group.modulus().clone()
        } else {
            reduced
        }
    }

    /// Returns true if `x` is a valid member of the subgroup of order `q` in `Z_p^r`,
    /// i.e. `0 <= x < p` and `x^q mod p == 1`.
    pub fn is_valid_residue(group: &Group, x: &BigUint) -> bool {
        x < group.modulus() && x.modpow(group.order(), group.modulus()).is_one()
    }

    /// Returns true if `0 <= x < q`.
    pub fn is_in_bounds_q(field: &ScalarField, x: &BigUint) -> bool {
        x < field.order()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn toy() -> (ScalarField, Group) {
        (
            ScalarField::new_unchecked(BigUint::from(127_u8)),
            Group::new_unchecked(
                BigUint::from(59183_u32),
                BigUint::from(127_u8),
                BigUint::from(32616_u32),
            ),
        )
    }

    #[test]
    fn mul_p_empty_product_is_one() {
        let (_, group) = toy();
        assert_eq!(BigModArith::mul_p(&group, &[]), BigUint::one());
    }

    #[test]
    fn mul_p_matches_repeated_mul() {
        let (_, group) = toy();
        let a = BigUint::from(17_u32);
        let b = BigUint::from(211_u32);
        let c = BigUint::from(4999_u32);
        let expected = (&a * &b * &c) % group.modulus();
        assert_eq!(BigModArith::mul_p(&group, &[&a, &b, &c]), expected);
    }

    #[test]
    fn add_q_empty_sum_is_zero() {
        let (field, _) = toy();
        assert_eq!(BigModArith::add_q(&field, &[]), BigUint::zero());
    }

    #[test]
    fn is_valid_residue_rejects_non_residues() {
        let (_, group) = toy();
        let g = group.generator();
        assert!(BigModArith::is_valid_residue(&group, g.as_biguint()));
        assert!(!BigModArith::is_valid_residue(&group, &BigUint::from(2_u32)));
    }

    #[test]
    fn is_in_bounds_q_checks_strict_upper_bound() {
        let (field, _) = toy();
        assert!(BigModArith::is_in_bounds_q(&field, &BigUint::from(126_u8)));
        assert!(!BigModArith::is_in_bounds_q(&field, &BigUint::from(127_u8)));
    }

    #[test]
    fn int_to_p_maps_zero_to_modulus() {
        let (_, group) = toy();
        assert_eq!(
            BigModArith::int_to_p(&group, group.modulus()),
            group.modulus().clone()
        );
        assert_eq!(BigModArith::int_to_p(&group, &BigUint::from(5_u32)), BigUint::from(5_u32));
    }
}
