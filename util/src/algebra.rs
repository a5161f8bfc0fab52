#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! This module provides wrappers around `BigUint` to separate group and field elements in the code.

use crate::{
    csprng::Csprng,
    integer_util::{cnt_bits_repr, to_be_bytes_left_pad},
};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// An element of field `Z_q` as defined by [`ScalarField`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FieldElement(
    #[serde(
        serialize_with = "crate::biguint_serde::biguint_serialize_256_bits",
        deserialize_with = "crate::biguint_serde::biguint_deserialize_256_bits"
    )]
    BigUint,
);

/// The finite field `Z_q` of integers modulo prime `q`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScalarField {
    /// Subgroup order.
    #[serde(
        serialize_with = "crate::biguint_serde::biguint_serialize_256_bits",
        deserialize_with = "crate::biguint_serde::biguint_deserialize_256_bits"
    )]
    q: BigUint,
}

impl FieldElement {
    /// The numeric value of the field element. Guaranteed to be `< q`.
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Performs field addition: `(self + other) % q`.
    pub fn add(&self, other: &FieldElement, field: &ScalarField) -> Self {
        FieldElement((&self.0 + &other.0) % &field.q)
    }

    /// Performs field subtraction: `(self - other) % q`.
    pub fn sub(&self, other: &FieldElement, field: &ScalarField) -> Self {
        if self.0 >= other.0 {
            FieldElement((&self.0 - &other.0) % &field.q)
        } else {
            FieldElement((&field.q - (&other.0 - &self.0)) % &field.q)
        }
    }

    /// Performs field multiplication: `(self * other) % q`.
    pub fn mul(&self, other: &FieldElement, field: &ScalarField) -> Self {
        FieldElement((&self.0 * &other.0) % &field.q)
    }

    /// Creates a field element from a given integer, reduced mod `q`.
    pub fn from<T>(x: T, field: &ScalarField) -> Self
    where
        BigUint: From<T>,
    {
        let x = BigUint::from(x);
        FieldElement(x % &field.q)
    }

    /// Creates a field element from a bytes vector.
    ///
    /// Bytes interpreted as a big-endian encoded integer that is then reduced modulo order `q`.
    pub fn from_bytes_be(x: &[u8], field: &ScalarField) -> Self {
        let x_int = BigUint::from_bytes_be(x);
        FieldElement(x_int % &field.q)
    }

    /// Returns the big-endian encoding of the field element left-padded to 32 bytes.
    pub fn to_32_be_bytes(&self) -> Vec<u8> {
        to_be_bytes_left_pad(&self.0, 32)
    }

    /// Returns the left padded big-endian encoding of the field element.
    pub fn to_be_bytes_left_pad(&self, field: &ScalarField) -> Vec<u8> {
        to_be_bytes_left_pad(&self.0, field.q_len_bytes())
    }

    /// Checks if the element is a valid member of the given field, i.e. `0 <= self < q`.
    pub fn is_valid(&self, field: &ScalarField) -> bool {
        self.0 < field.q
    }
}

impl ScalarField {
    /// Constructs a new scalar field from a given (trusted) order.
    pub fn new_unchecked(order: BigUint) -> Self {
        ScalarField { q: order }
    }

    /// Returns one, the neutral element of multiplication, as a field element.
    pub fn one() -> FieldElement {
        FieldElement(BigUint::one())
    }

    /// Returns zero, the neutral element of addition, as a field element.
    pub fn zero() -> FieldElement {
        FieldElement(BigUint::zero())
    }

    /// Returns a uniform random integer in `[0,q)`.
    pub fn random_field_elem(&self, csprng: &mut Csprng) -> FieldElement {
        FieldElement(csprng.next_biguint_lt(&self.q))
    }

    /// Returns the order `q` of the field.
    pub fn order(&self) -> &BigUint {
        &self.q
    }

    /// Returns the length of the byte-array representation of field order `q`.
    pub fn q_len_bytes(&self) -> usize {
        cnt_bits_repr(&self.q).div_ceil(8)
    }
}

/// An element of the multiplicative group `Z_p^r` as defined by [`Group`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupElement(
    #[serde(
        serialize_with = "crate::biguint_serde::biguint_serialize_4096_bits",
        deserialize_with = "crate::biguint_serde::biguint_deserialize_4096_bits"
    )]
    BigUint,
);

/// The group `Z_p^r`, a multiplicative subgroup of `Z_p` of order `q`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    /// Prime modulus `p`.
    #[serde(
        serialize_with = "crate::biguint_serde::biguint_serialize_4096_bits",
        deserialize_with = "crate::biguint_serde::biguint_deserialize_4096_bits"
    )]
    p: BigUint,

    /// Subgroup generator `g`.
    #[serde(
        serialize_with = "crate::biguint_serde::biguint_serialize_4096_bits",
        deserialize_with = "crate::biguint_serde::biguint_deserialize_4096_bits"
    )]
    g: BigUint,

    /// Group order `q`.
    #[serde(
        serialize_with = "crate::biguint_serde::biguint_serialize_256_bits",
        deserialize_with = "crate::biguint_serde::biguint_deserialize_256_bits"
    )]
    q: BigUint,
}

impl GroupElement {
    /// Constructs a group element without checking membership. Used when deserializing
    /// a value that will subsequently be checked with [`GroupElement::is_valid`].
    pub fn from_biguint_unchecked(u: BigUint) -> Self {
        GroupElement(u)
    }

    /// Multiplies the group element with another group element: `(self * other) mod p`.
    pub fn mul(&self, other: &GroupElement, group: &Group) -> GroupElement {
        GroupElement((&self.0 * &other.0) % &group.p)
    }

    /// Performs modular exponentiation of the group element with a given integer exponent.
    ///
    /// Accepts any non-negative exponent; callers that intend a subgroup exponent should
    /// reduce it mod `q` first (see [`crate::bigmodarith::BigModArith::pow_p`]).
    pub fn pow(&self, exponent: &BigUint, group: &Group) -> GroupElement {
        GroupElement(self.0.modpow(exponent, &group.p))
    }

    /// Performs modular exponentiation of the group element with a given field element.
    pub fn exp(&self, exponent: &FieldElement, group: &Group) -> GroupElement {
        GroupElement(self.0.modpow(&exponent.0, &group.p))
    }

    /// Checks if the element is a valid member of the given group, i.e. `0 <= self < p`
    /// and `self^q mod p == 1` (a `q`-th residue).
    pub fn is_valid(&self, group: &Group) -> bool {
        let elem_less_than_p = self.0 < group.p;
        let elem_has_order_q = self.0.modpow(&group.q, &group.p).is_one();
        elem_less_than_p && elem_has_order_q
    }

    /// Returns the left padded big-endian encoding of the group element.
    pub fn to_be_bytes_left_pad(&self, group: &Group) -> Vec<u8> {
        to_be_bytes_left_pad(&self.0, group.p_len_bytes())
    }

    /// Returns a reference to group element as `BigUint`.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl Group {
    /// Constructs a new multiplicative integer group `Z_p^r` without checking validity.
    /// Used for the compile-time-fixed ElectionGuard standard parameters, which are
    /// trusted/tested rather than re-derived at runtime.
    pub fn new_unchecked(modulus: BigUint, order: BigUint, generator: BigUint) -> Self {
        Group {
            p: modulus,
            g: generator,
            q: order,
        }
    }

    /// Returns a uniform random group element: `g^x mod p` for a random `x` in `[0,q)`.
    pub fn random_group_elem(&self, csprng: &mut Csprng) -> GroupElement {
        let field_elem = FieldElement(csprng.next_biguint_lt(&self.q));
        self.g_exp(&field_elem)
    }

    /// Returns generator `g` raised to the power of `x` mod modulus `p`.
    pub fn g_exp(&self, x: &FieldElement) -> GroupElement {
        GroupElement(self.g.modpow(&x.0, &self.p))
    }

    /// Returns one, the neutral element, as a group element.
    pub fn one() -> GroupElement {
        GroupElement(BigUint::one())
    }

    /// Returns a reference to the order of the group.
    pub fn order(&self) -> &BigUint {
        &self.q
    }

    /// Returns a reference to the modulus of the group.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Returns a generator of the group.
    pub fn generator(&self) -> GroupElement {
        GroupElement(self.g.clone())
    }

    /// Returns the length of the byte array representation of modulus `p`.
    pub fn p_len_bytes(&self) -> usize {
        cnt_bits_repr(&self.p).div_ceil(8)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use crate::algebra::{FieldElement, Group, GroupElement, ScalarField};
    use crate::csprng::Csprng;
    use num_bigint::BigUint;

    fn get_toy_algebras() -> (ScalarField, Group) {
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
    fn test_field_operations() {
        let (field, _) = get_toy_algebras();

        let a = FieldElement::from(115_u8, &field);
        let b = FieldElement::from(37_u8, &field);

        assert_eq!(a, FieldElement::from(242_u8, &field));
        assert_eq!(a.add(&b, &field), FieldElement::from(25_u8, &field));
        assert_eq!(a.sub(&b, &field), FieldElement::from(78_u8, &field));
        assert_eq!(b.sub(&a, &field), FieldElement::from(49_u8, &field));
        assert_eq!(b.sub(&b, &field), ScalarField::zero());
        assert_eq!(a.mul(&b, &field), FieldElement::from(64_u8, &field));
    }

    #[test]
    fn test_group_operations() {
        let mut csprng = Csprng::new(0xC0FFEE);
        let (field, group) = get_toy_algebras();

        let a = FieldElement::from(115_u8, &field);
        let g1 = group.g_exp(&a);

        // g2 = group.g^{14} computed independently.
        let g2 = GroupElement::from_biguint_unchecked(BigUint::from(38489_u32));
        // g3 = g1*g2 computed independently.
        let g3 = GroupElement::from_biguint_unchecked(BigUint::from(48214_u32));
        // h is not a group element.
        let h = GroupElement::from_biguint_unchecked(BigUint::from(12345_u32));

        assert!(g1.is_valid(&group));
        assert!(g2.is_valid(&group));
        assert_eq!(g1.mul(&g2, &group), g3);

        let g = group.generator();
        assert_eq!(g.pow(&BigUint::from(14_u32), &group), g2);

        for _ in 0..50 {
            let u = group.random_group_elem(&mut csprng);
            assert!(u.is_valid(&group));
        }

        assert!(!h.is_valid(&group));
    }
}
