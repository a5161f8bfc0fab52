#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! `Constants` and `Context`: the artifact's declared cryptographic parameters
//! and per-election values, checked against the verifier's own compiled-in
//! constants in stage S1.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use util::algebra::{FieldElement, GroupElement};
use util::biguint_serde::{
    biguint_deserialize_256_bits, biguint_deserialize_4096_bits, biguint_serialize_256_bits,
    biguint_serialize_4096_bits,
};

/// The artifact's declared `(p, q, r, g)`, as published in `constants.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Constants {
    #[serde(
        serialize_with = "biguint_serialize_4096_bits",
        deserialize_with = "biguint_deserialize_4096_bits"
    )]
    pub large_prime: BigUint,

    #[serde(
        serialize_with = "biguint_serialize_256_bits",
        deserialize_with = "biguint_deserialize_256_bits"
    )]
    pub small_prime: BigUint,

    #[serde(
        serialize_with = "biguint_serialize_4096_bits",
        deserialize_with = "biguint_deserialize_4096_bits"
    )]
    pub cofactor: BigUint,

    #[serde(
        serialize_with = "biguint_serialize_4096_bits",
        deserialize_with = "biguint_deserialize_4096_bits"
    )]
    pub generator: BigUint,
}

/// Per-election context: guardian thresholds, the joint public key, and the two
/// domain-separating hashes used throughout every proof challenge.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Context {
    pub number_of_guardians: u32,
    pub quorum: u32,

    /// Joint ElGamal public key `K = ∏ K_i mod p`.
    pub elgamal_public_key: GroupElement,

    /// `Q`, the base hash binding the fixed parameters and the election manifest.
    pub crypto_base_hash: FieldElement,

    /// `Q̄`, the extended base hash used inside every selection/contest proof.
    pub crypto_extended_base_hash: FieldElement,
}
