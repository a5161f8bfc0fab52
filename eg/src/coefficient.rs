#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Per-guardian coefficient commitments and their Schnorr-style proofs of
//! knowledge, checked in stage S2.

use serde::{Deserialize, Serialize};

use util::algebra::{FieldElement, GroupElement};

/// One `(K_{i,j}, h_{i,j}, c_{i,j}, u_{i,j})` Schnorr proof of knowledge of the
/// discrete log of a coefficient commitment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SchnorrProof {
    pub public_key: GroupElement,
    pub commitment: GroupElement,
    pub challenge: FieldElement,
    pub response: FieldElement,
}

/// A guardian's full set of coefficient commitments and proofs:
/// `K_{i,0}..K_{i,k-1}` with `K_{i,0}` the guardian's public key `K_i`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoefficientValidationSet {
    pub owner_id: String,
    pub coefficient_commitments: Vec<GroupElement>,
    pub coefficient_proofs: Vec<SchnorrProof>,
}

impl CoefficientValidationSet {
    /// The guardian's public key `K_i = K_{i,0}`, if the commitment list is non-empty.
    pub fn public_key(&self) -> Option<&GroupElement> {
        self.coefficient_commitments.first()
    }
}
