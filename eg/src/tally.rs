#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! The published ciphertext tally and the plaintext tally with its per-guardian
//! decryption shares, checked in stages S6, S7 and S8.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ballot::ElGamalCiphertext;
use util::algebra::{FieldElement, GroupElement};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublishedCiphertextTallyContest {
    pub selections: BTreeMap<String, ElGamalCiphertext>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublishedCiphertextTally {
    pub contests: BTreeMap<String, PublishedCiphertextTallyContest>,
}

/// A Chaum-Pedersen proof `(a_i, b_i, c_i, v_i)` attached to one guardian's partial
/// decryption of a selection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChaumPedersenProof {
    pub pad: GroupElement,
    pub data: GroupElement,
    pub challenge: FieldElement,
    pub response: FieldElement,
}

/// One available guardian `l`'s reconstruction of a missing guardian's partial
/// decryption share `M_{i,l}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecoveredPart {
    pub share: GroupElement,
    pub recovery_key: GroupElement,
    pub proof: ChaumPedersenProof,
}

/// The wire shape of a tally share: exactly one of `proof`/`share` (direct) or
/// `recovered_parts` (recovery) is expected to be present. Both conditions are
/// represented so stage S7 can assert the xor at runtime rather than have the
/// loader silently discard a malformed artifact.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct ShareWire {
    guardian_id: String,
    #[serde(default)]
    share: Option<GroupElement>,
    #[serde(default)]
    proof: Option<ChaumPedersenProof>,
    #[serde(default)]
    recovered_parts: Option<BTreeMap<String, RecoveredPart>>,
}

/// A guardian's partial decryption of a single selection: either a direct share
/// the guardian computed itself, or a reconstruction of a missing guardian's
/// share from a quorum of the remaining guardians, or (if the artifact is
/// malformed) neither/both, which stage S7 reports as an invariant failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "ShareWire", into = "ShareWire")]
pub enum Share {
    Direct {
        guardian_id: String,
        share: GroupElement,
        proof: ChaumPedersenProof,
    },
    Recovered {
        guardian_id: String,
        recovered_parts: BTreeMap<String, RecoveredPart>,
    },
    Malformed {
        guardian_id: String,
        has_proof: bool,
        has_recovered_parts: bool,
    },
}

impl Share {
    pub fn guardian_id(&self) -> &str {
        match self {
            Share::Direct { guardian_id, .. } => guardian_id,
            Share::Recovered { guardian_id, .. } => guardian_id,
            Share::Malformed { guardian_id, .. } => guardian_id,
        }
    }
}

impl From<ShareWire> for Share {
    fn from(wire: ShareWire) -> Self {
        match (wire.share, wire.proof, wire.recovered_parts) {
            (Some(share), Some(proof), None) => Share::Direct {
                guardian_id: wire.guardian_id,
                share,
                proof,
            },
            (None, None, Some(recovered_parts)) => Share::Recovered {
                guardian_id: wire.guardian_id,
                recovered_parts,
            },
            (share, proof, recovered_parts) => Share::Malformed {
                guardian_id: wire.guardian_id,
                has_proof: share.is_some() || proof.is_some(),
                has_recovered_parts: recovered_parts.is_some(),
            },
        }
    }
}

impl From<Share> for ShareWire {
    fn from(share: Share) -> Self {
        match share {
            Share::Direct {
                guardian_id,
                share,
                proof,
            } => ShareWire {
                guardian_id,
                share: Some(share),
                proof: Some(proof),
                recovered_parts: None,
            },
            Share::Recovered {
                guardian_id,
                recovered_parts,
            } => ShareWire {
                guardian_id,
                share: None,
                proof: None,
                recovered_parts: Some(recovered_parts),
            },
            Share::Malformed { guardian_id, .. } => ShareWire {
                guardian_id,
                share: None,
                proof: None,
                recovered_parts: None,
            },
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaintextTallySelection {
    pub message: ElGamalCiphertext,
    pub value: GroupElement,
    pub tally: u64,
    pub shares: Vec<Share>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaintextTallyContest {
    pub selections: BTreeMap<String, PlaintextTallySelection>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaintextTally {
    pub contests: BTreeMap<String, PlaintextTallyContest>,
    pub spoiled_ballots: BTreeMap<String, BTreeMap<String, PlaintextTallyContest>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn share_guardian_id_is_exposed_for_every_variant() {
        let malformed = Share::Malformed {
            guardian_id: "g1".to_string(),
            has_proof: true,
            has_recovered_parts: true,
        };
        assert_eq!(malformed.guardian_id(), "g1");
    }

    #[test]
    fn wire_conversion_detects_both_present_as_malformed() {
        use util::algebra::Group;

        let group = Group::new_unchecked(
            crate::constants::p(),
            crate::constants::q(),
            crate::constants::g(),
        );
        let g = group.generator();

        let proof = ChaumPedersenProof {
            pad: g.clone(),
            data: g.clone(),
            challenge: FieldElement::from(1_u8, &util::algebra::ScalarField::new_unchecked(crate::constants::q())),
            response: FieldElement::from(1_u8, &util::algebra::ScalarField::new_unchecked(crate::constants::q())),
        };

        let wire = ShareWire {
            guardian_id: "g1".to_string(),
            share: Some(g.clone()),
            proof: Some(proof),
            recovered_parts: Some(BTreeMap::new()),
        };

        match Share::from(wire) {
            Share::Malformed {
                has_proof,
                has_recovered_parts,
                ..
            } => {
                assert!(has_proof);
                assert!(has_recovered_parts);
            }
            _ => panic!("expected Malformed variant in test"),
        }
    }
}
