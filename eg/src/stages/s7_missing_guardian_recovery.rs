#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Stage S7 — missing-guardian recovery: partial decryption shares
//! reconstructed by a quorum of available guardians on behalf of a guardian who
//! did not participate in tallying.
//!
//! The published artifact does not include the Lagrange coefficients used to
//! weight each recovering guardian's contribution, so this stage cannot verify
//! that a `recovery_key` was derived correctly from the missing guardian's
//! coefficient commitments; it can only check the Chaum-Pedersen proof attached
//! to each recovered part against the `recovery_key` as published. A share that
//! is neither a well-formed direct share nor a well-formed recovery (see
//! [`crate::tally::Share::Malformed`]) is reported here as a named failure.

use crate::artifact::Artifact;
use crate::invariant::InvariantSet;
use crate::stages::share_verification::verify_recovered_and_malformed_shares;
use util::algebra::ScalarField;

pub fn run(artifact: &Artifact) -> InvariantSet {
    let mut set = InvariantSet::new("S7 missing-guardian recovery");

    let group = &*crate::constants::STANDARD_GROUP;
    let field = ScalarField::new_unchecked(crate::constants::q());
    let base_hash = &artifact.context.crypto_extended_base_hash;

    for contest in artifact.plaintext_tally.contests.values() {
        for selection in contest.selections.values() {
            verify_recovered_and_malformed_shares(&mut set, group, &field, base_hash, selection);
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ballot::ElGamalCiphertext;
    use crate::tally::{ChaumPedersenProof, PlaintextTallyContest, PlaintextTallySelection};
    use std::collections::BTreeMap;

    fn field() -> ScalarField {
        ScalarField::new_unchecked(crate::constants::q())
    }

    fn artifact_with_selection(selections: BTreeMap<String, PlaintextTallySelection>) -> Artifact {
        let field = field();
        let group = &*crate::constants::STANDARD_GROUP;
        let mut contests = BTreeMap::new();
        contests.insert("contest-1".to_string(), PlaintextTallyContest { selections });

        Artifact {
            description: crate::description::Description { contests: vec![] },
            context: crate::context::Context {
                number_of_guardians: 1,
                quorum: 1,
                elgamal_public_key: group.generator(),
                crypto_base_hash: util::algebra::FieldElement::from(0_u8, &field),
                crypto_extended_base_hash: util::algebra::FieldElement::from(0_u8, &field),
            },
            constants: crate::context::Constants {
                large_prime: crate::constants::p(),
                small_prime: crate::constants::q(),
                cofactor: crate::constants::r(),
                generator: crate::constants::g(),
            },
            devices: vec![],
            ciphertext_ballots: vec![],
            spoiled_ballots: vec![],
            ciphertext_tally: crate::tally::PublishedCiphertextTally {
                contests: BTreeMap::new(),
            },
            plaintext_tally: crate::tally::PlaintextTally {
                contests,
                spoiled_ballots: BTreeMap::new(),
            },
            coefficient_validation_sets: vec![],
        }
    }

    #[test]
    fn malformed_share_fails_stage() {
        let group = &*crate::constants::STANDARD_GROUP;
        let field = field();
        let g = group.generator();

        let malformed = Share::Malformed {
            guardian_id: "g1".to_string(),
            has_proof: true,
            has_recovered_parts: true,
        };

        let selection = PlaintextTallySelection {
            message: ElGamalCiphertext { pad: g.clone(), data: g.clone() },
            value: g.clone(),
            tally: 0,
            shares: vec![malformed],
        };
        let mut selections = BTreeMap::new();
        selections.insert("selection-1".to_string(), selection);

        let artifact = artifact_with_selection(selections);
        let set = run(&artifact);
        assert!(!set.validate());
        assert!(set
            .failed_labels()
            .contains(&"tally share contains exactly one proof or recovered part".to_string()));

        let _ = ChaumPedersenProof {
            pad: g.clone(),
            data: g.clone(),
            challenge: util::algebra::FieldElement::from(0_u8, &field),
            response: util::algebra::FieldElement::from(0_u8, &field),
        };
    }
}
