#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Stage S5 — ballot chaining: each device's sequence of tracking hashes
//! linking successive ballots.
//!
//! The producer's artifact publishes no ballot ordering, no defined chain head
//! `H_0 = H(Q̄)`, and no device binding inside the tracking hash, so this stage
//! asserts no conditions of its own; it exists to emit the warning that ballot
//! chaining is unverifiable against this producer, not to silently skip it.

use crate::artifact::Artifact;
use crate::invariant::{warn, InvariantSet};

pub fn run(artifact: &Artifact) -> InvariantSet {
    let set = InvariantSet::new("S5 ballot chaining");

    let ballots = artifact
        .ciphertext_ballots
        .iter()
        .chain(artifact.spoiled_ballots.iter());

    for ballot in ballots {
        warn(format_args!(
            "ballot {} on device {}: tracking hash chain is unverifiable (no published ordering, chain head, or device binding)",
            ballot.object_id, ballot.device
        ));
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ballot::{BallotState, CiphertextBallot};
    use util::algebra::{FieldElement, ScalarField};

    #[test]
    fn well_formed_hashes_pass_with_warning_only() {
        let field = ScalarField::new_unchecked(crate::constants::q());
        let ballot = CiphertextBallot {
            object_id: "ballot-1".to_string(),
            state: BallotState::Cast,
            previous_tracking_hash: FieldElement::from(1_u8, &field),
            tracking_hash: FieldElement::from(2_u8, &field),
            device: "device-1".to_string(),
            contests: vec![],
        };

        let artifact = Artifact {
            description: crate::description::Description { contests: vec![] },
            context: crate::context::Context {
                number_of_guardians: 1,
                quorum: 1,
                elgamal_public_key: crate::constants::STANDARD_GROUP.generator(),
                crypto_base_hash: FieldElement::from(0_u8, &field),
                crypto_extended_base_hash: FieldElement::from(0_u8, &field),
            },
            constants: crate::context::Constants {
                large_prime: crate::constants::p(),
                small_prime: crate::constants::q(),
                cofactor: crate::constants::r(),
                generator: crate::constants::g(),
            },
            devices: vec![],
            ciphertext_ballots: vec![ballot],
            spoiled_ballots: vec![],
            ciphertext_tally: crate::tally::PublishedCiphertextTally {
                contests: std::collections::BTreeMap::new(),
            },
            plaintext_tally: crate::tally::PlaintextTally {
                contests: std::collections::BTreeMap::new(),
                spoiled_ballots: std::collections::BTreeMap::new(),
            },
            coefficient_validation_sets: vec![],
        };

        assert!(run(&artifact).validate());
    }
}
