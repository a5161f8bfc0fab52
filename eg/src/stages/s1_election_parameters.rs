#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Stage S1 — election parameters: the artifact's declared `(p, q, r, g)` and
//! guardian thresholds, and the base hash binding them to the election manifest.

use crate::artifact::Artifact;
use crate::hash::hash_elems;
use crate::hash_args;
use crate::invariant::InvariantSet;
use util::algebra::ScalarField;

pub fn run(artifact: &Artifact) -> InvariantSet {
    let mut set = InvariantSet::new("S1 election parameters");

    let constants = &artifact.constants;
    set.ensure("p is correct", constants.large_prime == crate::constants::p());
    set.ensure("q is correct", constants.small_prime == crate::constants::q());
    set.ensure("r is correct", constants.cofactor == crate::constants::r());
    set.ensure("g is correct", constants.generator == crate::constants::g());

    let context = &artifact.context;
    set.ensure("k >= 1", context.quorum >= 1);
    set.ensure("n >= k", context.number_of_guardians >= context.quorum);

    let field = ScalarField::new_unchecked(crate::constants::q());
    let description_hash = artifact.description.crypto_hash(&field);
    let expected_base_hash = hash_elems(
        &field,
        &hash_args![
            constants.large_prime.clone(),
            constants.small_prime.clone(),
            constants.generator.clone(),
            context.number_of_guardians,
            context.quorum,
            description_hash
        ],
    );
    set.ensure(
        "Q = hash_elems(P, Q, G, n, k, description.crypto_hash())",
        context.crypto_base_hash == expected_base_hash,
    );

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Constants, Context};
    use crate::description::Description;
    use std::collections::BTreeMap;
    use util::algebra::Group;

    fn base_artifact() -> Artifact {
        let field = ScalarField::new_unchecked(crate::constants::q());
        let description = Description { contests: vec![] };
        let description_hash = description.crypto_hash(&field);
        let crypto_base_hash = hash_elems(
            &field,
            &hash_args![
                crate::constants::p(),
                crate::constants::q(),
                crate::constants::g(),
                1_u32,
                1_u32,
                description_hash
            ],
        );

        let group = Group::new_unchecked(crate::constants::p(), crate::constants::q(), crate::constants::g());

        Artifact {
            description,
            context: Context {
                number_of_guardians: 1,
                quorum: 1,
                elgamal_public_key: group.generator(),
                crypto_base_hash: crypto_base_hash.clone(),
                crypto_extended_base_hash: crypto_base_hash,
            },
            constants: Constants {
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
                contests: BTreeMap::new(),
                spoiled_ballots: BTreeMap::new(),
            },
            coefficient_validation_sets: vec![],
        }
    }

    #[test]
    fn valid_parameters_pass() {
        let artifact = base_artifact();
        assert!(run(&artifact).validate());
    }

    #[test]
    fn tampered_p_fails_with_expected_label() {
        let mut artifact = base_artifact();
        artifact.constants.large_prime += 2_u8;
        let set = run(&artifact);
        assert!(!set.validate());
        assert!(set.failed_labels().contains(&"p is correct".to_string()));
    }

    #[test]
    fn quorum_above_guardian_count_fails() {
        let mut artifact = base_artifact();
        artifact.context.quorum = 2;
        let set = run(&artifact);
        assert!(!set.validate());
        assert!(set.failed_labels().contains(&"n >= k".to_string()));
    }
}
