#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Stage S6 — tally aggregation: the published ciphertext tally is the
//! homomorphic product of every cast ballot's selection ciphertexts, and each
//! guardian's directly-computed partial decryption share is a valid
//! Chaum-Pedersen proof against that aggregate.

use num_bigint::BigUint;

use crate::artifact::Artifact;
use crate::ballot::{get_selection, BallotState};
use crate::invariant::InvariantSet;
use crate::stages::share_verification::verify_direct_shares;
use util::algebra::{GroupElement, ScalarField};
use util::bigmodarith::BigModArith;

pub fn run(artifact: &Artifact) -> InvariantSet {
    let mut set = InvariantSet::new("S6 tally aggregation");

    let group = &*crate::constants::STANDARD_GROUP;
    let field = ScalarField::new_unchecked(crate::constants::q());
    let base_hash = &artifact.context.crypto_extended_base_hash;

    for contest in &artifact.description.contests {
        let Some(plaintext_contest) = artifact.plaintext_tally.contests.get(&contest.object_id) else {
            set.ensure("plaintext tally has an entry for every contest", false);
            continue;
        };

        for selection in &contest.ballot_selections {
            let Some(plaintext_selection) = plaintext_contest.selections.get(&selection.object_id) else {
                set.ensure("plaintext tally has an entry for every selection", false);
                continue;
            };

            let mut pads: Vec<BigUint> = Vec::new();
            let mut datas: Vec<BigUint> = Vec::new();
            for ballot in &artifact.ciphertext_ballots {
                if ballot.state != BallotState::Cast {
                    continue;
                }
                if let Some(cast_selection) =
                    get_selection(ballot, &contest.object_id, &selection.object_id)
                {
                    pads.push(cast_selection.ciphertext.pad.as_biguint().clone());
                    datas.push(cast_selection.ciphertext.data.as_biguint().clone());
                }
            }
            let pad_refs: Vec<&BigUint> = pads.iter().collect();
            let data_refs: Vec<&BigUint> = datas.iter().collect();

            let expected_pad = GroupElement::from_biguint_unchecked(BigModArith::mul_p(group, &pad_refs));
            let expected_data = GroupElement::from_biguint_unchecked(BigModArith::mul_p(group, &data_refs));

            set.ensure("A = ∏ⱼαⱼ", plaintext_selection.message.pad == expected_pad);
            set.ensure("B = ∏ⱼβⱼ", plaintext_selection.message.data == expected_data);
        }
    }

    for contest in artifact.plaintext_tally.contests.values() {
        for selection in contest.selections.values() {
            verify_direct_shares(&mut set, group, &field, base_hash, &artifact.coefficient_validation_sets, selection);
        }
    }

    set
}
