#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Stage S4 — vote limits: every ballot's contests resolve to a known contest
//! in the election description, and each contest's placeholder selections pad
//! its vote count to exactly `votes_allowed`.
//!
//! The contest's aggregate Chaum-Pedersen proof cannot be fully checked here:
//! the published artifact does not always carry the aggregate ciphertext
//! `(A, B)` or the proof commitment `(a, b)` alongside the response, so this
//! stage checks what it can (the response is in bounds) and warns about the
//! rest rather than failing the contest.

use crate::artifact::Artifact;
use crate::ballot::BallotState;
use crate::indices::Indices;
use crate::invariant::{warn, InvariantSet};
use util::algebra::ScalarField;

pub fn run(artifact: &Artifact) -> InvariantSet {
    let mut set = InvariantSet::new("S4 vote limits");

    let field = ScalarField::new_unchecked(crate::constants::q());
    let indices = Indices::new(&artifact.description, &artifact.coefficient_validation_sets);

    let ballots = artifact
        .ciphertext_ballots
        .iter()
        .filter(|ballot| ballot.state == BallotState::Cast);

    for ballot in ballots {
        for contest in &ballot.contests {
            let Some(description) = indices.contest(&contest.object_id) else {
                set.ensure("all contests appear in election description", false);
                continue;
            };

            let placeholder_count = contest
                .ballot_selections
                .iter()
                .filter(|s| s.is_placeholder_selection)
                .count() as u32;
            set.ensure(
                "placeholder selection count equals votes_allowed",
                placeholder_count == description.votes_allowed,
            );

            set.ensure(
                "contest proof response is in bounds",
                contest.proof.response.is_valid(&field),
            );

            if contest.proof.pad.is_none() || contest.proof.data.is_none() {
                warn(format_args!(
                    "contest {}: published aggregate ciphertext (A, B) is absent; the full contest-aggregate proof is unverifiable",
                    contest.object_id
                ));
            } else if contest.proof.commitment_pad.is_none() || contest.proof.commitment_data.is_none() {
                warn(format_args!(
                    "contest {}: published proof commitment (a, b) is absent; the full contest-aggregate proof is unverifiable",
                    contest.object_id
                ));
            } else {
                warn(format_args!(
                    "contest {}: full contest-aggregate Chaum-Pedersen proof recomputation is not implemented",
                    contest.object_id
                ));
            }
        }
    }

    set
}
