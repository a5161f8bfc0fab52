#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Cast and spoiled ballots: ElGamal selection ciphertexts with their disjunctive
//! Chaum-Pedersen proofs, and each contest's vote-limit proof, checked in stages
//! S3 and S4.

use serde::{Deserialize, Serialize};

use util::algebra::{FieldElement, GroupElement};

/// The state a ballot was recorded in by the tallying system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BallotState {
    Cast,
    Spoiled,
}

/// An ElGamal ciphertext `(pad, data) = (α, β)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElGamalCiphertext {
    pub pad: GroupElement,
    pub data: GroupElement,
}

/// A disjunctive Chaum-Pedersen proof that a selection's ciphertext encrypts 0 or 1.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisjunctiveProof {
    pub proof_zero_pad: GroupElement,
    pub proof_zero_data: GroupElement,
    pub proof_one_pad: GroupElement,
    pub proof_one_data: GroupElement,
    pub proof_zero_challenge: FieldElement,
    pub proof_one_challenge: FieldElement,
    pub proof_zero_response: FieldElement,
    pub proof_one_response: FieldElement,
    pub challenge: FieldElement,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BallotSelection {
    pub object_id: String,
    pub ciphertext: ElGamalCiphertext,
    pub proof: DisjunctiveProof,
    pub is_placeholder_selection: bool,
}

/// A contest's vote-limit Chaum-Pedersen proof. `(A, B)` and `(a, b)` are only
/// present in the published artifact for some contest shapes; see stage S4.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContestProof {
    pub response: FieldElement,
    pub pad: Option<GroupElement>,
    pub data: Option<GroupElement>,
    pub commitment_pad: Option<GroupElement>,
    pub commitment_data: Option<GroupElement>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BallotContest {
    pub object_id: String,
    pub ballot_selections: Vec<BallotSelection>,
    pub proof: ContestProof,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CiphertextBallot {
    pub object_id: String,
    pub state: BallotState,
    pub previous_tracking_hash: FieldElement,
    pub tracking_hash: FieldElement,
    pub device: String,
    pub contests: Vec<BallotContest>,
}

/// Looks up a contest by id in a ballot, matching the producer's own semantics:
/// returns `None` both when the contest is absent and when it appears more than
/// once (a malformed ballot cannot be attributed to one of its copies).
pub fn get_contest<'b>(ballot: &'b CiphertextBallot, contest_id: &str) -> Option<&'b BallotContest> {
    let mut matches = ballot.contests.iter().filter(|c| c.object_id == contest_id);
    let first = matches.next()?;
    if matches.next().is_some() {
        crate::invariant::warn(format_args!(
            "ballot {} has contest id {contest_id} more than once",
            ballot.object_id
        ));
        return None;
    }
    Some(first)
}

/// Looks up a selection by id within a named contest of a ballot, with the same
/// at-most-once semantics as [`get_contest`].
pub fn get_selection<'b>(
    ballot: &'b CiphertextBallot,
    contest_id: &str,
    selection_id: &str,
) -> Option<&'b BallotSelection> {
    let contest = get_contest(ballot, contest_id)?;
    let mut matches = contest
        .ballot_selections
        .iter()
        .filter(|s| s.object_id == selection_id);
    let first = matches.next()?;
    if matches.next().is_some() {
        crate::invariant::warn(format_args!(
            "ballot {} contest {contest_id} has selection id {selection_id} more than once",
            ballot.object_id
        ));
        return None;
    }
    Some(first)
}
