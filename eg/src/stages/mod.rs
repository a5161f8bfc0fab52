#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! The eight verification stages, run in order by [`crate::engine::Orchestrator`].
//! Each stage is a free `run(&Artifact) -> InvariantSet` function; the
//! orchestrator owns sequencing, short-circuiting and cancellation.

pub mod s1_election_parameters;
pub mod s2_guardian_public_keys;
pub mod s3_ballot_selections;
pub mod s4_contest_vote_limits;
pub mod s5_ballot_chaining;
pub mod s6_tally_aggregation;
pub mod s7_missing_guardian_recovery;
pub mod s8_decryption;
pub(crate) mod share_verification;
