#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! The orchestrator: runs the eight verification stages in order, stopping at
//! the first failing stage, and cooperatively checks a cancellation flag
//! between stages so a long-running verification can be interrupted cleanly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::artifact::Artifact;
use crate::stages::{
    s1_election_parameters, s2_guardian_public_keys, s3_ballot_selections,
    s4_contest_vote_limits, s5_ballot_chaining, s6_tally_aggregation,
    s7_missing_guardian_recovery, s8_decryption,
};

/// The outcome of running one stage.
#[derive(Clone, Debug)]
pub struct StageReport {
    pub title: String,
    pub valid: bool,
    pub failed_labels: Vec<String>,
}

/// The outcome of a full verification run: the per-stage reports, in the order
/// they were run, and whether every stage completed and passed.
#[derive(Clone, Debug)]
pub struct Verdict {
    pub valid: bool,
    pub cancelled: bool,
    pub stages: Vec<StageReport>,
}

type StageFn = fn(&Artifact) -> crate::invariant::InvariantSet;

const STAGES: [StageFn; 8] = [
    s1_election_parameters::run,
    s2_guardian_public_keys::run,
    s3_ballot_selections::run,
    s4_contest_vote_limits::run,
    s5_ballot_chaining::run,
    s6_tally_aggregation::run,
    s7_missing_guardian_recovery::run,
    s8_decryption::run,
];

/// Runs the verification stages against one artifact. Stateless beyond its
/// cancellation flag; a fresh `Orchestrator` can be built per run or reused.
#[derive(Clone, Default)]
pub struct Orchestrator {
    cancelled: Arc<AtomicBool>,
}

impl Orchestrator {
    pub fn new() -> Self {
        Orchestrator {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns a handle that, when set, stops the run before its next stage.
    pub fn cancellation_flag(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }

    pub fn run(&self, artifact: &Artifact) -> Verdict {
        let mut stages = Vec::with_capacity(STAGES.len());
        let mut cancelled = false;

        for stage_fn in STAGES {
            if self.cancelled.load(Ordering::SeqCst) {
                tracing::warn!("verification run cancelled before completing all stages");
                cancelled = true;
                break;
            }

            let set = stage_fn(artifact);
            let valid = set.validate();
            let report = StageReport {
                title: set.title().to_string(),
                valid,
                failed_labels: set.failed_labels(),
            };
            let stage_passed = report.valid;
            stages.push(report);

            if !stage_passed {
                break;
            }
        }

        let valid = !cancelled && stages.len() == STAGES.len() && stages.iter().all(|s| s.valid);

        Verdict {
            valid,
            cancelled,
            stages,
        }
    }
}
