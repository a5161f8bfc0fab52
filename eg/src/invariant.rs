#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! `InvariantSet` accumulates the named boolean conditions checked by a single
//! verification stage and produces the stage's pass/fail verdict.

use std::collections::BTreeMap;

/// A named collection of labelled boolean conditions, one per stage.
///
/// Duplicate labels are logically ANDed together rather than appended: the same
/// mathematical invariant may be re-asserted once per loop iteration (once per
/// ballot, once per selection, ...), and a single failing iteration must fail the
/// label for the whole stage.
#[derive(Debug, Default)]
pub struct InvariantSet {
    title: String,
    conditions: BTreeMap<String, bool>,
    order: Vec<String>,
}

impl InvariantSet {
    pub fn new(title: impl Into<String>) -> Self {
        InvariantSet {
            title: title.into(),
            conditions: BTreeMap::new(),
            order: Vec::new(),
        }
    }

    /// Records `condition` under `label`, ANDing with any prior value recorded
    /// under the same label. Returns `condition` unchanged, so callers can gate
    /// further work on the same check without a second branch.
    pub fn ensure(&mut self, label: impl Into<String>, condition: bool) -> bool {
        let label = label.into();
        if let Some(existing) = self.conditions.get_mut(&label) {
            *existing = *existing && condition;
        } else {
            self.conditions.insert(label.clone(), condition);
            self.order.push(label);
        }
        condition
    }

    /// Returns the conjunction of every recorded condition, logging `[VALID]` or
    /// `[INVALID]` (with the failed labels) at the appropriate level.
    pub fn validate(&self) -> bool {
        let failed: Vec<&str> = self
            .order
            .iter()
            .filter(|label| !self.conditions.get(label.as_str()).copied().unwrap_or(false))
            .map(String::as_str)
            .collect();

        let valid = failed.is_empty();

        if valid {
            tracing::info!(title = %self.title, "[VALID]");
        } else {
            tracing::error!(title = %self.title, failed_labels = ?failed, "[INVALID]");
        }

        valid
    }

    /// Returns the labels currently failing, in first-seen order.
    pub fn failed_labels(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|label| !self.conditions.get(label.as_str()).copied().unwrap_or(false))
            .cloned()
            .collect()
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Emits a structured warning for a condition the verifier cannot check, matching
/// a documented producer deviation or a missing piece of published data. Warnings
/// never affect a stage's verdict.
pub fn warn(msg: impl std::fmt::Display) {
    tracing::warn!("[WARNING]: {msg}");
}
