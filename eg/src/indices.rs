#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Auxiliary lookup maps built once from borrowed references and read-only for
//! the remainder of a verification run.

use std::collections::BTreeMap;

use crate::coefficient::CoefficientValidationSet;
use crate::description::{Contest, Description};

/// `contests_by_id` and `guardians_by_owner_id`, built once at the start of a
/// verification run.
pub struct Indices<'a> {
    contests_by_id: BTreeMap<&'a str, &'a Contest>,
    guardians_by_owner_id: BTreeMap<&'a str, &'a CoefficientValidationSet>,
}

impl<'a> Indices<'a> {
    pub fn new(
        description: &'a Description,
        coefficient_validation_sets: &'a [CoefficientValidationSet],
    ) -> Self {
        let contests_by_id = description
            .contests
            .iter()
            .map(|c| (c.object_id.as_str(), c))
            .collect();

        let guardians_by_owner_id = coefficient_validation_sets
            .iter()
            .map(|g| (g.owner_id.as_str(), g))
            .collect();

        Indices {
            contests_by_id,
            guardians_by_owner_id,
        }
    }

    pub fn contest(&self, object_id: &str) -> Option<&'a Contest> {
        self.contests_by_id.get(object_id).copied()
    }

    pub fn guardian(&self, owner_id: &str) -> Option<&'a CoefficientValidationSet> {
        self.guardians_by_owner_id.get(owner_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::Selection;

    #[test]
    fn looks_up_known_and_unknown_contests() {
        let description = Description {
            contests: vec![Contest {
                object_id: "c1".to_string(),
                sequence_order: 0,
                votes_allowed: 1,
                ballot_selections: vec![Selection {
                    object_id: "s1".to_string(),
                    sequence_order: 0,
                }],
            }],
        };
        let guardians = vec![];
        let indices = Indices::new(&description, &guardians);

        assert!(indices.contest("c1").is_some());
        assert!(indices.contest("missing").is_none());
    }
}
