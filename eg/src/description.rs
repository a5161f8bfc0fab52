#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! The election manifest: contests and selections, and the `crypto_hash` each
//! exposes for inclusion in the election's `crypto_base_hash` (stage S1).

use serde::{Deserialize, Serialize};

use crate::hash::hash_elems;
use crate::hash_args;
use util::algebra::{FieldElement, ScalarField};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Selection {
    pub object_id: String,
    pub sequence_order: u32,
}

impl Selection {
    pub fn crypto_hash(&self, field: &ScalarField) -> FieldElement {
        hash_elems(
            field,
            &hash_args![self.object_id.clone(), self.sequence_order],
        )
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Contest {
    pub object_id: String,
    pub sequence_order: u32,
    pub votes_allowed: u32,
    pub ballot_selections: Vec<Selection>,
}

impl Contest {
    pub fn crypto_hash(&self, field: &ScalarField) -> FieldElement {
        let selection_hashes: Vec<FieldElement> = self
            .ballot_selections
            .iter()
            .map(|s| s.crypto_hash(field))
            .collect();
        hash_elems(
            field,
            &hash_args![
                self.object_id.clone(),
                self.sequence_order,
                self.votes_allowed,
                selection_hashes
            ],
        )
    }
}

/// The election manifest: a set of contests, each with a stable `object_id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Description {
    pub contests: Vec<Contest>,
}

impl Description {
    pub fn crypto_hash(&self, field: &ScalarField) -> FieldElement {
        let contest_hashes: Vec<FieldElement> =
            self.contests.iter().map(|c| c.crypto_hash(field)).collect();
        hash_elems(field, &hash_args![contest_hashes])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> ScalarField {
        ScalarField::new_unchecked(crate::constants::q())
    }

    #[test]
    fn crypto_hash_is_deterministic() {
        let field = field();
        let description = Description {
            contests: vec![Contest {
                object_id: "contest-1".to_string(),
                sequence_order: 0,
                votes_allowed: 1,
                ballot_selections: vec![Selection {
                    object_id: "selection-1".to_string(),
                    sequence_order: 0,
                }],
            }],
        };
        assert_eq!(
            description.crypto_hash(&field),
            description.crypto_hash(&field)
        );
    }

    #[test]
    fn renaming_object_id_changes_hash() {
        let field = field();
        let mut description = Description {
            contests: vec![Contest {
                object_id: "contest-1".to_string(),
                sequence_order: 0,
                votes_allowed: 1,
                ballot_selections: vec![],
            }],
        };
        let before = description.crypto_hash(&field);
        description.contests[0].object_id = "contest-1-renamed".to_string();
        let after = description.crypto_hash(&field);
        assert_ne!(before, after);
    }
}
