#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! The fully materialized, immutable artifact the engine verifies. Constructing
//! one is the loader's job (see [`crate::loader`]); the engine only ever reads it.

use serde::{Deserialize, Serialize};

use crate::ballot::CiphertextBallot;
use crate::coefficient::CoefficientValidationSet;
use crate::context::{Constants, Context};
use crate::description::Description;
use crate::tally::{PlaintextTally, PublishedCiphertextTally};

/// An encryption device record. Carried through for stage S5 (ballot chaining),
/// which is currently a stub — see the design notes on the producer's omitted
/// chain head and device binding.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Device {
    pub object_id: String,
}

/// The full, immutable election artifact handed to the verification engine.
pub struct Artifact {
    pub description: Description,
    pub context: Context,
    pub constants: Constants,
    pub devices: Vec<Device>,
    pub ciphertext_ballots: Vec<CiphertextBallot>,
    pub spoiled_ballots: Vec<CiphertextBallot>,
    pub ciphertext_tally: PublishedCiphertextTally,
    pub plaintext_tally: PlaintextTally,
    pub coefficient_validation_sets: Vec<CoefficientValidationSet>,
}
