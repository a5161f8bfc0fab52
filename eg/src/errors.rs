#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Programmer-facing errors: malformed artifact data that the loader contract
//! promises never to hand the engine. These are distinct from invariant failures,
//! which are reported through [`crate::invariant::InvariantSet`] and never panic
//! or return `Err`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EgError {
    #[error("failed to read artifact file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact directory {0} does not exist or is not a directory")]
    MissingDirectory(String),

    #[error("required artifact file is missing: {0}")]
    MissingFile(String),

    #[error("tally share for guardian {0:?} is malformed: has neither a direct proof nor recovered parts")]
    MalformedShare(Option<String>),
}
