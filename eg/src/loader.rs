#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Loads a published election artifact from a directory of JSON files into an
//! in-memory [`Artifact`], ready for the verification engine.
//!
//! The artifact directory is expected to hold a handful of single JSON files
//! (election manifest, context, constants, tallies) alongside a few
//! subdirectories of one-record-per-file collections (devices, cast ballots,
//! spoiled ballots, guardian coefficient sets). Every file and directory name
//! is independently overridable so the loader can target artifacts that don't
//! follow the default naming.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::artifact::{Artifact, Device};
use crate::ballot::CiphertextBallot;
use crate::coefficient::CoefficientValidationSet;
use crate::context::{Constants, Context};
use crate::description::Description;
use crate::errors::EgError;
use crate::tally::{PlaintextTally, PublishedCiphertextTally};

/// File and directory naming for one artifact, every field independently
/// overridable from the default ElectionGuard layout.
#[derive(Clone, Debug)]
pub struct LoaderConfig {
    pub directory: PathBuf,
    pub description_file: String,
    pub context_file: String,
    pub constants_file: String,
    pub encrypted_tally_file: String,
    pub tally_file: String,
    pub devices_dir: String,
    pub devices_prefix: String,
    pub ballots_dir: String,
    pub ballots_prefix: String,
    pub spoiled_dir: String,
    pub spoiled_prefix: String,
    pub coefficients_dir: String,
    pub coefficients_prefix: String,
}

impl LoaderConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        LoaderConfig {
            directory: directory.into(),
            description_file: "description.json".to_string(),
            context_file: "context.json".to_string(),
            constants_file: "constants.json".to_string(),
            encrypted_tally_file: "encrypted_tally.json".to_string(),
            tally_file: "tally.json".to_string(),
            devices_dir: "encryption_devices".to_string(),
            devices_prefix: "device_".to_string(),
            ballots_dir: "encrypted_ballots".to_string(),
            ballots_prefix: "ballot_".to_string(),
            spoiled_dir: "spoiled_ballots".to_string(),
            spoiled_prefix: "spoiled_ballot_".to_string(),
            coefficients_dir: "coefficients".to_string(),
            coefficients_prefix: "coefficient_validation_set_".to_string(),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, EgError> {
    let contents = fs::read_to_string(path).map_err(|source| EgError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| EgError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Reads every `<prefix>*.json` file directly inside `dir`, in sorted filename
/// order, and parses each as `T`. Returns an empty vector if `dir` does not
/// exist, since not every collection is present in every artifact.
fn read_prefixed_collection<T: DeserializeOwned>(dir: &Path, prefix: &str) -> Result<Vec<T>, EgError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|source| EgError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| EgError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if file_name.starts_with(prefix) && file_name.ends_with(".json") {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(|p| read_json(p)).collect()
}

/// Loads and materializes a full [`Artifact`] from `config.directory`.
pub fn load(config: &LoaderConfig) -> Result<Artifact, EgError> {
    if !config.directory.is_dir() {
        return Err(EgError::MissingDirectory(config.directory.display().to_string()));
    }

    let description: Description = read_json(&config.directory.join(&config.description_file))?;
    let context: Context = read_json(&config.directory.join(&config.context_file))?;
    let constants: Constants = read_json(&config.directory.join(&config.constants_file))?;
    let ciphertext_tally: PublishedCiphertextTally =
        read_json(&config.directory.join(&config.encrypted_tally_file))?;
    let plaintext_tally: PlaintextTally = read_json(&config.directory.join(&config.tally_file))?;

    let devices: Vec<Device> = read_prefixed_collection(
        &config.directory.join(&config.devices_dir),
        &config.devices_prefix,
    )?;
    let ciphertext_ballots: Vec<CiphertextBallot> = read_prefixed_collection(
        &config.directory.join(&config.ballots_dir),
        &config.ballots_prefix,
    )?;
    let spoiled_ballots: Vec<CiphertextBallot> = read_prefixed_collection(
        &config.directory.join(&config.spoiled_dir),
        &config.spoiled_prefix,
    )?;
    let coefficient_validation_sets: Vec<CoefficientValidationSet> = read_prefixed_collection(
        &config.directory.join(&config.coefficients_dir),
        &config.coefficients_prefix,
    )?;

    Ok(Artifact {
        description,
        context,
        constants,
        devices,
        ciphertext_ballots,
        spoiled_ballots,
        ciphertext_tally,
        plaintext_tally,
        coefficient_validation_sets,
    })
}
