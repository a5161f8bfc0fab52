#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Command-line arguments for `egverify`, mirroring the file/directory
//! overrides the loader accepts, plus the usual verbosity flags.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "egverify", about = "Verifies a published ElectionGuard election artifact")]
pub struct Args {
    /// Directory containing the election artifact. Defaults to the current directory.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    #[arg(long)]
    pub description_file: Option<String>,
    #[arg(long)]
    pub context_file: Option<String>,
    #[arg(long)]
    pub constants_file: Option<String>,
    #[arg(long)]
    pub encrypted_tally_file: Option<String>,
    #[arg(long)]
    pub tally_file: Option<String>,

    #[arg(long)]
    pub devices_dir: Option<String>,
    #[arg(long)]
    pub devices_prefix: Option<String>,

    #[arg(long)]
    pub ballots_dir: Option<String>,
    #[arg(long)]
    pub ballots_prefix: Option<String>,

    #[arg(long)]
    pub spoiled_dir: Option<String>,
    #[arg(long)]
    pub spoiled_prefix: Option<String>,

    #[arg(long)]
    pub coefficients_dir: Option<String>,
    #[arg(long)]
    pub coefficients_prefix: Option<String>,

    /// Prints per-stage detail even when the whole run is valid.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses warnings for known, unverifiable producer deviations.
    #[arg(short = 'n', long = "no-warn")]
    pub no_warn: bool,
}

impl Args {
    pub fn to_loader_config(&self) -> eg::loader::LoaderConfig {
        let mut config = eg::loader::LoaderConfig::new(self.directory.clone());

        if let Some(v) = &self.description_file {
            config.description_file = v.clone();
        }
        if let Some(v) = &self.context_file {
            config.context_file = v.clone();
        }
        if let Some(v) = &self.constants_file {
            config.constants_file = v.clone();
        }
        if let Some(v) = &self.encrypted_tally_file {
            config.encrypted_tally_file = v.clone();
        }
        if let Some(v) = &self.tally_file {
            config.tally_file = v.clone();
        }
        if let Some(v) = &self.devices_dir {
            config.devices_dir = v.clone();
        }
        if let Some(v) = &self.devices_prefix {
            config.devices_prefix = v.clone();
        }
        if let Some(v) = &self.ballots_dir {
            config.ballots_dir = v.clone();
        }
        if let Some(v) = &self.ballots_prefix {
            config.ballots_prefix = v.clone();
        }
        if let Some(v) = &self.spoiled_dir {
            config.spoiled_dir = v.clone();
        }
        if let Some(v) = &self.spoiled_prefix {
            config.spoiled_prefix = v.clone();
        }
        if let Some(v) = &self.coefficients_dir {
            config.coefficients_dir = v.clone();
        }
        if let Some(v) = &self.coefficients_prefix {
            config.coefficients_prefix = v.clone();
        }

        config
    }
}
