//! Command line definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{SignerConfig, DEFAULT_PRIVATE_KEY_PATH, DEFAULT_SEED_PATH};

#[derive(Parser, Debug)]
#[command(name = "seed-signer")]
#[command(
    version,
    about = "Generate the seed signing key and sign variations seed files"
)]
pub struct Cli {
    /// Private key file (SEC1 DER)
    #[arg(
        long,
        global = true,
        env = "SEED_SIGNER_KEY",
        default_value = DEFAULT_PRIVATE_KEY_PATH
    )]
    pub key: PathBuf,

    /// Seed data file to sign
    #[arg(
        long,
        global = true,
        env = "SEED_SIGNER_SEED",
        default_value = DEFAULT_SEED_PATH
    )]
    pub seed: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new private key file and print its public key
    Keygen(IgnoredArgs),
    /// Print the base64 signature of the seed file's SHA-256 digest
    Sign(IgnoredArgs),
}

/// Positional words after the command name are accepted and dropped;
/// only the command name selects what runs.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoredArgs {
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

impl Cli {
    pub fn config(&self) -> SignerConfig {
        SignerConfig {
            private_key_path: self.key.clone(),
            seed_path: self.seed.clone(),
        }
    }
}
