//! Resolved file locations for a signer run

use std::path::PathBuf;

pub const DEFAULT_PRIVATE_KEY_PATH: &str = "./privatekey";
pub const DEFAULT_SEED_PATH: &str = "./seed";

/// Where the private key and the seed data live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerConfig {
    /// SEC1 DER private key file
    pub private_key_path: PathBuf,
    /// Raw seed bytes to sign
    pub seed_path: PathBuf,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            private_key_path: PathBuf::from(DEFAULT_PRIVATE_KEY_PATH),
            seed_path: PathBuf::from(DEFAULT_SEED_PATH),
        }
    }
}
