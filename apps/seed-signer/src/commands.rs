//! The `keygen` and `sign` commands
//!
//! Both commands take their file locations from a [`SignerConfig`] and print
//! their result to the given writer, which is stdout in the binary.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use seed_crypto::{sign_seed, SeedKeyPair};
use tracing::{debug, info, warn};

use crate::config::SignerConfig;
use crate::error::SignerError;

/// Generate a key pair, persist the private key and print the public key.
///
/// The printed line is the SubjectPublicKeyInfo DER as spaced hex, ready to
/// be transcribed into the consuming client's public key constant.
pub fn keygen<W: Write>(config: &SignerConfig, out: &mut W) -> Result<SeedKeyPair, SignerError> {
    let path = &config.private_key_path;
    if path.exists() {
        warn!(path = %path.display(), "overwriting existing private key");
    }

    let key_pair = SeedKeyPair::generate();
    let der = key_pair.to_sec1_der()?;
    write_private_key(path, &der).map_err(|source| SignerError::WriteFile {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "wrote private key");

    writeln!(out, "public key: {}", key_pair.public_key_hex()?).map_err(SignerError::Output)?;
    Ok(key_pair)
}

/// Sign the seed file with the persisted private key and print the base64 signature
pub fn sign<W: Write>(config: &SignerConfig, out: &mut W) -> Result<String, SignerError> {
    let key_der = read_file(&config.private_key_path)?;
    let key_pair = SeedKeyPair::from_sec1_der(&key_der)?;
    debug!(path = %config.private_key_path.display(), "loaded private key");

    let seed = read_file(&config.seed_path)?;
    let signature = sign_seed(&key_pair, &seed)?;
    info!(
        seed = %config.seed_path.display(),
        bytes = seed.len(),
        "signed seed"
    );

    writeln!(out, "{}", signature).map_err(SignerError::Output)?;
    Ok(signature)
}

fn read_file(path: &Path) -> Result<Vec<u8>, SignerError> {
    fs::read(path).map_err(|source| SignerError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

fn write_private_key(path: &Path, der: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;

    // `mode` only applies on creation; tighten a pre-existing file too
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(der)?;
    file.sync_all()
}
