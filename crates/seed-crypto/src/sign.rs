//! Seed digest and signature generation
//!
//! The signature covers the SHA-256 digest of the raw seed bytes. Each call
//! mixes fresh OS randomness into the nonce, so signing the same seed twice
//! yields two different, equally valid DER signatures.

use base64::Engine;
use p256::ecdsa::{signature::hazmat::RandomizedPrehashSigner, Signature};
use sha2::{Digest, Sha256};

use crate::error::{CryptoError, Result};
use crate::keys::SeedKeyPair;

impl SeedKeyPair {
    /// Sign a precomputed SHA-256 digest and return the DER-encoded signature
    pub fn sign_digest(&self, digest: &[u8; 32]) -> Result<Vec<u8>> {
        let signature: Signature = self
            .signing_key()
            .sign_prehash_with_rng(&mut rand_core::OsRng, digest)
            .map_err(|e| CryptoError::Signing(e.to_string()))?;

        Ok(signature.to_der().as_bytes().to_vec())
    }
}

/// Sign seed data and return the base64 signature for the `X-Seed-Signature` header
pub fn sign_seed(key_pair: &SeedKeyPair, seed_data: &[u8]) -> Result<String> {
    let digest = sha256(seed_data);
    tracing::debug!(
        seed_len = seed_data.len(),
        digest = %hex::encode(digest),
        "signing seed digest"
    );

    let signature = key_pair.sign_digest(&digest)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(signature))
}

/// Hash data using SHA-256
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use p256::ecdsa::signature::hazmat::PrehashVerifier;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: Any seed can be signed and the signature verifies over its digest
        #[test]
        fn seed_signature_verifies(seed in prop::collection::vec(any::<u8>(), 0..2048)) {
            let key_pair = SeedKeyPair::generate();
            let text = sign_seed(&key_pair, &seed).unwrap();

            let der = base64::engine::general_purpose::STANDARD.decode(&text).unwrap();
            let signature = Signature::from_der(&der).unwrap();
            prop_assert!(key_pair.verifying_key().verify_prehash(&sha256(&seed), &signature).is_ok());
        }

        /// Property: Signatures from a reloaded key verify with the original
        #[test]
        fn reloaded_key_signs_for_original(seed in prop::collection::vec(any::<u8>(), 0..512)) {
            let key_pair = SeedKeyPair::generate();
            let restored = SeedKeyPair::from_sec1_der(&key_pair.to_sec1_der().unwrap()).unwrap();

            let digest = sha256(&seed);
            let der = restored.sign_digest(&digest).unwrap();
            let signature = Signature::from_der(&der).unwrap();
            prop_assert!(key_pair.verifying_key().verify_prehash(&digest, &signature).is_ok());
        }

        /// Property: Base64 output uses the standard padded alphabet
        #[test]
        fn signature_is_standard_base64(seed in prop::collection::vec(any::<u8>(), 0..256)) {
            let key_pair = SeedKeyPair::generate();
            let text = sign_seed(&key_pair, &seed).unwrap();

            prop_assert_eq!(text.len() % 4, 0);
            prop_assert!(text.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
        }
    }
}
