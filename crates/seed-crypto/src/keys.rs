//! P-256 key pair for seed signing

use p256::{
    ecdsa::{SigningKey, VerifyingKey},
    elliptic_curve::zeroize::Zeroizing,
    pkcs8::EncodePublicKey,
    SecretKey,
};

use crate::error::{CryptoError, Result};

/// The key pair that signs seed files.
///
/// The private half is persisted as a SEC1 `ECPrivateKey` DER structure; the
/// public half is only ever printed, as SubjectPublicKeyInfo DER.
#[derive(Debug)]
pub struct SeedKeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl SeedKeyPair {
    /// Generate a new random key pair from the OS random source
    pub fn generate() -> Self {
        let secret_key = SecretKey::random(&mut rand_core::OsRng);
        Self::from_secret_key(&secret_key)
    }

    /// Load a key pair from SEC1 DER private key bytes
    pub fn from_sec1_der(der: &[u8]) -> Result<Self> {
        if der.is_empty() {
            return Err(CryptoError::InvalidPrivateKey(
                "private key data is empty".to_string(),
            ));
        }

        let secret_key = SecretKey::from_sec1_der(der)
            .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;

        Ok(Self::from_secret_key(&secret_key))
    }

    fn from_secret_key(secret_key: &SecretKey) -> Self {
        let signing_key = SigningKey::from(secret_key);
        let verifying_key = VerifyingKey::from(&signing_key);

        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Export the private key as SEC1 DER for the key file
    /// WARNING: this exposes the private key
    pub fn to_sec1_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        SecretKey::from(&self.signing_key)
            .to_sec1_der()
            .map_err(|e| CryptoError::Encoding(e.to_string()))
    }

    /// Get the public key as SubjectPublicKeyInfo DER bytes
    pub fn public_key_der(&self) -> Result<Vec<u8>> {
        p256::PublicKey::from(&self.verifying_key)
            .to_public_key_der()
            .map(|doc| doc.as_bytes().to_vec())
            .map_err(|e| CryptoError::Encoding(e.to_string()))
    }

    /// Get the public key DER as lowercase hex, one space between bytes
    pub fn public_key_hex(&self) -> Result<String> {
        let der = self.public_key_der()?;
        Ok(der
            .iter()
            .map(|b| hex::encode([*b]))
            .collect::<Vec<_>>()
            .join(" "))
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use p256::pkcs8::DecodePublicKey;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_generation() {
        let key_pair = SeedKeyPair::generate();
        let der = key_pair.to_sec1_der().unwrap();

        // ECPrivateKey is a SEQUENCE
        assert_eq!(der[0], 0x30);
        // version 1 INTEGER follows the header
        assert_eq!(&der[2..5], &[0x02, 0x01, 0x01]);
    }

    #[test]
    fn test_export_import() {
        let key_pair = SeedKeyPair::generate();
        let der = key_pair.to_sec1_der().unwrap();

        let restored = SeedKeyPair::from_sec1_der(&der).unwrap();

        assert_eq!(
            key_pair.public_key_der().unwrap(),
            restored.public_key_der().unwrap()
        );
    }

    #[test]
    fn test_public_key_der_parses() {
        let key_pair = SeedKeyPair::generate();
        let der = key_pair.public_key_der().unwrap();

        // P-256 SPKI is always 91 bytes
        assert_eq!(der.len(), 91);

        let parsed = p256::PublicKey::from_public_key_der(&der).unwrap();
        assert_eq!(
            parsed,
            p256::PublicKey::from(key_pair.verifying_key())
        );
    }

    #[test]
    fn test_public_key_hex_format() {
        let key_pair = SeedKeyPair::generate();
        let hex_text = key_pair.public_key_hex().unwrap();

        assert!(hex_text.starts_with("30 59 30 13 06 07 2a 86 48 ce 3d 02 01"));
        assert!(hex_text
            .split(' ')
            .all(|byte| byte.len() == 2 && byte.chars().all(|c| c.is_ascii_hexdigit())));
        assert_eq!(hex_text.split(' ').count(), 91);
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = SeedKeyPair::from_sec1_der(&[]);
        assert!(matches!(result, Err(CryptoError::InvalidPrivateKey(_))));
    }

    #[test]
    fn test_raw_scalar_rejected() {
        // A bare 32-byte scalar is not a SEC1 structure
        let result = SeedKeyPair::from_sec1_der(&[0x42; 32]);
        assert!(result.is_err());
    }
}
