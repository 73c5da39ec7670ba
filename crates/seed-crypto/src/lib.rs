//! Seed signing cryptography
//!
//! This crate provides the P-256 key pair used to sign variations seed files,
//! its on-disk and printable encodings, and the digest-then-sign routine that
//! produces the `X-Seed-Signature` header value.

pub mod error;
pub mod keys;
pub mod sign;

pub use error::CryptoError;
pub use keys::SeedKeyPair;
pub use sign::{sha256, sign_seed};
