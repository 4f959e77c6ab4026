//! Envelope encryption for vault payloads
//!
//! Provides AES-256-GCM encryption with PBKDF2-HMAC-SHA512 key derivation,
//! packed into a fixed 96-byte-header envelope, plus a base64 transport for
//! string fields.
//!
//! The free functions use the default key derivation parameters; build an
//! [`EnvelopeCodec`] to choose others.

pub mod codec;
pub mod envelope;
pub mod key_derivation;
pub mod secret;
pub mod transport;

pub use codec::EnvelopeCodec;
pub use envelope::{Envelope, EnvelopeView, HEADER_LEN, NONCE_LEN, TAG_LEN};
pub use key_derivation::{derive_key, DerivedKey, KeyDerivationParams, SALT_LEN};
pub use secret::SharedSecret;
pub use transport::{decode_transport, encode_transport, Transport};

use crate::error::CodecResult;

/// Encrypt raw bytes into an envelope
pub fn encrypt_bytes(plaintext: &[u8], secret: &[u8]) -> CodecResult<Envelope> {
    EnvelopeCodec::default().encrypt_bytes(plaintext, secret)
}

/// Decrypt an envelope back to raw bytes
pub fn decrypt_bytes(envelope: &[u8], secret: &[u8]) -> CodecResult<Vec<u8>> {
    EnvelopeCodec::default().decrypt_bytes(envelope, secret)
}

/// Encrypt a string into a base64 envelope
pub fn encrypt_text(plaintext: &str, secret: &[u8]) -> CodecResult<String> {
    EnvelopeCodec::default().encrypt_text(plaintext, secret)
}

/// Decrypt a base64 envelope, or already-decoded envelope bytes, to a string
pub fn decrypt_text(transport: impl Into<Transport>, secret: &[u8]) -> CodecResult<String> {
    EnvelopeCodec::default().decrypt_text(transport, secret)
}
