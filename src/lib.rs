//! vault-envelope - client-side envelope encryption for photo vault payloads
//!
//! Protects file bytes and text fields before they leave the client, and
//! reverses the process on read. An envelope is laid out as
//! `salt(64) || nonce(16) || tag(16) || ciphertext`, sealed with AES-256-GCM
//! under a key stretched from a shared secret with PBKDF2-HMAC-SHA512.
//!
//! # Architecture
//!
//! - `crypto`: key derivation, envelope layout, codec, text transport
//! - `error`: error taxonomy
//! - `config`: path resolution and settings
//! - `file_io`: atomic file writes
//! - `logging`: tracing subscriber setup
//! - `display`: terminal formatting
//! - `cli`: command handlers for the `vault-envelope` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use vault_envelope::crypto::{decrypt_text, encrypt_text};
//!
//! let secret = b"12345678901234567890123456789012";
//! let sealed = encrypt_text("Summer trip", secret)?;
//! assert_eq!(decrypt_text(sealed, secret)?, "Summer trip");
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod file_io;
pub mod logging;

pub use crypto::{
    decrypt_bytes, decrypt_text, encrypt_bytes, encrypt_text, Envelope, EnvelopeCodec,
    SharedSecret, Transport,
};
pub use error::{CodecError, CodecResult};
