//! Error types for vault-envelope
//!
//! Defines the codec error taxonomy with thiserror, plus the host-side
//! failures (configuration, I/O, JSON) the CLI runs into.

use thiserror::Error;

/// The main error type for codec and host operations
#[derive(Error, Debug)]
pub enum CodecError {
    /// Bad secret, salt shape, or iteration count
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// Buffer too short to contain the fixed envelope header
    #[error("Malformed envelope: expected at least {minimum} bytes, got {actual}")]
    MalformedEnvelope { minimum: usize, actual: usize },

    /// Authentication tag did not verify (tampered data or wrong secret)
    #[error("Authentication failed: envelope was tampered with or the secret is wrong")]
    Authentication,

    /// Invalid base64 transport encoding
    #[error("Transport decode error: {0}")]
    TransportDecode(String),

    /// Decrypted bytes are not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Random source or cipher primitive failure
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

/// Which direction an operation was going when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Producing an envelope
    Save,
    /// Consuming an envelope
    Read,
}

impl CodecError {
    /// Check whether the envelope was tampered with or the secret is wrong
    pub fn is_tamper_or_wrong_key(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Check if this error came from the codec rather than the host
    pub fn is_codec_error(&self) -> bool {
        !matches!(self, Self::Config(_) | Self::Io(_) | Self::Json(_))
    }

    /// Message safe to show to an end user.
    ///
    /// Codec failures collapse into a generic message that reveals nothing
    /// about the cryptography; host failures keep their own description.
    pub fn user_message(&self, direction: Direction) -> String {
        if self.is_codec_error() {
            match direction {
                Direction::Save => "Unable to save this item".to_string(),
                Direction::Read => "Unable to read this item".to_string(),
            }
        } else {
            self.to_string()
        }
    }
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for vault-envelope operations
pub type CodecResult<T> = Result<T, CodecError>;
