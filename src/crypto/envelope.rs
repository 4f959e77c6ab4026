//! Envelope binary layout
//!
//! ```text
//! offset  len  field
//!      0   64  salt
//!     64   16  nonce
//!     80   16  authentication tag
//!     96    N  ciphertext
//! ```
//!
//! The header is positional; there is no magic or version byte, so the
//! layout must stay bit-exact with the browser client.

use crate::error::{CodecError, CodecResult};

use super::key_derivation::SALT_LEN;

/// Nonce length in bytes (128 bits)
pub const NONCE_LEN: usize = 16;

/// GCM authentication tag length in bytes
pub const TAG_LEN: usize = 16;

/// Offset of the nonce
pub const NONCE_OFFSET: usize = SALT_LEN;

/// Offset of the authentication tag
pub const TAG_OFFSET: usize = NONCE_OFFSET + NONCE_LEN;

/// Size of the fixed header, and offset of the ciphertext
pub const HEADER_LEN: usize = TAG_OFFSET + TAG_LEN;

/// An encrypted envelope
///
/// Always holds at least [`HEADER_LEN`] bytes. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    bytes: Vec<u8>,
}

impl Envelope {
    /// Assemble an envelope from its parts
    pub(crate) fn assemble(
        salt: &[u8; SALT_LEN],
        nonce: &[u8; NONCE_LEN],
        tag: &[u8],
        ciphertext: &[u8],
    ) -> Self {
        debug_assert_eq!(tag.len(), TAG_LEN);

        let mut bytes = Vec::with_capacity(HEADER_LEN + ciphertext.len());
        bytes.extend_from_slice(salt);
        bytes.extend_from_slice(nonce);
        bytes.extend_from_slice(tag);
        bytes.extend_from_slice(ciphertext);
        Self { bytes }
    }

    /// Wrap raw bytes, checking they can hold the fixed header
    pub fn from_bytes(bytes: Vec<u8>) -> CodecResult<Self> {
        check_len(&bytes)?;
        Ok(Self { bytes })
    }

    /// Copy a borrowed buffer into an envelope
    pub fn from_slice(bytes: &[u8]) -> CodecResult<Self> {
        check_len(bytes)?;
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Salt region
    pub fn salt(&self) -> &[u8] {
        self.view().salt()
    }

    /// Nonce region
    pub fn nonce(&self) -> &[u8] {
        self.view().nonce()
    }

    /// Authentication tag region
    pub fn tag(&self) -> &[u8] {
        self.view().tag()
    }

    /// Ciphertext region (may be empty)
    pub fn ciphertext(&self) -> &[u8] {
        self.view().ciphertext()
    }

    /// Borrow the envelope as a region view
    pub fn view(&self) -> EnvelopeView<'_> {
        EnvelopeView { bytes: &self.bytes }
    }

    /// Full envelope bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the envelope, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Total length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; an envelope carries at least its header
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Length of the plaintext this envelope decrypts to
    pub fn plaintext_len(&self) -> usize {
        self.bytes.len() - HEADER_LEN
    }
}

/// Borrowed view over envelope bytes
///
/// Gives the same region access as [`Envelope`] without copying the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeView<'a> {
    bytes: &'a [u8],
}

impl<'a> EnvelopeView<'a> {
    /// Borrow raw bytes, checking they can hold the fixed header
    pub fn parse(bytes: &'a [u8]) -> CodecResult<Self> {
        check_len(bytes)?;
        Ok(Self { bytes })
    }

    /// Salt region
    pub fn salt(&self) -> &'a [u8] {
        &self.bytes[..NONCE_OFFSET]
    }

    /// Nonce region
    pub fn nonce(&self) -> &'a [u8] {
        &self.bytes[NONCE_OFFSET..TAG_OFFSET]
    }

    /// Authentication tag region
    pub fn tag(&self) -> &'a [u8] {
        &self.bytes[TAG_OFFSET..HEADER_LEN]
    }

    /// Ciphertext region (may be empty)
    pub fn ciphertext(&self) -> &'a [u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// Total length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; a view covers at least the header
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Envelope {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Envelope> for Vec<u8> {
    fn from(envelope: Envelope) -> Self {
        envelope.bytes
    }
}

impl TryFrom<Vec<u8>> for Envelope {
    type Error = CodecError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

fn check_len(bytes: &[u8]) -> CodecResult<()> {
    if bytes.len() < HEADER_LEN {
        return Err(CodecError::MalformedEnvelope {
            minimum: HEADER_LEN,
            actual: bytes.len(),
        });
    }
    Ok(())
}
