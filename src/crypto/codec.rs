//! AES-256-GCM envelope encryption
//!
//! Every encryption draws a fresh salt and nonce, derives a key from the
//! shared secret, and packs everything the reader needs into the envelope.
//! Decryption either returns the whole plaintext or nothing.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::rand_core::{CryptoRng, RngCore};
use aes_gcm::aead::{AeadInPlace, KeyInit, OsRng};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce, Tag};

use crate::error::{CodecError, CodecResult};

use super::envelope::{Envelope, EnvelopeView, NONCE_LEN};
use super::key_derivation::{derive_key, KeyDerivationParams, SALT_LEN};

/// AES-256-GCM with the 128-bit nonce the envelope format uses
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Stateless envelope codec
///
/// Holds only the key derivation parameters, so a single instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvelopeCodec {
    params: KeyDerivationParams,
}

impl EnvelopeCodec {
    /// Create a codec with specific key derivation parameters
    pub fn new(params: KeyDerivationParams) -> CodecResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Key derivation parameters in use
    pub fn params(&self) -> &KeyDerivationParams {
        &self.params
    }

    /// Encrypt raw bytes into an envelope
    ///
    /// Uses the operating system RNG for the salt and nonce.
    pub fn encrypt_bytes(&self, plaintext: &[u8], secret: &[u8]) -> CodecResult<Envelope> {
        self.encrypt_bytes_with_rng(&mut OsRng, plaintext, secret)
    }

    /// Encrypt raw bytes, drawing the salt and nonce from `rng`
    pub fn encrypt_bytes_with_rng<R>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
        secret: &[u8],
    ) -> CodecResult<Envelope>
    where
        R: RngCore + CryptoRng,
    {
        let mut salt = [0u8; SALT_LEN];
        let mut nonce = [0u8; NONCE_LEN];
        rng.try_fill_bytes(&mut salt)
            .and_then(|_| rng.try_fill_bytes(&mut nonce))
            .map_err(|e| CodecError::Crypto(format!("Random source failed: {}", e)))?;

        let key = derive_key(secret, &salt, &self.params)?;
        let cipher = Aes256Gcm16::new_from_slice(key.as_bytes())
            .map_err(|e| CodecError::Crypto(format!("Failed to create cipher: {}", e)))?;

        let mut buffer = plaintext.to_vec();
        let tag = cipher
            .encrypt_in_place_detached(Nonce::<U16>::from_slice(&nonce), b"", &mut buffer)
            .map_err(|e| CodecError::Crypto(format!("Encryption failed: {}", e)))?;

        let envelope = Envelope::assemble(&salt, &nonce, tag.as_slice(), &buffer);
        tracing::debug!(
            plaintext_len = plaintext.len(),
            envelope_len = envelope.len(),
            "sealed envelope"
        );

        Ok(envelope)
    }

    /// Decrypt an envelope back to raw bytes
    ///
    /// Accepts anything byte-like; buffers shorter than the fixed header are
    /// rejected before any key derivation happens.
    pub fn decrypt_bytes(&self, envelope: &[u8], secret: &[u8]) -> CodecResult<Vec<u8>> {
        self.open_view(EnvelopeView::parse(envelope)?, secret)
    }

    /// Decrypt an already-parsed envelope
    pub fn open(&self, envelope: &Envelope, secret: &[u8]) -> CodecResult<Vec<u8>> {
        self.open_view(envelope.view(), secret)
    }

    /// Decrypt a borrowed envelope; only the ciphertext is copied
    pub fn open_view(&self, envelope: EnvelopeView<'_>, secret: &[u8]) -> CodecResult<Vec<u8>> {
        let key = derive_key(secret, envelope.salt(), &self.params)?;
        let cipher = Aes256Gcm16::new_from_slice(key.as_bytes())
            .map_err(|e| CodecError::Crypto(format!("Failed to create cipher: {}", e)))?;

        let mut buffer = envelope.ciphertext().to_vec();
        let result = cipher.decrypt_in_place_detached(
            Nonce::<U16>::from_slice(envelope.nonce()),
            b"",
            &mut buffer,
            Tag::from_slice(envelope.tag()),
        );

        if result.is_err() {
            // buffer is dropped here; nothing from a failed open escapes
            tracing::warn!(envelope_len = envelope.len(), "envelope failed authentication");
            return Err(CodecError::Authentication);
        }

        tracing::debug!(
            envelope_len = envelope.len(),
            plaintext_len = buffer.len(),
            "opened envelope"
        );

        Ok(buffer)
    }
}
