//! Key derivation using PBKDF2-HMAC-SHA512
//!
//! Stretches the shared secret with a per-envelope salt into a 256-bit
//! AES key. The default parameters match the browser client so envelopes
//! produced there decrypt here and vice versa.

use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CodecError, CodecResult};

/// Salt length in bytes
pub const SALT_LEN: usize = 64;

/// Derived key length in bytes (AES-256)
pub const KEY_LEN: usize = 32;

/// Lowest iteration count accepted
pub const MIN_ITERATIONS: u32 = 100_000;

/// Parameters for key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDerivationParams {
    /// PBKDF2 iteration count (default and minimum: 100000)
    pub iterations: u32,
}

impl Default for KeyDerivationParams {
    fn default() -> Self {
        Self {
            iterations: MIN_ITERATIONS,
        }
    }
}

impl KeyDerivationParams {
    /// Create params with a specific iteration count
    pub fn with_iterations(iterations: u32) -> CodecResult<Self> {
        let params = Self { iterations };
        params.validate()?;
        Ok(params)
    }

    /// Check the params are strong enough to use
    pub fn validate(&self) -> CodecResult<()> {
        if self.iterations < MIN_ITERATIONS {
            return Err(CodecError::KeyDerivation(format!(
                "iteration count {} is below the minimum of {}",
                self.iterations, MIN_ITERATIONS
            )));
        }
        Ok(())
    }
}

/// A derived encryption key
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The 32-byte key for AES-256
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

/// Derive an encryption key from the shared secret and an envelope salt
pub fn derive_key(
    secret: &[u8],
    salt: &[u8],
    params: &KeyDerivationParams,
) -> CodecResult<DerivedKey> {
    if secret.is_empty() {
        return Err(CodecError::KeyDerivation("secret is empty".to_string()));
    }

    if salt.len() != SALT_LEN {
        return Err(CodecError::KeyDerivation(format!(
            "salt must be {} bytes, got {}",
            SALT_LEN,
            salt.len()
        )));
    }

    params.validate()?;

    let mut key = DerivedKey { key: [0u8; KEY_LEN] };
    pbkdf2_hmac::<Sha512>(secret, salt, params.iterations, &mut key.key);

    Ok(key)
}
