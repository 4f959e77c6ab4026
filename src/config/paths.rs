//! Path management for vault-envelope
//!
//! ## Path Resolution Order
//!
//! 1. `VAULT_ENVELOPE_DIR` environment variable (if set)
//! 2. The platform config directory joined with `vault-envelope`
//!    (`~/.config/vault-envelope` on Linux)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::CodecError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "VAULT_ENVELOPE_DIR";

/// Manages all paths used by vault-envelope
#[derive(Debug, Clone)]
pub struct VaultPaths {
    base_dir: PathBuf,
}

impl VaultPaths {
    /// Create a new VaultPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, CodecError> {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create VaultPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the default shared secret file
    pub fn secret_file(&self) -> PathBuf {
        self.base_dir.join("secret.key")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CodecError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CodecError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, CodecError> {
    let dirs = BaseDirs::new().ok_or_else(|| {
        CodecError::Config(format!(
            "Could not determine a config directory; set {}",
            DIR_ENV_VAR
        ))
    })?;
    Ok(dirs.config_dir().join("vault-envelope"))
}
