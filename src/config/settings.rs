//! User settings for vault-envelope
//!
//! Chooses the key derivation parameters, the log level, and where the
//! shared secret is read from. The secret itself is never stored here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::VaultPaths;
use crate::crypto::{KeyDerivationParams, SharedSecret};
use crate::error::CodecError;
use crate::file_io::{read_bytes, write_json_atomic};

/// Where the shared secret comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretSource {
    /// Environment variable holding the secret
    #[serde(default = "default_secret_env_var")]
    pub env_var: String,

    /// File holding the secret (defaults to `secret.key` in the base dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for SecretSource {
    fn default() -> Self {
        Self {
            env_var: default_secret_env_var(),
            file: None,
        }
    }
}

fn default_secret_env_var() -> String {
    "VAULT_ENVELOPE_SECRET".to_string()
}

/// User settings for vault-envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Key derivation parameters shared with every envelope producer
    #[serde(default)]
    pub kdf: KeyDerivationParams,

    /// Shared secret source
    #[serde(default)]
    pub secret: SecretSource,

    /// Default log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    crate::logging::DEFAULT_LEVEL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            kdf: KeyDerivationParams::default(),
            secret: SecretSource::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &VaultPaths) -> Result<Self, CodecError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = read_bytes(&settings_path)?;
        let settings: Settings = serde_json::from_slice(&contents).map_err(|e| {
            CodecError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.kdf.validate().map_err(|e| {
            CodecError::Config(format!("Invalid kdf settings: {}", e))
        })?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &VaultPaths) -> Result<(), CodecError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Resolve the shared secret.
    ///
    /// Order: explicit file, configured environment variable, configured
    /// file, default `secret.key`, then an interactive prompt if allowed.
    pub fn resolve_secret(
        &self,
        paths: &VaultPaths,
        explicit_file: Option<&Path>,
        allow_prompt: bool,
    ) -> Result<SharedSecret, CodecError> {
        if let Some(path) = explicit_file {
            return secret_from_file(path);
        }

        match std::env::var(&self.secret.env_var) {
            Ok(value) if !value.is_empty() => {
                tracing::debug!(env_var = %self.secret.env_var, "using secret from environment");
                return Ok(SharedSecret::from(value));
            }
            Ok(_) => {}
            Err(std::env::VarError::NotPresent) => {}
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(CodecError::Config(format!(
                    "{} is not valid UTF-8",
                    self.secret.env_var
                )));
            }
        }

        if let Some(ref path) = self.secret.file {
            return secret_from_file(path);
        }

        let default_file = paths.secret_file();
        if default_file.exists() {
            return secret_from_file(&default_file);
        }

        if allow_prompt {
            let entered = rpassword::prompt_password("Shared secret: ")
                .map_err(|e| CodecError::Io(format!("Failed to read secret: {}", e)))?;
            return non_empty(SharedSecret::from(entered), "prompt");
        }

        Err(CodecError::Config(format!(
            "No shared secret configured: set {}, write {}, or pass --prompt",
            self.secret.env_var,
            default_file.display()
        )))
    }
}

fn secret_from_file(path: &Path) -> Result<SharedSecret, CodecError> {
    tracing::debug!(path = %path.display(), "using secret from file");
    let secret = SharedSecret::from_file_contents(read_bytes(path)?);
    non_empty(secret, &path.display().to_string())
}

fn non_empty(secret: SharedSecret, source: &str) -> Result<SharedSecret, CodecError> {
    if secret.is_empty() {
        return Err(CodecError::Config(format!("Shared secret from {} is empty", source)));
    }
    Ok(secret)
}
