//! Configuration module for vault-envelope
//!
//! - Path resolution for the config directory
//! - JSON settings (key derivation parameters, secret source, log level)

pub mod paths;
pub mod settings;

pub use paths::VaultPaths;
pub use settings::{SecretSource, Settings};
