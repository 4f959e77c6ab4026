//! Display formatting for terminal output

pub mod config;
pub mod envelope;

pub use config::{format_config, format_paths};
pub use envelope::format_envelope_layout;
