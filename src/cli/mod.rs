//! CLI command handlers
//!
//! Bridges the clap argument parsing with the envelope codec.

pub mod file;
pub mod inspect;
pub mod text;

pub use file::{handle_file_command, FileCommands};
pub use inspect::handle_inspect_command;
pub use text::{handle_text_command, TextCommands};
