//! Text CLI commands
//!
//! Encrypts and decrypts string fields (titles, blog bodies) using the
//! base64 transport encoding.

use clap::Subcommand;
use std::io::Read;

use crate::crypto::{EnvelopeCodec, SharedSecret, Transport};
use crate::error::{CodecError, CodecResult};

/// Text subcommands
#[derive(Subcommand)]
pub enum TextCommands {
    /// Encrypt a string and print the base64 envelope
    Encrypt {
        /// Text to encrypt (reads stdin when omitted)
        text: Option<String>,
    },

    /// Decrypt a base64 envelope and print the text
    Decrypt {
        /// Transport value (reads stdin when omitted)
        value: Option<String>,

        /// Parse the value as JSON: a string or a {"type":"Buffer"} object
        #[arg(long)]
        json: bool,
    },
}

impl TextCommands {
    /// Whether this command produces envelopes
    pub fn is_encrypt(&self) -> bool {
        matches!(self, Self::Encrypt { .. })
    }
}

/// Handle a text command
pub fn handle_text_command(
    codec: &EnvelopeCodec,
    secret: &SharedSecret,
    cmd: TextCommands,
) -> CodecResult<()> {
    match cmd {
        TextCommands::Encrypt { text } => {
            let text = match text {
                Some(text) => text,
                None => strip_line_ending(read_stdin()?),
            };
            println!("{}", codec.encrypt_text(&text, secret)?);
        }
        TextCommands::Decrypt { value, json } => {
            let value = match value {
                Some(value) => value,
                None => read_stdin()?,
            };
            let transport = parse_transport(value.trim(), json)?;
            println!("{}", codec.decrypt_text(transport, secret)?);
        }
    }

    Ok(())
}

/// Turn command input into a transport value
pub fn parse_transport(value: &str, json: bool) -> CodecResult<Transport> {
    if json {
        serde_json::from_str(value)
            .map_err(|e| CodecError::Json(format!("Invalid transport JSON: {}", e)))
    } else {
        Ok(Transport::Text(value.to_string()))
    }
}

fn read_stdin() -> CodecResult<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| CodecError::Io(format!("Failed to read stdin: {}", e)))?;
    Ok(buffer)
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
