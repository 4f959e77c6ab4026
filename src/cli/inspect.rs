//! Inspect command
//!
//! Shows an envelope's layout without decrypting it, so no secret is needed.

use std::path::Path;

use crate::crypto::{decode_transport, Envelope};
use crate::display::format_envelope_layout;
use crate::error::CodecResult;
use crate::file_io::read_bytes;

/// Handle the inspect command
///
/// With `base64` set, the file holds a text transport value instead of raw
/// envelope bytes.
pub fn handle_inspect_command(input: &Path, base64: bool) -> CodecResult<()> {
    let envelope = load_envelope(input, base64)?;
    print!("{}", format_envelope_layout(&envelope));
    Ok(())
}

/// Read and parse an envelope from disk
pub fn load_envelope(input: &Path, base64: bool) -> CodecResult<Envelope> {
    let raw = read_bytes(input)?;
    let bytes = if base64 {
        let text = String::from_utf8_lossy(&raw);
        decode_transport(text.trim())?
    } else {
        raw
    };

    Envelope::from_bytes(bytes)
}
