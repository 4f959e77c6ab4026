//! Envelope display formatting
//!
//! Formats an envelope's layout for the `inspect` command. Only public
//! header material (salt, nonce, tag) is shown, truncated.

use crate::crypto::envelope::{Envelope, HEADER_LEN, NONCE_OFFSET, TAG_OFFSET};

/// Bytes of each header field shown in hex
const PREVIEW_LEN: usize = 8;

/// Format the layout of an envelope as a table
pub fn format_envelope_layout(envelope: &Envelope) -> String {
    let rows = [
        ("Salt", 0, envelope.salt()),
        ("Nonce", NONCE_OFFSET, envelope.nonce()),
        ("Tag", TAG_OFFSET, envelope.tag()),
        ("Ciphertext", HEADER_LEN, envelope.ciphertext()),
    ];

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:>6}  {:>8}  {}\n",
        "Field", "Offset", "Length", "Preview"
    ));
    output.push_str(&format!("{:-<10}  {:->6}  {:->8}  {:-<20}\n", "", "", "", ""));

    for (name, offset, bytes) in rows {
        output.push_str(&format!(
            "{:<10}  {:>6}  {:>8}  {}\n",
            name,
            offset,
            bytes.len(),
            hex_preview(bytes)
        ));
    }

    output.push('\n');
    output.push_str(&format!("Envelope length:  {} bytes\n", envelope.len()));
    output.push_str(&format!("Plaintext length: {} bytes\n", envelope.plaintext_len()));

    output
}

/// Lowercase hex of the first few bytes, with an ellipsis when truncated
fn hex_preview(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "(empty)".to_string();
    }

    let mut preview: String = bytes
        .iter()
        .take(PREVIEW_LEN)
        .map(|b| format!("{:02x}", b))
        .collect();

    if bytes.len() > PREVIEW_LEN {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope_with_ciphertext(len: usize) -> Envelope {
        let mut bytes: Vec<u8> = (0..HEADER_LEN as u8).collect();
        bytes.extend(std::iter::repeat(0xEE).take(len));
        Envelope::from_bytes(bytes).unwrap()
    }

    #[test]
    fn test_layout_lists_all_fields() {
        let output = format_envelope_layout(&envelope_with_ciphertext(11));

        assert!(output.contains("Salt"));
        assert!(output.contains("Nonce"));
        assert!(output.contains("Tag"));
        assert!(output.contains("Ciphertext"));
        assert!(output.contains("Envelope length:  107 bytes"));
        assert!(output.contains("Plaintext length: 11 bytes"));
    }

    #[test]
    fn test_layout_previews_header() {
        let output = format_envelope_layout(&envelope_with_ciphertext(0));

        // salt starts at byte 0, nonce at 64 (0x40), tag at 80 (0x50)
        assert!(output.contains("0001020304050607..."));
        assert!(output.contains("4041424344454647..."));
        assert!(output.contains("5051525354555657..."));
        assert!(output.contains("(empty)"));
    }

    #[test]
    fn test_hex_preview_short() {
        assert_eq!(hex_preview(&[0xAB, 0x01]), "ab01");
    }
}
