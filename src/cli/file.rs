//! File CLI commands
//!
//! Encrypts and decrypts whole files (photos, attachments) as raw envelope
//! bytes.

use clap::Subcommand;
use std::path::{Path, PathBuf};

use crate::crypto::{EnvelopeCodec, SharedSecret};
use crate::error::CodecResult;
use crate::file_io::{read_bytes, write_bytes_atomic};

/// Extension given to encrypted files
pub const ENCRYPTED_EXTENSION: &str = "enc";

/// File subcommands
#[derive(Subcommand)]
pub enum FileCommands {
    /// Encrypt a file into an envelope
    Encrypt {
        /// File to encrypt
        input: PathBuf,

        /// Output path (defaults to <input>.enc)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decrypt an envelope file
    Decrypt {
        /// Envelope file to decrypt
        input: PathBuf,

        /// Output path (defaults to <input> without .enc, or <input>.dec)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl FileCommands {
    /// Whether this command produces envelopes
    pub fn is_encrypt(&self) -> bool {
        matches!(self, Self::Encrypt { .. })
    }
}

/// Handle a file command
pub fn handle_file_command(
    codec: &EnvelopeCodec,
    secret: &SharedSecret,
    cmd: FileCommands,
) -> CodecResult<()> {
    match cmd {
        FileCommands::Encrypt { input, output } => {
            let output = output.unwrap_or_else(|| encrypted_path(&input));
            let plaintext = read_bytes(&input)?;

            let envelope = codec.encrypt_bytes(&plaintext, secret)?;
            write_bytes_atomic(&output, envelope.as_bytes())?;

            tracing::info!(input = %input.display(), output = %output.display(), "encrypted file");
            println!("Encrypted {} -> {}", input.display(), output.display());
            println!("  {} bytes -> {} bytes", plaintext.len(), envelope.len());
        }
        FileCommands::Decrypt { input, output } => {
            let output = output.unwrap_or_else(|| decrypted_path(&input));
            let envelope = read_bytes(&input)?;

            let plaintext = codec.decrypt_bytes(&envelope, secret)?;
            write_bytes_atomic(&output, &plaintext)?;

            tracing::info!(input = %input.display(), output = %output.display(), "decrypted file");
            println!("Decrypted {} -> {}", input.display(), output.display());
            println!("  {} bytes -> {} bytes", envelope.len(), plaintext.len());
        }
    }

    Ok(())
}

/// `photo.jpg` -> `photo.jpg.enc`
pub fn encrypted_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(ENCRYPTED_EXTENSION);
    PathBuf::from(name)
}

/// `photo.jpg.enc` -> `photo.jpg`, anything else -> `<input>.dec`
pub fn decrypted_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == ENCRYPTED_EXTENSION) {
        let stripped = input.with_extension("");
        if stripped.file_name().is_some() {
            return stripped;
        }
    }

    let mut name = input.as_os_str().to_owned();
    name.push(".dec");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_encrypted_path() {
        assert_eq!(
            encrypted_path(Path::new("album/photo.jpg")),
            PathBuf::from("album/photo.jpg.enc")
        );
    }

    #[test]
    fn test_decrypted_path() {
        assert_eq!(
            decrypted_path(Path::new("album/photo.jpg.enc")),
            PathBuf::from("album/photo.jpg")
        );
        assert_eq!(
            decrypted_path(Path::new("album/photo.bin")),
            PathBuf::from("album/photo.bin.dec")
        );
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("photo.jpg");
        std::fs::write(&input, b"FAKE JPEG DATA 1234567890").unwrap();

        let codec = EnvelopeCodec::default();
        let secret = SharedSecret::from("12345678901234567890123456789012");

        handle_file_command(
            &codec,
            &secret,
            FileCommands::Encrypt {
                input: input.clone(),
                output: None,
            },
        )
        .unwrap();

        let encrypted = temp_dir.path().join("photo.jpg.enc");
        assert_eq!(std::fs::read(&encrypted).unwrap().len(), 25 + 96);

        let restored = temp_dir.path().join("restored.jpg");
        handle_file_command(
            &codec,
            &secret,
            FileCommands::Decrypt {
                input: encrypted,
                output: Some(restored.clone()),
            },
        )
        .unwrap();

        assert_eq!(std::fs::read(&restored).unwrap(), b"FAKE JPEG DATA 1234567890");
    }
}
