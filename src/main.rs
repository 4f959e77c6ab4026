use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use vault_envelope::cli::{
    handle_file_command, handle_inspect_command, handle_text_command, FileCommands, TextCommands,
};
use vault_envelope::config::{Settings, VaultPaths};
use vault_envelope::display::{format_config, format_paths};
use vault_envelope::error::{CodecError, Direction};
use vault_envelope::{logging, EnvelopeCodec};

#[derive(Parser)]
#[command(
    name = "vault-envelope",
    version,
    about = "Encrypt and decrypt photo vault payloads",
    long_about = "vault-envelope seals files and text fields into authenticated \
                  envelopes (AES-256-GCM, PBKDF2-HMAC-SHA512) before they leave \
                  the client, and opens them again on read."
)]
struct Cli {
    /// Read the shared secret from this file
    #[arg(long, global = true)]
    secret_file: Option<PathBuf>,

    /// Prompt for the shared secret if none is configured
    #[arg(long, global = true)]
    prompt: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt or decrypt files
    #[command(subcommand)]
    File(FileCommands),

    /// Encrypt or decrypt text fields
    #[command(subcommand)]
    Text(TextCommands),

    /// Show an envelope's layout without decrypting it
    Inspect {
        /// Envelope file
        input: PathBuf,

        /// The file holds a base64 transport value
        #[arg(long)]
        base64: bool,
    },

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = VaultPaths::new()?;
    let loaded = Settings::load_or_create(&paths);

    let level = if cli.verbose {
        "debug"
    } else {
        loaded
            .as_ref()
            .map(|settings| settings.log_level.as_str())
            .unwrap_or(logging::DEFAULT_LEVEL)
    };
    if let Err(e) = logging::init(level) {
        eprintln!("Warning: {}; using '{}'", e, logging::DEFAULT_LEVEL);
        logging::init(logging::DEFAULT_LEVEL)?;
    }

    match cli.command {
        Some(Commands::File(cmd)) => {
            let settings = loaded?;
            let codec = EnvelopeCodec::new(settings.kdf)?;
            let direction = direction_of(cmd.is_encrypt());
            let secret = settings.resolve_secret(&paths, cli.secret_file.as_deref(), cli.prompt)?;
            handle_file_command(&codec, &secret, cmd).map_err(|e| user_facing(e, direction))?;
        }
        Some(Commands::Text(cmd)) => {
            let settings = loaded?;
            let codec = EnvelopeCodec::new(settings.kdf)?;
            let direction = direction_of(cmd.is_encrypt());
            let secret = settings.resolve_secret(&paths, cli.secret_file.as_deref(), cli.prompt)?;
            handle_text_command(&codec, &secret, cmd).map_err(|e| user_facing(e, direction))?;
        }
        Some(Commands::Inspect { input, base64 }) => {
            handle_inspect_command(&input, base64)?;
        }
        Some(Commands::Init) => {
            let settings = match loaded {
                Ok(settings) => settings,
                Err(e) => {
                    println!("Replacing unreadable settings: {}", e);
                    Settings::default()
                }
            };
            println!("Initializing vault-envelope at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
            println!();
            println!(
                "Provide the shared secret via ${} or {}.",
                settings.secret.env_var,
                paths.secret_file().display()
            );
        }
        Some(Commands::Config) => match loaded {
            Ok(settings) => print!("{}", format_config(&paths, &settings)),
            Err(e) => {
                print!("{}", format_paths(&paths));
                println!();
                println!("Settings could not be loaded: {}", e);
                println!("Run 'vault-envelope init' to restore defaults.");
            }
        },
        None => {
            println!("vault-envelope - envelope encryption for photo vault payloads");
            println!();
            println!("Run 'vault-envelope --help' for usage information.");
        }
    }

    Ok(())
}

fn direction_of(is_encrypt: bool) -> Direction {
    if is_encrypt {
        Direction::Save
    } else {
        Direction::Read
    }
}

/// Replace codec detail with a user-facing message, keeping it in the log
fn user_facing(err: CodecError, direction: Direction) -> anyhow::Error {
    tracing::debug!(error = %err, "operation failed");
    anyhow::anyhow!(err.user_message(direction))
}
