//! Configuration display formatting

use crate::config::{Settings, VaultPaths};

/// Format resolved paths and settings for the `config` command
pub fn format_config(paths: &VaultPaths, settings: &Settings) -> String {
    let secret_file = settings
        .secret
        .file
        .clone()
        .unwrap_or_else(|| paths.secret_file());

    let mut output = format_paths(paths);
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str("  Key derivation:  PBKDF2-HMAC-SHA512\n");
    output.push_str(&format!("  Iterations:      {}\n", settings.kdf.iterations));
    output.push_str(&format!("  Secret env var:  {}\n", settings.secret.env_var));
    output.push_str(&format!("  Secret file:     {}\n", secret_file.display()));
    output.push_str(&format!("  Log level:       {}\n", settings.log_level));
    output
}

/// Format the path section alone, for when settings can't be loaded
pub fn format_paths(paths: &VaultPaths) -> String {
    let mut output = String::new();
    output.push_str("vault-envelope Configuration\n");
    output.push_str("============================\n");
    output.push_str(&format!("Base directory:   {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:    {}\n", paths.settings_file().display()));
    output.push_str(&format!(
        "Initialized:      {}\n",
        if paths.is_initialized() { "yes" } else { "no" }
    ));
    output
}
