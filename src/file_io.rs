//! File I/O utilities with atomic writes
//!
//! Envelopes and settings are written to a temp file in the target
//! directory and renamed into place, so a crash never leaves a half-written
//! envelope behind.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{CodecError, CodecResult};

/// Read a whole file
pub fn read_bytes<P: AsRef<Path>>(path: P) -> CodecResult<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| CodecError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write bytes to a file atomically (write to temp, then rename)
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> CodecResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CodecError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);

    let mut file = File::create(&temp_path)
        .map_err(|e| CodecError::Io(format!("Failed to create temp file: {}", e)))?;

    file.write_all(data)
        .map_err(|e| CodecError::Io(format!("Failed to write data: {}", e)))?;

    file.sync_all()
        .map_err(|e| CodecError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CodecError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Write JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> CodecResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json = serde_json::to_vec_pretty(data)
        .map_err(|e| CodecError::Json(format!("Failed to serialize data: {}", e)))?;
    write_bytes_atomic(path, &json)
}

/// `photo.jpg` -> `photo.jpg.tmp`, next to the target
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
