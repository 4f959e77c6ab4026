//! Shared secret handling
//!
//! The pre-shared passphrase is treated as opaque bytes. The wrapper zeroes
//! its buffer on drop and never prints its contents.

use std::fmt;
use std::ops::Deref;

use zeroize::Zeroizing;

/// A pre-shared secret that zeros its contents on drop
pub struct SharedSecret {
    inner: Zeroizing<Vec<u8>>,
}

impl SharedSecret {
    /// Create a new SharedSecret from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: Zeroizing::new(bytes.into()),
        }
    }

    /// Build a secret from the contents of a secret file.
    ///
    /// Trailing line endings are dropped so files written by editors or
    /// `echo` work unchanged.
    pub fn from_file_contents(mut bytes: Vec<u8>) -> Self {
        while matches!(bytes.last(), Some(b'\n') | Some(b'\r')) {
            bytes.pop();
        }
        Self::new(bytes)
    }

    /// Get the secret bytes
    pub fn expose(&self) -> &[u8] {
        &self.inner
    }

    /// Get the length
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Deref for SharedSecret {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for SharedSecret {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for SharedSecret {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl From<String> for SharedSecret {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl From<&str> for SharedSecret {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes().to_vec())
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret")
            .field("len", &self.inner.len())
            .finish()
    }
}

// Don't print the contents in Display output
impl fmt::Display for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_from_str() {
        let s: SharedSecret = "12345678901234567890123456789012".into();
        assert_eq!(s.len(), 32);
        assert_eq!(s.expose(), b"12345678901234567890123456789012");
    }

    #[test]
    fn test_secret_from_vec() {
        let s: SharedSecret = vec![1u8, 2, 3].into();
        assert_eq!(&*s, &[1, 2, 3]);
    }

    #[test]
    fn test_file_contents_trims_line_endings() {
        let s = SharedSecret::from_file_contents(b"passphrase\r\n".to_vec());
        assert_eq!(s.expose(), b"passphrase");

        let s = SharedSecret::from_file_contents(b"pass phrase \n\n".to_vec());
        assert_eq!(s.expose(), b"pass phrase ");
    }

    #[test]
    fn test_secret_debug_redacted() {
        let s = SharedSecret::from("hunter2");
        let debug = format!("{:?}", s);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("SharedSecret"));
        assert!(debug.contains('7'));
    }

    #[test]
    fn test_secret_display_redacted() {
        let s = SharedSecret::from("hunter2");
        let display = format!("{}", s);
        assert!(!display.contains("hunter2"));
        assert!(display.contains("REDACTED"));
    }

    #[test]
    fn test_empty_secret() {
        let s = SharedSecret::new(Vec::new());
        assert!(s.is_empty());
    }
}
