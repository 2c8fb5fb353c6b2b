//! API key loading and verification.
//!
//! The shared secret lives in a plaintext file on disk. It is read once at
//! startup, held in memory behind an [`ArcSwap`], and compared in constant
//! time. [`ApiKeyProvider::reload`] re-reads the file (the server wires this
//! to SIGHUP); a failed reload keeps the previous key active.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors that can occur while loading the key file.
#[derive(Debug, Error)]
pub enum ApiKeyError {
    /// The key file could not be read.
    #[error("failed to read API key file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The key file exists but holds no key.
    #[error("API key file {path} is empty")]
    Empty { path: PathBuf },
}

/// Cached API key with explicit reload support.
pub struct ApiKeyProvider {
    path: PathBuf,
    key: ArcSwap<SecretString>,
}

impl ApiKeyProvider {
    /// Load the key from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ApiKeyError` if the file cannot be read or is empty.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ApiKeyError> {
        let path = path.into();
        let key = read_key(&path)?;
        Ok(Self {
            path,
            key: ArcSwap::from_pointee(key),
        })
    }

    /// Re-read the key file, replacing the cached key.
    ///
    /// The previous key stays active until the new one has been read
    /// successfully.
    ///
    /// # Errors
    ///
    /// Returns `ApiKeyError` if the file cannot be read or is empty.
    pub fn reload(&self) -> Result<(), ApiKeyError> {
        let key = read_key(&self.path)?;
        self.key.store(Arc::new(key));
        Ok(())
    }

    /// Check a request-supplied key against the cached secret.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        let key = self.key.load();
        constant_time_eq(key.expose_secret().as_bytes(), candidate.as_bytes())
    }
}

/// Read and trim the key file, rejecting empty keys.
fn read_key(path: &Path) -> Result<SecretString, ApiKeyError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ApiKeyError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiKeyError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(SecretString::from(trimmed.to_owned()))
}

/// Compare two byte strings without short-circuiting on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}
