//! On-disk copy of the signed-in identity.
//!
//! A process that exits still leaves the user signed in: the identity is
//! written as JSON next to the user config and read back on the next start,
//! until an explicit logout deletes it.

use std::fs;
use std::path::{Path, PathBuf};

use fin_core::Identity;

use crate::error::AuthError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored identity. Missing, empty, or unreadable files load as `None`.
    #[must_use]
    pub fn load(&self) -> Option<Identity> {
        let raw = fs::read_to_string(&self.path).ok()?;
        if raw.trim().is_empty() {
            return None;
        }
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "ignoring unreadable session file");
                None
            }
        }
    }

    /// Write `identity`, creating the parent directory. The file is private to the user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionPersistence` if the directory or file cannot be written.
    pub fn store(&self, identity: &Identity) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::SessionPersistence(format!("mkdir {}: {e}", parent.display()))
            })?;
        }

        let rendered = serde_json::to_string_pretty(identity)
            .map_err(|e| AuthError::SessionPersistence(format!("serialize session: {e}")))?;
        fs::write(&self.path, rendered).map_err(|e| {
            AuthError::SessionPersistence(format!("write {}: {e}", self.path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::SessionPersistence(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }

    /// Remove the stored identity. Deleting a missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionPersistence` if an existing file cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(AuthError::SessionPersistence(format!(
                "delete {}: {error}",
                self.path.display()
            ))),
        }
    }
}
