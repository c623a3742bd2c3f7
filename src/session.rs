//! Persistent session blobs, one per audience.
//!
//! The stored value is always the full JSON snapshot of the authenticated
//! record as last returned by the backend. Every successful login or
//! mutation overwrites it wholesale (last-write-wins, no merge); sessions
//! never expire on their own.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Customer,
    Admin,
}

impl Audience {
    fn file_name(self) -> &'static str {
        match self {
            Audience::Customer => "customer_session.json",
            Audience::Admin => "admin_session.json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl AsRef<Path>, audience: Audience) -> Self {
        Self {
            path: dir.as_ref().join(audience.file_name()),
        }
    }

    pub fn save<T: Serialize>(&self, record: &T) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Load the stored record, if any. A blob that no longer parses is
    /// treated as absent, not as a hard failure.
    pub fn load<T: DeserializeOwned>(&self) -> AppResult<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&json) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                tracing::warn!(error = %err, path = %self.path.display(), "discarding unreadable session blob");
                Ok(None)
            }
        }
    }

    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
