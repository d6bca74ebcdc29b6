//! Token storage for the CLI: `~/.authwindow/token`, holding
//! `{"token": "..."}`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use authwindow_business::{CredentialSink, SinkError};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct TokenStore {
    token: String,
}

/// File-backed [`CredentialSink`].
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    /// `~/.authwindow/token`.
    pub fn default_path() -> Result<Self> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(Self::at(home.join(".authwindow").join("token")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<String>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read {}", self.path.display()));
            }
        };
        let store: TokenStore = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(Some(store.token))
    }

    /// Removes the file. Returns false if there was nothing to remove.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove {}", self.path.display()))
            }
        }
    }

    fn write(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string(&TokenStore {
            token: token.to_owned(),
        })?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

impl CredentialSink for TokenFile {
    fn store_token(&self, token: &str) -> Result<(), SinkError> {
        self.write(token).map_err(|e| SinkError(format!("{e:#}")))
    }
}
