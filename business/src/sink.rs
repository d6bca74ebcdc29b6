//! Where a freshly issued token goes.

use std::fmt::Debug;
use std::sync::Mutex;

use thiserror::Error;

/// Key the token is stored under.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
#[error("failed to store token: {0}")]
pub struct SinkError(pub String);

/// Write-only store for the session token handed out by the auth service.
pub trait CredentialSink: Send + Sync + Debug {
    fn store_token(&self, token: &str) -> Result<(), SinkError>;
}

/// Keeps the last token in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    token: Mutex<Option<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently stored token.
    pub fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl CredentialSink for MemorySink {
    fn store_token(&self, token: &str) -> Result<(), SinkError> {
        *self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_starts_empty() {
        assert_eq!(MemorySink::new().token(), None);
    }

    #[test]
    fn memory_sink_keeps_latest_token() {
        let sink = MemorySink::new();
        sink.store_token("t1").expect("memory store");
        sink.store_token("t2").expect("memory store");
        assert_eq!(sink.token().as_deref(), Some("t2"));
    }
}
