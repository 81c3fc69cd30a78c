//! Durable session storage.
//!
//! The browser build of this dashboard kept the token under fixed
//! localStorage keys; here the same three fields live in a small JSON file
//! under the OS data directory. The vault is a trait so the session store
//! can be tested without touching the filesystem.

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use stockdeck_core::{ClientError, ClientResult};

use crate::credential::Credential;
use crate::role::Role;

/// On-disk shape: the three fixed keys the session persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub username: String,
    pub role: String,
}

impl From<&Credential> for StoredSession {
    fn from(cred: &Credential) -> Self {
        Self {
            token: cred.token().to_string(),
            username: cred.username().to_string(),
            role: cred.role().as_str().to_string(),
        }
    }
}

impl StoredSession {
    /// Rebuild a credential. An empty token means logged out — the stored
    /// username/role are ignored in that case, and unknown role strings
    /// degrade to `User`.
    pub fn into_credential(self) -> Option<Credential> {
        if self.token.is_empty() {
            return None;
        }
        let role = Role::parse_or_default(&self.role);
        Some(Credential::new(self.token, self.username, role))
    }
}

/// Where a session survives restarts.
pub trait SessionVault {
    /// Read the stored session, if any. A missing or unreadable store is
    /// `None`, never an error: restore must not block startup.
    fn load(&self) -> Option<StoredSession>;

    /// Persist the session. Must complete before dependent fetches are
    /// issued, so a restart mid-session never loses the token.
    fn store(&mut self, session: &StoredSession) -> ClientResult<()>;

    /// Remove any stored session; idempotent.
    fn clear(&mut self) -> ClientResult<()>;
}

/// JSON-file vault under `{data_dir}/stockdeck/session.json`.
#[derive(Debug)]
pub struct FileVault {
    path: PathBuf,
}

impl FileVault {
    /// Vault at the default OS location.
    pub fn open_default() -> ClientResult<Self> {
        let path = session_path().map_err(|e| ClientError::storage(e.to_string()))?;
        Ok(Self { path })
    }

    /// Vault at an explicit path (tests, unusual deployments).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionVault for FileVault {
    fn load(&self) -> Option<StoredSession> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!("ignoring corrupt session file {:?}: {err}", self.path);
                None
            }
        }
    }

    fn store(&mut self, session: &StoredSession) -> ClientResult<()> {
        let write = || -> anyhow::Result<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create session directory {parent:?}"))?;
            }
            let payload = serde_json::to_string_pretty(session)
                .context("failed to serialize session")?;
            std::fs::write(&self.path, payload)
                .with_context(|| format!("failed to write session file {:?}", self.path))?;
            Ok(())
        };
        write().map_err(|e| ClientError::storage(format!("{e:#}")))
    }

    fn clear(&mut self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ClientError::storage(format!(
                "failed to remove session file {:?}: {err}",
                self.path
            ))),
        }
    }
}

/// In-memory vault for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryVault {
    session: Option<StoredSession>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded vault, as if a previous run had persisted a session.
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            session: Some(session),
        }
    }
}

impl SessionVault for MemoryVault {
    fn load(&self) -> Option<StoredSession> {
        self.session.clone()
    }

    fn store(&mut self, session: &StoredSession) -> ClientResult<()> {
        self.session = Some(session.clone());
        Ok(())
    }

    fn clear(&mut self) -> ClientResult<()> {
        self.session = None;
        Ok(())
    }
}

/// Resolve `{data_dir}/stockdeck/session.json`.
fn session_path() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory")?;

    let mut path = base;
    path.push("stockdeck");
    path.push("session.json");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("stockdeck-vault-{}-{name}.json", std::process::id()));
        path
    }

    #[test]
    fn file_vault_round_trips() {
        let mut vault = FileVault::at(scratch_path("round-trip"));
        let session = StoredSession {
            token: "abc".to_string(),
            username: "alice".to_string(),
            role: "Admin".to_string(),
        };

        vault.store(&session).unwrap();
        assert_eq!(vault.load(), Some(session));

        vault.clear().unwrap();
        assert_eq!(vault.load(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut vault = FileVault::at(scratch_path("clear-twice"));
        vault.clear().unwrap();
        vault.clear().unwrap();
    }

    #[test]
    fn empty_token_restores_as_logged_out() {
        let stored = StoredSession {
            token: String::new(),
            username: "ghost".to_string(),
            role: "Admin".to_string(),
        };
        assert_eq!(stored.into_credential(), None);
    }

    #[test]
    fn unknown_stored_role_degrades_to_user() {
        let stored = StoredSession {
            token: "t".to_string(),
            username: "bob".to_string(),
            role: "Wizard".to_string(),
        };
        let cred = stored.into_credential().unwrap();
        assert_eq!(cred.role(), Role::User);
    }
}
