//! Session store: the single authoritative holder of the credential.

use stockdeck_core::ClientResult;

use crate::credential::Credential;
use crate::role::Role;
use crate::vault::{SessionVault, StoredSession};

/// What a credential change meant.
///
/// The dashboard reacts to these instead of watching the store: `SignedIn`
/// triggers the initial bulk reload, `SignedOut` clears dependent caches.
/// This is the explicit replacement for the browser build's reactive
/// "re-fetch when the token changes" effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTransition {
    /// Logged out → logged in.
    SignedIn,
    /// Logged in → logged out.
    SignedOut,
    /// Logged in → logged in with a different credential.
    Renewed,
    /// No observable change (e.g. clearing an already-empty session).
    Noop,
}

/// Holds the current [`Credential`] and mirrors every change into the vault
/// before returning, so a restart mid-session never loses the token.
pub struct SessionStore<V> {
    credential: Option<Credential>,
    vault: V,
}

impl<V: SessionVault> SessionStore<V> {
    /// Restore from the vault. Absence of a stored token means logged out.
    pub fn restore(vault: V) -> Self {
        let credential = vault.load().and_then(StoredSession::into_credential);
        if let Some(cred) = &credential {
            tracing::info!(username = cred.username(), "restored persisted session");
        }
        Self { credential, vault }
    }

    /// Start logged out regardless of what the vault holds.
    pub fn empty(vault: V) -> Self {
        Self {
            credential: None,
            vault,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.credential.as_ref().map(Credential::token)
    }

    pub fn username(&self) -> Option<&str> {
        self.credential.as_ref().map(Credential::username)
    }

    /// Role of the signed-in user; `User` when logged out (nothing is
    /// permitted anyway without a token).
    pub fn role(&self) -> Role {
        self.credential
            .as_ref()
            .map(Credential::role)
            .unwrap_or_default()
    }

    /// Replace the credential. Persists before returning.
    pub fn set_credential(&mut self, credential: Credential) -> ClientResult<SessionTransition> {
        let transition = if self.credential.is_some() {
            SessionTransition::Renewed
        } else {
            SessionTransition::SignedIn
        };

        self.vault.store(&StoredSession::from(&credential))?;
        self.credential = Some(credential);
        Ok(transition)
    }

    /// Drop the credential and remove it from the vault.
    pub fn clear(&mut self) -> ClientResult<SessionTransition> {
        self.vault.clear()?;
        let transition = if self.credential.take().is_some() {
            SessionTransition::SignedOut
        } else {
            SessionTransition::Noop
        };
        Ok(transition)
    }
}
