//! `stockdeck-auth` — session identity for the dashboard client.
//!
//! Holds the bearer credential (token, display name, role), persists it
//! across restarts through a [`SessionVault`], and exposes the explicit
//! sign-in/sign-out transitions the rest of the client reacts to.

pub mod account;
pub mod credential;
pub mod role;
pub mod session;
pub mod vault;

pub use account::{Profile, UserAccount};
pub use credential::Credential;
pub use role::Role;
pub use session::{SessionStore, SessionTransition};
pub use vault::{FileVault, MemoryVault, SessionVault, StoredSession};
