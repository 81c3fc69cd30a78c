//! `stockdeck-core` — shared client foundation building blocks.
//!
//! This crate contains the primitives every other crate leans on: the
//! server-assigned entity id, the client-side error taxonomy, form-field
//! coercion, and API endpoint configuration. No HTTP, no I/O.

pub mod coerce;
pub mod config;
pub mod entity;
pub mod error;
pub mod id;

pub use coerce::int_or_zero;
pub use config::ApiConfig;
pub use entity::Keyed;
pub use error::{ClientError, ClientResult};
pub use id::EntityId;
