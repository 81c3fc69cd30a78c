//! `stockdeck-parties` — the Supplier entity and its editor draft.

pub mod supplier;

pub use supplier::{Supplier, SupplierDraft, SupplierPayload};
