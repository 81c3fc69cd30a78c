//! `stockdeck-products` — the Product entity and its editor draft.

pub mod draft;
pub mod product;

pub use draft::{ProductDraft, ProductPayload};
pub use product::{Product, SupplierRef};
