//! `stockdeck-sales` — the Order entity and its editor draft.

pub mod order;

pub use order::{Order, OrderDraft, OrderPayload, OrderStatus};
