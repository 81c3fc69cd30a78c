//! `stockdeck-dashboard` — derived view state.
//!
//! Pure functions over the current collections. Nothing here has its own
//! lifecycle: the overview recomputes from scratch on every render.

pub mod stats;

pub use stats::{filter_products, recent, DashboardStats};
