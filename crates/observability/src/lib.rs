//! Tracing/logging setup for anything embedding the client.

/// Initialize process-wide tracing/logging.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    self::tracing::init();
}

/// Tracing configuration (filters, format).
pub mod tracing;
