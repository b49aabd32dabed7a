//! Tracing/logging setup shared by hosts and test harnesses of the catalog domain.

/// Initialize process-wide tracing with the `info` fallback filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
