//! In-memory authoritative store and index helpers.

/// Helper index aliases.
pub mod indices;
/// Authoritative event store with date-conflict enforcement.
pub mod store;
