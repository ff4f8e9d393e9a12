//! Cleaning transform for raw transaction batches
//!
//! This module converts a raw, possibly malformed batch into the canonical
//! clean batch consumed by the quality checker and the KPI aggregator.
//!
//! # Processing Pipeline
//!
//! The transform applies seven steps, in a fixed order:
//!
//! 1. Parse `tx_timestamp`; rows that fail to parse are dropped
//! 2. Coerce `amount` to numeric; unparseable values become 0.0
//! 3. Normalize `channel` into its closed domain (fallback WEB)
//! 4. Normalize `status` into its closed domain (fallback DECLINED)
//! 5. Fill missing `country` with the configured default
//! 6. Filter rows to the configured amount bounds
//! 7. Deduplicate by `tx_id`, first occurrence wins
//!
//! # Repair Philosophy
//!
//! Malformed input never raises: every bad value is either repaired to a
//! deterministic default or its row is dropped, so the transform is total and
//! re-running it over its own output is a no-op.

pub mod stats;
pub mod transform;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use stats::{CleaningResult, CleaningStats};
pub use transform::clean;
