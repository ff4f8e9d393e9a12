//! Cleaning statistics and result structures
//!
//! Tracks how many rows each cleaning step repaired or dropped, so a pipeline
//! run can be audited without inspecting the output batch.

use crate::app::models::Transaction;

/// Statistics for one cleaning transform run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleaningStats {
    /// Total number of raw input records
    pub total_input: usize,
    /// Rows dropped because the timestamp failed to parse
    pub dropped_bad_timestamp: usize,
    /// Amounts coerced to 0.0 because they were missing or unparseable
    pub coerced_amounts: usize,
    /// Channels replaced with the WEB fallback
    pub coerced_channels: usize,
    /// Statuses replaced with the DECLINED fallback
    pub coerced_statuses: usize,
    /// Countries filled with the configured default
    pub defaulted_countries: usize,
    /// Rows dropped by the amount range filter
    pub dropped_amount_range: usize,
    /// Later duplicate rows dropped by tx_id deduplication
    pub dropped_duplicates: usize,
    /// Final number of clean output rows
    pub final_output: usize,
}

impl CleaningStats {
    /// Create new empty cleaning statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of dropped rows across all steps
    pub fn dropped_total(&self) -> usize {
        self.dropped_bad_timestamp + self.dropped_amount_range + self.dropped_duplicates
    }

    /// Total number of repaired values across all steps
    pub fn repaired_total(&self) -> usize {
        self.coerced_amounts
            + self.coerced_channels
            + self.coerced_statuses
            + self.defaulted_countries
    }

    /// Fraction of input rows that survived cleaning, as a percentage
    pub fn retention_rate(&self) -> f64 {
        if self.total_input == 0 {
            100.0
        } else {
            (self.final_output as f64 / self.total_input as f64) * 100.0
        }
    }

    /// Get summary of the cleaning run
    pub fn summary(&self) -> String {
        format!(
            "Cleaning Summary: {} -> {} rows ({:.1}% retained) | \
             dropped: {} bad timestamp, {} amount range, {} duplicate | \
             repaired: {} amount, {} channel, {} status, {} country",
            self.total_input,
            self.final_output,
            self.retention_rate(),
            self.dropped_bad_timestamp,
            self.dropped_amount_range,
            self.dropped_duplicates,
            self.coerced_amounts,
            self.coerced_channels,
            self.coerced_statuses,
            self.defaulted_countries
        )
    }
}

/// Result of a cleaning transform run
#[derive(Debug, Clone)]
pub struct CleaningResult {
    /// Clean transactions, in first-seen input order
    pub transactions: Vec<Transaction>,
    /// Per-step repair and drop counters
    pub stats: CleaningStats,
}

impl CleaningResult {
    /// Create a new cleaning result
    pub fn new(transactions: Vec<Transaction>, stats: CleaningStats) -> Self {
        Self {
            transactions,
            stats,
        }
    }

    /// Number of clean rows produced
    pub fn row_count(&self) -> usize {
        self.transactions.len()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
