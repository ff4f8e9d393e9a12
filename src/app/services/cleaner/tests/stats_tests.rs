//! Tests for cleaning statistics

use crate::app::services::cleaner::stats::CleaningStats;

#[test]
fn new_stats_are_zeroed() {
    let stats = CleaningStats::new();
    assert_eq!(stats.total_input, 0);
    assert_eq!(stats.dropped_total(), 0);
    assert_eq!(stats.repaired_total(), 0);
}

#[test]
fn retention_rate_of_empty_input_is_total() {
    let stats = CleaningStats::new();
    assert_eq!(stats.retention_rate(), 100.0);
}

#[test]
fn retention_rate_reflects_drops() {
    let stats = CleaningStats {
        total_input: 10,
        dropped_bad_timestamp: 2,
        dropped_amount_range: 2,
        dropped_duplicates: 1,
        final_output: 5,
        ..CleaningStats::new()
    };
    assert_eq!(stats.retention_rate(), 50.0);
    assert_eq!(stats.dropped_total(), 5);
}

#[test]
fn summary_mentions_all_counters() {
    let stats = CleaningStats {
        total_input: 4,
        coerced_amounts: 1,
        coerced_channels: 1,
        coerced_statuses: 1,
        defaulted_countries: 1,
        final_output: 4,
        ..CleaningStats::new()
    };
    let summary = stats.summary();
    assert!(summary.contains("4 -> 4 rows"));
    assert!(summary.contains("1 amount"));
    assert!(summary.contains("1 channel"));
    assert!(summary.contains("1 status"));
    assert!(summary.contains("1 country"));
}
