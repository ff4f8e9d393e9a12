//! Tests for the cleaning transform
//!
//! Covers the ordered repair steps, the post-clean invariants, idempotence,
//! and the statistics counters.

pub mod stats_tests;

// Test helper functions and fixtures
use crate::app::models::RawRecord;

/// Create a raw record with every field populated and well-formed
pub fn well_formed_record(tx_id: &str, amount: &str, status: &str) -> RawRecord {
    RawRecord {
        tx_id: Some(tx_id.to_string()),
        merchant_id: Some("M001".to_string()),
        channel: Some("WEB".to_string()),
        country: Some("CO".to_string()),
        amount: Some(amount.to_string()),
        status: Some(status.to_string()),
        tx_timestamp: Some("2025-01-01T10:00:00".to_string()),
    }
}

/// Create a raw record with the given field overridden to `None`
pub fn record_missing(tx_id: &str, field: &str) -> RawRecord {
    let mut record = well_formed_record(tx_id, "10.00", "APPROVED");
    match field {
        "merchant_id" => record.merchant_id = None,
        "channel" => record.channel = None,
        "country" => record.country = None,
        "amount" => record.amount = None,
        "status" => record.status = None,
        "tx_timestamp" => record.tx_timestamp = None,
        other => panic!("unknown field override: {}", other),
    }
    record
}
