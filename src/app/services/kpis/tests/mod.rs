//! Tests for KPI aggregation and report export


// Test helper functions and fixtures
use crate::app::models::{Channel, Transaction, TxStatus, parse_timestamp};

/// Create a transaction with the fields the aggregator cares about
pub fn make_tx(
    tx_id: &str,
    merchant_id: &str,
    channel: Channel,
    country: &str,
    amount: f64,
    status: TxStatus,
    timestamp: &str,
) -> Transaction {
    Transaction {
        tx_id: tx_id.to_string(),
        merchant_id: merchant_id.to_string(),
        channel,
        country: country.to_string(),
        amount,
        status,
        tx_timestamp: parse_timestamp(timestamp).expect("fixture timestamp parses"),
    }
}

/// Five-row fixture batch spanning two dates and all four statuses
pub fn mini_batch() -> Vec<Transaction> {
    vec![
        make_tx("T1", "M001", Channel::Web, "CO", 100.0, TxStatus::Approved, "2025-01-01T10:00:00"),
        make_tx("T2", "M001", Channel::App, "CO", 50.0, TxStatus::Declined, "2025-01-01T11:00:00"),
        make_tx("T3", "M002", Channel::Web, "MX", 75.0, TxStatus::Approved, "2025-01-01T12:00:00"),
        make_tx("T4", "M002", Channel::Pos, "CO", 25.0, TxStatus::Refunded, "2025-01-02T13:00:00"),
        make_tx("T5", "M003", Channel::App, "CL", 10.0, TxStatus::Chargeback, "2025-01-02T14:00:00"),
    ]
}
