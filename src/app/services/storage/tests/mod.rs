//! Tests for storage collaborators

pub mod report_writer_tests;
pub mod store_tests;

// Test helper functions and fixtures
use crate::app::models::{Channel, Transaction, TxStatus, parse_timestamp};

/// Three-row clean batch fixture
pub fn sample_batch() -> Vec<Transaction> {
    vec![
        Transaction {
            tx_id: "T1".to_string(),
            merchant_id: "M001".to_string(),
            channel: Channel::Web,
            country: "CO".to_string(),
            amount: 100.0,
            status: TxStatus::Approved,
            tx_timestamp: parse_timestamp("2025-01-01T10:00:00").unwrap(),
        },
        Transaction {
            tx_id: "T2".to_string(),
            merchant_id: "M002".to_string(),
            channel: Channel::App,
            country: "MX".to_string(),
            amount: 55.5,
            status: TxStatus::Declined,
            tx_timestamp: parse_timestamp("2025-01-01T11:30:00").unwrap(),
        },
        Transaction {
            tx_id: "T3".to_string(),
            merchant_id: "M001".to_string(),
            channel: Channel::Pos,
            country: "CL".to_string(),
            amount: 10.25,
            status: TxStatus::Chargeback,
            tx_timestamp: parse_timestamp("2025-01-02T09:15:00").unwrap(),
        },
    ]
}
