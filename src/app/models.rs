//! Data models for BankOps processing
//!
//! This module contains the record structures for raw and clean transaction
//! batches, plus the closed value domains shared by the cleaning transform and
//! the quality checker.

use crate::constants::DEFAULT_COUNTRY;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

// =============================================================================
// Value Domains
// =============================================================================

/// Transaction channel domain
///
/// A closed enum: after cleaning, every record carries one of these values.
/// Unknown or missing raw values are coerced to the [`Channel::Web`] fallback
/// rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Channel {
    Web,
    App,
    Pos,
}

impl Channel {
    /// All channel values, in canonical order
    pub const ALL: [Channel; 3] = [Channel::Web, Channel::App, Channel::Pos];

    /// Canonical uppercase symbol for this channel
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Web => "WEB",
            Channel::App => "APP",
            Channel::Pos => "POS",
        }
    }

    /// Strict parse of a canonical uppercase symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "WEB" => Some(Channel::Web),
            "APP" => Some(Channel::App),
            "POS" => Some(Channel::Pos),
            _ => None,
        }
    }

    /// Total normalization: uppercase, then fall back to WEB for anything
    /// outside the allowed set (including missing values)
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(|value| Self::from_symbol(value.trim().to_uppercase().as_str()))
            .unwrap_or(Channel::Web)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction status domain
///
/// Unknown or missing raw values are coerced to [`TxStatus::Declined`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TxStatus {
    Approved,
    Declined,
    Refunded,
    Chargeback,
}

impl TxStatus {
    /// All status values, in canonical order
    pub const ALL: [TxStatus; 4] = [
        TxStatus::Approved,
        TxStatus::Declined,
        TxStatus::Refunded,
        TxStatus::Chargeback,
    ];

    /// Canonical uppercase symbol for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Approved => "APPROVED",
            TxStatus::Declined => "DECLINED",
            TxStatus::Refunded => "REFUNDED",
            TxStatus::Chargeback => "CHARGEBACK",
        }
    }

    /// Strict parse of a canonical uppercase symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "APPROVED" => Some(TxStatus::Approved),
            "DECLINED" => Some(TxStatus::Declined),
            "REFUNDED" => Some(TxStatus::Refunded),
            "CHARGEBACK" => Some(TxStatus::Chargeback),
            _ => None,
        }
    }

    /// Total normalization: uppercase, then fall back to DECLINED for anything
    /// outside the allowed set (including missing values)
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(|value| Self::from_symbol(value.trim().to_uppercase().as_str()))
            .unwrap_or(TxStatus::Declined)
    }
}

impl std::fmt::Display for TxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Record Structures
// =============================================================================

/// Raw transaction record as ingested from a delimited-text source
///
/// No invariants hold here: every field may be absent, malformed, or outside
/// its domain. The cleaning transform establishes the invariants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub tx_id: Option<String>,
    pub merchant_id: Option<String>,
    pub channel: Option<String>,
    pub country: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
    pub tx_timestamp: Option<String>,
}

/// Clean transaction record
///
/// Produced once per pipeline run by the cleaning transform and immutable
/// thereafter. Invariants: parsed timestamp, amount within the cleaning
/// bounds, channel and status inside their closed domains, non-empty country,
/// batch-unique `tx_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub tx_id: String,
    pub merchant_id: String,
    pub channel: Channel,
    pub country: String,
    pub amount: f64,
    pub status: TxStatus,
    pub tx_timestamp: NaiveDateTime,
}

impl Transaction {
    /// Calendar date of the transaction, for date-keyed grouping
    pub fn date(&self) -> NaiveDate {
        self.tx_timestamp.date()
    }

    /// Hour of day (0-23), for intraday grouping
    pub fn hour(&self) -> u32 {
        self.tx_timestamp.hour()
    }
}

// =============================================================================
// Field Parsing
// =============================================================================

/// Timestamp formats accepted from raw input, tried in order
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Lenient timestamp parse over the accepted ISO-8601 variants
///
/// Bare dates resolve to midnight. Returns `None` for anything else; the
/// cleaning transform drops such rows rather than erroring.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Resolve a possibly-missing country to a non-empty value
pub fn normalize_country(raw: Option<&str>, default_country: &str) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => {
            if default_country.is_empty() {
                DEFAULT_COUNTRY.to_string()
            } else {
                default_country.to_string()
            }
        }
    }
}
