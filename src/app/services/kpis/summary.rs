//! KPI summary structures and grouping dimensions

use crate::app::models::Transaction;
use chrono::NaiveDate;
use serde::Serialize;

/// Overall KPI summary over a whole batch
///
/// Field order matches the exported report column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallKpis {
    pub total_tx: u64,
    pub approved_tx: u64,
    pub declined_tx: u64,
    pub refunded_tx: u64,
    pub chargeback_tx: u64,
    pub approval_rate: f64,
    pub decline_rate: f64,
    pub refund_rate: f64,
    pub chargeback_rate: f64,
    pub total_amount: f64,
    pub avg_ticket: f64,
    pub median_ticket: f64,
}

/// Grouping dimensions supported by the aggregator
///
/// The aggregator is generic over any tuple of these; the reporting
/// orchestration uses the five fixed tuples in [`super::REPORT_GROUPINGS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Date,
    Channel,
    Country,
    Merchant,
    Hour,
}

impl Dimension {
    /// Column name of this dimension in exported reports
    pub fn column_name(&self) -> &'static str {
        match self {
            Dimension::Date => "date",
            Dimension::Channel => "channel",
            Dimension::Country => "country",
            Dimension::Merchant => "merchant_id",
            Dimension::Hour => "hour",
        }
    }

    /// Extract this dimension's grouping key from a transaction
    pub fn key_of(&self, tx: &Transaction) -> KeyValue {
        match self {
            Dimension::Date => KeyValue::Date(tx.date()),
            Dimension::Channel => KeyValue::Text(tx.channel.to_string()),
            Dimension::Country => KeyValue::Text(tx.country.clone()),
            Dimension::Merchant => KeyValue::Text(tx.merchant_id.clone()),
            Dimension::Hour => KeyValue::Hour(tx.hour()),
        }
    }
}

/// One component of a grouping key
///
/// Typed so that dates and hours order chronologically and numerically in the
/// exported reports instead of lexically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyValue {
    Date(NaiveDate),
    Hour(u32),
    Text(String),
}

impl std::fmt::Display for KeyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyValue::Date(date) => write!(f, "{}", date),
            KeyValue::Hour(hour) => write!(f, "{}", hour),
            KeyValue::Text(text) => f.write_str(text),
        }
    }
}

/// KPI summary for one group of a grouped aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct GroupKpis {
    /// Grouping key, one entry per dimension
    pub key: Vec<KeyValue>,
    pub total_tx: u64,
    pub total_amount: f64,
    pub approved_tx: u64,
    pub declined_tx: u64,
    pub refunded_tx: u64,
    pub chargeback_tx: u64,
    pub avg_ticket: f64,
    pub approval_rate: f64,
    pub decline_rate: f64,
    pub refund_rate: f64,
    pub chargeback_rate: f64,
}

/// Result of a grouped aggregation, ordered by grouping key
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedKpis {
    /// Dimensions the batch was grouped by, in key order
    pub dimensions: Vec<Dimension>,
    /// One summary per distinct key, ascending key order
    pub groups: Vec<GroupKpis>,
}

impl GroupedKpis {
    /// Sum of group totals; equals the batch row count for any grouping
    pub fn total_rows(&self) -> u64 {
        self.groups.iter().map(|g| g.total_tx).sum()
    }

    /// Number of distinct groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Exported column names: dimension columns followed by metric columns
    pub fn column_names(&self) -> Vec<String> {
        let mut columns: Vec<String> = self
            .dimensions
            .iter()
            .map(|d| d.column_name().to_string())
            .collect();
        columns.extend(
            [
                "total_tx",
                "total_amount",
                "approved_tx",
                "declined_tx",
                "refunded_tx",
                "chargeback_tx",
                "avg_ticket",
                "approval_rate",
                "decline_rate",
                "refund_rate",
                "chargeback_rate",
            ]
            .map(String::from),
        );
        columns
    }
}
