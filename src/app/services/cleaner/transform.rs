//! Cleaning transform implementation
//!
//! Applies the ordered repair, filter, and deduplication steps that take a raw
//! transaction batch to the canonical clean batch. The step order matters:
//! amount coercion happens before the range filter, and deduplication runs
//! last so the first surviving occurrence of each `tx_id` wins.

use crate::app::models::{
    Channel, RawRecord, Transaction, TxStatus, normalize_country, parse_timestamp,
};
use crate::config::CleaningConfig;
use std::collections::HashSet;
use tracing::{debug, info};

use super::stats::{CleaningResult, CleaningStats};

/// Clean a raw transaction batch
///
/// Every malformed value is resolved by repair or by dropping its row; the
/// transform never fails. Output row order is first-seen input order.
///
/// # Arguments
///
/// * `records` - Raw input batch
/// * `config` - Cleaning bounds and defaults
///
/// # Returns
///
/// A [`CleaningResult`] with the clean batch and per-step statistics
pub fn clean(records: Vec<RawRecord>, config: &CleaningConfig) -> CleaningResult {
    let mut stats = CleaningStats::new();
    stats.total_input = records.len();

    // Steps 1-5: per-row parsing, coercion, and domain normalization
    let mut repaired = Vec::with_capacity(records.len());
    for record in records {
        match repair_record(record, config, &mut stats) {
            Some(transaction) => repaired.push(transaction),
            None => continue,
        }
    }

    // Step 6: amount range filter
    let before_filter = repaired.len();
    repaired.retain(|tx| tx.amount >= config.amount_min && tx.amount <= config.amount_max);
    stats.dropped_amount_range = before_filter - repaired.len();

    // Step 7: deduplicate by tx_id, first occurrence wins
    let before_dedup = repaired.len();
    let mut seen_ids = HashSet::with_capacity(repaired.len());
    repaired.retain(|tx| seen_ids.insert(tx.tx_id.clone()));
    stats.dropped_duplicates = before_dedup - repaired.len();

    stats.final_output = repaired.len();

    info!("{}", stats.summary());

    CleaningResult::new(repaired, stats)
}

/// Repair a single raw record, or drop it when the timestamp is unusable
fn repair_record(
    record: RawRecord,
    config: &CleaningConfig,
    stats: &mut CleaningStats,
) -> Option<Transaction> {
    // Step 1: the timestamp is the only field whose failure drops the row
    let tx_timestamp = match record.tx_timestamp.as_deref().and_then(parse_timestamp) {
        Some(timestamp) => timestamp,
        None => {
            stats.dropped_bad_timestamp += 1;
            debug!(
                "Dropping record {:?}: unparseable timestamp {:?}",
                record.tx_id, record.tx_timestamp
            );
            return None;
        }
    };

    // Step 2: unparseable amounts become 0.0 instead of dropping the row
    let amount = match parse_amount(record.amount.as_deref()) {
        Some(value) => value,
        None => {
            stats.coerced_amounts += 1;
            debug!(
                "Coercing amount {:?} to 0.0 for record {:?}",
                record.amount, record.tx_id
            );
            0.0
        }
    };

    // Step 3: channel falls back to WEB outside its domain
    let channel = match canonical_symbol(record.channel.as_deref())
        .as_deref()
        .and_then(Channel::from_symbol)
    {
        Some(channel) => channel,
        None => {
            stats.coerced_channels += 1;
            Channel::Web
        }
    };

    // Step 4: status falls back to DECLINED outside its domain
    let status = match canonical_symbol(record.status.as_deref())
        .as_deref()
        .and_then(TxStatus::from_symbol)
    {
        Some(status) => status,
        None => {
            stats.coerced_statuses += 1;
            TxStatus::Declined
        }
    };

    // Step 5: country is never left empty
    let country_missing = record
        .country
        .as_deref()
        .map(|c| c.trim().is_empty())
        .unwrap_or(true);
    if country_missing {
        stats.defaulted_countries += 1;
    }
    let country = normalize_country(record.country.as_deref(), &config.default_country);

    Some(Transaction {
        tx_id: record.tx_id.unwrap_or_default(),
        merchant_id: record.merchant_id.unwrap_or_default(),
        channel,
        country,
        amount,
        status,
        tx_timestamp,
    })
}

/// Parse an amount field into a finite number
fn parse_amount(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Uppercase a raw domain symbol for strict matching
fn canonical_symbol(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_uppercase())
}
