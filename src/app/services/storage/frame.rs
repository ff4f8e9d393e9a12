//! Conversion between typed transaction batches and DataFrames
//!
//! The clean batch is persisted and checked as a rectangular DataFrame with
//! the fixed column set of [`crate::constants::EXPECTED_COLUMNS`], in that
//! order. The typed side is the source of truth for the core transforms; the
//! DataFrame side is the storage and quality-check representation.

use crate::app::models::{Channel, Transaction, TxStatus, normalize_country};
use crate::constants::DEFAULT_COUNTRY;
use crate::{Error, Result};
use chrono::NaiveDateTime;
use polars::prelude::*;

/// Build the storage DataFrame for a clean transaction batch
pub fn records_to_frame(batch: &[Transaction]) -> Result<DataFrame> {
    let tx_ids: Vec<&str> = batch.iter().map(|tx| tx.tx_id.as_str()).collect();
    let merchant_ids: Vec<&str> = batch.iter().map(|tx| tx.merchant_id.as_str()).collect();
    let channels: Vec<&str> = batch.iter().map(|tx| tx.channel.as_str()).collect();
    let countries: Vec<&str> = batch.iter().map(|tx| tx.country.as_str()).collect();
    let amounts: Vec<f64> = batch.iter().map(|tx| tx.amount).collect();
    let statuses: Vec<&str> = batch.iter().map(|tx| tx.status.as_str()).collect();
    let timestamps: Vec<NaiveDateTime> = batch.iter().map(|tx| tx.tx_timestamp).collect();

    let df = df!(
        "tx_id" => tx_ids,
        "merchant_id" => merchant_ids,
        "channel" => channels,
        "country" => countries,
        "amount" => amounts,
        "status" => statuses,
        "tx_timestamp" => timestamps,
    )?;

    Ok(df)
}

/// Decode a stored DataFrame back into a typed transaction batch
///
/// Expects a cleaned dataset. String-domain columns decode through the total
/// normalization functions, so stray values fall back to their domain
/// defaults; a null amount or timestamp has no typed representation and is a
/// data validation error.
pub fn frame_to_records(df: &DataFrame) -> Result<Vec<Transaction>> {
    let tx_id_series = df.column("tx_id")?.as_materialized_series();
    let tx_ids = tx_id_series.str()?;
    let merchant_series = df.column("merchant_id")?.as_materialized_series();
    let merchants = merchant_series.str()?;
    let channel_series = df.column("channel")?.as_materialized_series();
    let channels = channel_series.str()?;
    let country_series = df.column("country")?.as_materialized_series();
    let countries = country_series.str()?;
    let status_series = df.column("status")?.as_materialized_series();
    let statuses = status_series.str()?;
    let amount_series = df
        .column("amount")?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let amounts = amount_series.f64()?;
    let ts_series = df.column("tx_timestamp")?.as_materialized_series();
    let timestamps: Vec<Option<NaiveDateTime>> = ts_series.datetime()?.as_datetime_iter().collect();

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let amount = amounts.get(row).ok_or_else(|| {
            Error::data_validation(format!("Row {} has a null amount", row))
        })?;
        let tx_timestamp = timestamps[row].ok_or_else(|| {
            Error::data_validation(format!("Row {} has a null timestamp", row))
        })?;

        records.push(Transaction {
            tx_id: tx_ids.get(row).unwrap_or_default().to_string(),
            merchant_id: merchants.get(row).unwrap_or_default().to_string(),
            channel: Channel::normalize(channels.get(row)),
            country: normalize_country(countries.get(row), DEFAULT_COUNTRY),
            amount,
            status: TxStatus::normalize(statuses.get(row)),
            tx_timestamp,
        });
    }

    Ok(records)
}
