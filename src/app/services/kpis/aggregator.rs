//! Single-pass KPI aggregation
//!
//! Both the overall and the grouped aggregation iterate the batch exactly
//! once, folding each row into an accumulator, then finalize counts into
//! rates. Grouped accumulators live in a `BTreeMap` keyed by the grouping
//! tuple, which gives the exported reports a stable ascending key order.

use crate::app::models::{Transaction, TxStatus};
use std::collections::BTreeMap;
use tracing::debug;

use super::summary::{Dimension, GroupKpis, GroupedKpis, KeyValue, OverallKpis};

/// Ratio of a status count to a total, defined as 0.0 when the total is zero
pub fn rate(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Per-group fold state
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    total: u64,
    amount_sum: f64,
    approved: u64,
    declined: u64,
    refunded: u64,
    chargeback: u64,
}

impl Accumulator {
    fn fold(&mut self, tx: &Transaction) {
        self.total += 1;
        self.amount_sum += tx.amount;
        match tx.status {
            TxStatus::Approved => self.approved += 1,
            TxStatus::Declined => self.declined += 1,
            TxStatus::Refunded => self.refunded += 1,
            TxStatus::Chargeback => self.chargeback += 1,
        }
    }
}

/// Compute the overall KPI summary for a batch
///
/// Rates and the mean/median ticket are 0.0 for an empty batch; no division
/// errors are possible.
pub fn kpis_overall(batch: &[Transaction]) -> OverallKpis {
    let mut acc = Accumulator::default();
    for tx in batch {
        acc.fold(tx);
    }

    OverallKpis {
        total_tx: acc.total,
        approved_tx: acc.approved,
        declined_tx: acc.declined,
        refunded_tx: acc.refunded,
        chargeback_tx: acc.chargeback,
        approval_rate: rate(acc.approved, acc.total),
        decline_rate: rate(acc.declined, acc.total),
        refund_rate: rate(acc.refunded, acc.total),
        chargeback_rate: rate(acc.chargeback, acc.total),
        total_amount: acc.amount_sum,
        avg_ticket: if acc.total == 0 {
            0.0
        } else {
            acc.amount_sum / acc.total as f64
        },
        median_ticket: median_amount(batch),
    }
}

/// Compute grouped KPI summaries for a batch
///
/// Groups rows by the given dimension tuple and computes per-group counts,
/// volume, mean ticket, and status rates. Group rates are ratios of
/// non-negative sub-counts to the group's own total, so they always lie in
/// [0, 1] and the per-group status counts always sum to at most the group
/// total.
///
/// # Arguments
///
/// * `batch` - Clean transaction batch
/// * `dimensions` - Grouping key tuple, e.g. `[Dimension::Date, Dimension::Hour]`
pub fn kpis_by(batch: &[Transaction], dimensions: &[Dimension]) -> GroupedKpis {
    let mut groups: BTreeMap<Vec<KeyValue>, Accumulator> = BTreeMap::new();

    for tx in batch {
        let key: Vec<KeyValue> = dimensions.iter().map(|d| d.key_of(tx)).collect();
        groups.entry(key).or_default().fold(tx);
    }

    debug!(
        "Grouped {} rows into {} groups by {:?}",
        batch.len(),
        groups.len(),
        dimensions
    );

    let groups = groups
        .into_iter()
        .map(|(key, acc)| GroupKpis {
            key,
            total_tx: acc.total,
            total_amount: acc.amount_sum,
            approved_tx: acc.approved,
            declined_tx: acc.declined,
            refunded_tx: acc.refunded,
            chargeback_tx: acc.chargeback,
            avg_ticket: if acc.total == 0 {
                0.0
            } else {
                acc.amount_sum / acc.total as f64
            },
            approval_rate: rate(acc.approved, acc.total),
            decline_rate: rate(acc.declined, acc.total),
            refund_rate: rate(acc.refunded, acc.total),
            chargeback_rate: rate(acc.chargeback, acc.total),
        })
        .collect();

    GroupedKpis {
        dimensions: dimensions.to_vec(),
        groups,
    }
}

/// Median transaction amount, 0.0 for an empty batch
///
/// Even-length batches take the mean of the two middle values.
fn median_amount(batch: &[Transaction]) -> f64 {
    if batch.is_empty() {
        return 0.0;
    }

    let mut amounts: Vec<f64> = batch.iter().map(|tx| tx.amount).collect();
    amounts.sort_by(f64::total_cmp);

    let mid = amounts.len() / 2;
    if amounts.len() % 2 == 1 {
        amounts[mid]
    } else {
        (amounts[mid - 1] + amounts[mid]) / 2.0
    }
}
