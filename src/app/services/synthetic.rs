//! Synthetic raw transaction batches
//!
//! Deterministic generator for demo and test input conforming to the raw
//! record schema. The output is deliberately imperfect: a small fraction of
//! rows carry a missing country or an outlier amount, so a freshly generated
//! batch exercises the cleaning transform's repair paths. All randomness
//! comes from the seeded generator and the reference instant is explicit
//! configuration, so identical configs yield identical batches.

use crate::app::models::RawRecord;
use crate::config::SyntheticConfig;
use crate::constants::{CHANNELS, STATUSES, synthetic};
use chrono::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Generate a synthetic raw batch from the given configuration
pub fn generate(config: &SyntheticConfig) -> Vec<RawRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let window_minutes = (config.span_days * 24 * 60).max(1);

    let mut records = Vec::with_capacity(config.rows);
    for i in 0..config.rows {
        let offset = rng.gen_range(0..window_minutes);
        let timestamp = config.base_time - Duration::minutes(offset);

        let mut amount = gamma_amount(&mut rng);
        if rng.gen_bool(synthetic::OUTLIER_RATE) {
            amount *= synthetic::OUTLIER_FACTOR;
        }

        let country = if rng.gen_bool(synthetic::NULL_COUNTRY_RATE) {
            None
        } else {
            Some(pick(&mut rng, synthetic::COUNTRIES).to_string())
        };

        records.push(RawRecord {
            tx_id: Some(format!("TX{}", 100_000 + i)),
            merchant_id: Some(pick(&mut rng, synthetic::MERCHANTS).to_string()),
            channel: Some(pick_weighted(&mut rng, CHANNELS, synthetic::CHANNEL_WEIGHTS).to_string()),
            country,
            amount: Some(format!("{:.2}", amount)),
            status: Some(pick_weighted(&mut rng, STATUSES, synthetic::STATUS_WEIGHTS).to_string()),
            tx_timestamp: Some(timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()),
        });
    }

    info!(
        "Generated {} synthetic records (seed {})",
        records.len(),
        config.seed
    );
    records
}

/// Uniform draw from a value pool
fn pick<'a>(rng: &mut StdRng, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Weighted draw from a value pool; weights align with the pool by index
fn pick_weighted<'a>(rng: &mut StdRng, pool: &[&'a str], weights: &[f64]) -> &'a str {
    let total: f64 = weights.iter().sum();
    let mut roll = rng.gen_range(0.0..total);
    for (value, weight) in pool.iter().zip(weights) {
        if roll < *weight {
            return value;
        }
        roll -= weight;
    }
    pool[pool.len() - 1]
}

/// Gamma-shaped ticket amount (shape 2, scale 30)
///
/// A shape-2 gamma variate is the sum of two exponential variates, which
/// keeps the generator free of a distribution dependency.
fn gamma_amount(rng: &mut StdRng) -> f64 {
    const SCALE: f64 = 30.0;
    let u1: f64 = 1.0 - rng.r#gen::<f64>();
    let u2: f64 = 1.0 - rng.r#gen::<f64>();
    -SCALE * (u1.ln() + u2.ln())
}
