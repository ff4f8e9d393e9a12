//! KPI aggregation over clean transaction batches
//!
//! Computes an overall summary and dimension-grouped summaries (rate and
//! volume metrics) in a single pass over the batch: rows fold into per-group
//! accumulators keyed by the grouping tuple, and rates are finalized against
//! each group's own total. Rates are defined as 0.0 when the denominator is
//! zero, so empty batches never divide by zero.

pub mod aggregator;
pub mod export;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use aggregator::{kpis_by, kpis_overall};
pub use export::{KpiReportSet, REPORT_GROUPINGS, compute_reports};
pub use summary::{Dimension, GroupKpis, GroupedKpis, KeyValue, OverallKpis};
