//! Quality report structures
//!
//! The report is an ordered sequence of per-check results plus a summary, and
//! serializes to the persisted JSON document shape.

use serde::Serialize;

/// Outcome of a single quality check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl CheckStatus {
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckStatus::Pass)
    }
}

/// Result of one quality check, with check-specific diagnostic fields
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    /// Expected columns absent from the batch (schema check)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_columns: Option<Vec<String>>,
    /// Unexpected columns present in the batch (schema check; reported, not failing)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_columns: Option<Vec<String>>,
    /// Allowed domain values (domain checks)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    /// Accepted value range (range checks)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    /// Accepted timestamp window (window checks)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<[String; 2]>,
    /// Where the failing rows were exported, if the check failed and the sink persisted them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_rows_csv: Option<String>,
}

impl CheckResult {
    /// Create a bare check result with no diagnostic fields
    pub fn new(name: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            name: name.into(),
            status,
            missing_columns: None,
            extra_columns: None,
            allowed: None,
            range: None,
            window: None,
            failed_rows_csv: None,
        }
    }

    pub fn with_schema_diff(mut self, missing: Vec<String>, extra: Vec<String>) -> Self {
        self.missing_columns = Some(missing);
        self.extra_columns = Some(extra);
        self
    }

    pub fn with_allowed(mut self, allowed: Vec<String>) -> Self {
        self.allowed = Some(allowed);
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some([min, max]);
        self
    }

    pub fn with_window(mut self, start: String, end: String) -> Self {
        self.window = Some([start, end]);
        self
    }

    pub fn is_pass(&self) -> bool {
        self.status.is_pass()
    }
}

/// Aggregate view over one checker run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualitySummary {
    /// Number of rows in the evaluated batch
    pub rows_evaluated: usize,
    /// Number of checks in the battery
    pub checks_total: usize,
    /// Number of FAIL results
    pub checks_failed: usize,
    /// True when every check passed
    pub passed: bool,
}

/// Complete quality report: ordered check results plus summary
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub checks: Vec<CheckResult>,
    pub summary: QualitySummary,
}

impl QualityReport {
    /// Assemble a report, deriving the summary from the check results
    pub fn from_checks(rows_evaluated: usize, checks: Vec<CheckResult>) -> Self {
        let checks_failed = checks.iter().filter(|c| !c.is_pass()).count();
        let summary = QualitySummary {
            rows_evaluated,
            checks_total: checks.len(),
            checks_failed,
            passed: checks_failed == 0,
        };
        Self { checks, summary }
    }

    /// Look up a check result by name
    pub fn check(&self, name: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.name == name)
    }

    /// True when every check passed
    pub fn passed(&self) -> bool {
        self.summary.passed
    }
}
