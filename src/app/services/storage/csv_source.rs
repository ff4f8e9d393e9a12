//! Delimited-text ingest and export of raw transaction batches

use crate::app::models::RawRecord;
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// Load a raw transaction batch from a delimited-text file
///
/// Every field deserializes as optional, so missing or empty values arrive as
/// `None` and are left for the cleaning transform to resolve. A missing file
/// or an unreadable row is a structural error and propagates.
pub fn load_raw_csv(path: &Path) -> Result<Vec<RawRecord>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        Error::csv_parsing(path.display().to_string(), "Failed to open reader", Some(e))
    })?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: RawRecord = row.map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "Failed to deserialize record",
                Some(e),
            )
        })?;
        records.push(record);
    }

    info!("Loaded {} raw records from {}", records.len(), path.display());
    Ok(records)
}

/// Write a raw transaction batch as a delimited-text file
///
/// Used by the synthetic generator; `None` fields serialize as empty cells.
pub fn write_raw_csv(records: &[RawRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        Error::csv_parsing(path.display().to_string(), "Failed to open writer", Some(e))
    })?;

    for record in records {
        writer.serialize(record).map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "Failed to serialize record",
                Some(e),
            )
        })?;
    }
    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;

    info!("Wrote {} raw records to {}", records.len(), path.display());
    Ok(())
}
