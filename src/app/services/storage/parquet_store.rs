//! Columnar persistence for the clean dataset
//!
//! Parquet with Snappy compression and full column statistics. Writes use
//! replace semantics: the previous file is fully overwritten, never merged.

use crate::{Error, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Write a DataFrame to a Parquet file, replacing any existing file
///
/// # Returns
///
/// Number of bytes written
pub fn write_parquet(df: &mut DataFrame, path: &Path) -> Result<u64> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

    let bytes = ParquetWriter::new(file)
        .with_compression(ParquetCompression::Snappy)
        .with_statistics(StatisticsOptions::full())
        .finish(df)?;

    info!(
        "Wrote {} rows ({} bytes) to {}",
        df.height(),
        bytes,
        path.display()
    );
    Ok(bytes)
}

/// Load a DataFrame from a Parquet file
pub fn read_parquet(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
    let df = ParquetReader::new(file).finish()?;

    debug!("Read {} rows from {}", df.height(), path.display());
    Ok(df)
}
