//! Relational persistence for the clean dataset
//!
//! Loads the clean batch into a SQLite table with replace semantics (drop and
//! recreate, never merge) and maintains the two secondary indexes used by
//! downstream analytical queries.

use crate::app::models::Transaction;
use crate::constants::TRANSACTIONS_TABLE;
use crate::Result;
use rusqlite::{Connection, params};
use std::path::Path;
use tracing::info;

/// Timestamp format stored in the relational table
const SQL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Replace the transactions table in the given database with this batch
///
/// # Returns
///
/// Number of rows inserted
pub fn load_into_sqlite(batch: &[Transaction], db_path: &Path) -> Result<usize> {
    let mut conn = Connection::open(db_path)?;
    let inserted = replace_transactions(&mut conn, batch)?;

    info!(
        "Loaded {} transactions into {} ({})",
        inserted,
        TRANSACTIONS_TABLE,
        db_path.display()
    );
    Ok(inserted)
}

/// Drop, recreate, and repopulate the transactions table on an open connection
pub fn replace_transactions(conn: &mut Connection, batch: &[Transaction]) -> Result<usize> {
    let tx = conn.transaction()?;

    tx.execute(&format!("DROP TABLE IF EXISTS {TRANSACTIONS_TABLE}"), [])?;
    tx.execute(
        &format!(
            "CREATE TABLE {TRANSACTIONS_TABLE} (
                tx_id TEXT NOT NULL,
                merchant_id TEXT NOT NULL,
                channel TEXT NOT NULL,
                country TEXT NOT NULL,
                amount REAL NOT NULL,
                status TEXT NOT NULL,
                tx_timestamp TEXT NOT NULL
            )"
        ),
        [],
    )?;

    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO {TRANSACTIONS_TABLE}
                (tx_id, merchant_id, channel, country, amount, status, tx_timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
        ))?;
        for record in batch {
            stmt.execute(params![
                record.tx_id,
                record.merchant_id,
                record.channel.as_str(),
                record.country,
                record.amount,
                record.status.as_str(),
                record.tx_timestamp.format(SQL_TIMESTAMP_FORMAT).to_string(),
            ])?;
        }
    }

    // Secondary indexes for timestamp- and merchant-keyed queries
    tx.execute(
        &format!("CREATE INDEX IF NOT EXISTS idx_tx_time ON {TRANSACTIONS_TABLE}(tx_timestamp)"),
        [],
    )?;
    tx.execute(
        &format!("CREATE INDEX IF NOT EXISTS idx_tx_merchant ON {TRANSACTIONS_TABLE}(merchant_id)"),
        [],
    )?;

    tx.commit()?;
    Ok(batch.len())
}
