//! Query command implementation
//!
//! Executes the fixed, human-authored analytical SQL script against the
//! relational store statement-by-statement and prints a bounded preview of
//! each result set. The script is data, not logic: this command neither
//! generates nor interprets SQL.

use super::shared::{load_command_config, setup_logging};
use crate::cli::args::QueryArgs;
use crate::{Error, Result};
use colored::Colorize;
use rusqlite::Connection;
use rusqlite::types::ValueRef;
use tracing::info;

/// Query command runner
pub fn run_query(args: QueryArgs) -> Result<()> {
    setup_logging(args.verbose);
    let config = load_command_config(&args.base)?;

    let script_path = config.paths.analytics_sql();
    if !script_path.exists() {
        return Err(Error::file_not_found(script_path.display().to_string()));
    }
    let db_path = config.paths.sqlite_db();
    if !db_path.exists() {
        return Err(Error::file_not_found(db_path.display().to_string()));
    }

    let script = std::fs::read_to_string(&script_path)
        .map_err(|e| Error::io(format!("Failed to read {}", script_path.display()), e))?;
    let conn = Connection::open(&db_path)?;

    let statements = split_statements(&script);
    info!(
        "Running {} statements from {}",
        statements.len(),
        script_path.display()
    );

    for statement in &statements {
        println!("\n>> Running: {}", statement_label(statement).bold());
        print_preview(&conn, statement, args.limit)?;
    }

    Ok(())
}

/// Split the script into executable statements, dropping comment-only chunks
fn split_statements(script: &str) -> Vec<String> {
    script
        .split(';')
        .map(str::trim)
        .filter(|chunk| has_sql_content(chunk))
        .map(String::from)
        .collect()
}

/// True when a chunk contains something besides whitespace and `--` comments
fn has_sql_content(chunk: &str) -> bool {
    chunk.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with("--")
    })
}

/// First non-comment line of a statement, for display
fn statement_label(statement: &str) -> &str {
    statement
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("--"))
        .unwrap_or(statement)
}

/// Execute a statement and print up to `limit` result rows
fn print_preview(conn: &Connection, sql: &str, limit: usize) -> Result<()> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    println!("{}", columns.join(" | ").dimmed());

    let mut rows = stmt.query([])?;
    let mut shown = 0;
    while let Some(row) = rows.next()? {
        if shown >= limit {
            println!("... (preview limited to {} rows)", limit);
            break;
        }
        let mut cells = Vec::with_capacity(columns.len());
        for index in 0..columns.len() {
            cells.push(format_value(row.get_ref(index)?));
        }
        println!("{}", cells.join(" | "));
        shown += 1;
    }

    if shown == 0 {
        println!("(no rows)");
    }
    Ok(())
}

/// Render one SQLite value for the preview
fn format_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => format!("{:.4}", r),
        ValueRef::Text(t) => String::from_utf8_lossy(t).to_string(),
        ValueRef::Blob(_) => "<blob>".to_string(),
    }
}
