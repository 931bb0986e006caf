//! Shared test utilities.
//!
//! Helpers for setting up an in-memory database and the objects built on top of it.

use crate::{
    config::{database, settings::BotSettings},
    core::{CommandProcessor, Ledger},
    entities::Transaction,
    errors::Result,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Routes tracing output through the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    database::create_tables(&db).await?;
    Ok(db)
}

/// A ledger over a fresh in-memory database.
pub async fn setup_test_ledger() -> Result<Ledger> {
    Ok(Ledger::new(setup_test_db().await?))
}

/// A command processor with default settings over a fresh in-memory database.
pub async fn setup_test_processor() -> Result<CommandProcessor> {
    Ok(CommandProcessor::new(
        setup_test_ledger().await?,
        &BotSettings::default(),
    ))
}

/// A command processor over a database with no tables, so every query fails.
pub async fn setup_processor_without_schema() -> Result<CommandProcessor> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    Ok(CommandProcessor::new(Ledger::new(db), &BotSettings::default()))
}

/// Number of rows in the transactions table.
pub async fn transaction_count(ledger: &Ledger) -> Result<u64> {
    Ok(Transaction::find().count(ledger.connection()).await?)
}

/// Unique path for a file-backed test database.
pub fn temp_db_path(name: &str) -> PathBuf {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    std::env::temp_dir().join(format!(
        "ledger-buddy-{name}-{}-{nanos}.sqlite",
        std::process::id()
    ))
}
