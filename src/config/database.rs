//! Database configuration module.
//!
//! Handles the `SQLite` connection and creation of the `transactions` table. The table is
//! generated from the entity definition with `Schema::create_table_from_entity` and then
//! extended with `CHECK` constraints, so that rows written around the [`Ledger`] still
//! satisfy the same invariants it enforces.
//!
//! [`Ledger`]: crate::core::ledger::Ledger

use crate::entities::{Transaction, TransactionColumn};
use crate::errors::Result;
use sea_orm::sea_query::{Expr, TableCreateStatement};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Default database location. `mode=rwc` creates the file on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://ledger_buddy.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, falling back to
/// [`DEFAULT_DATABASE_URL`].
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Opens a connection pool to the given database URL.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Builds the `CREATE TABLE IF NOT EXISTS transactions` statement with its constraints.
fn transactions_table(schema: &Schema) -> TableCreateStatement {
    let mut table = schema.create_table_from_entity(Transaction);
    table
        .if_not_exists()
        .check(Expr::col(TransactionColumn::Kind).is_in(["income", "expense"]))
        .check(Expr::col(TransactionColumn::Amount).gt(0))
        .check(Expr::col(TransactionColumn::Category).ne(""));
    table
}

/// Creates all tables that don't exist yet. Safe to call on every start.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    db.execute(builder.build(&transactions_table(&schema)))
        .await?;

    info!("Database tables ensured");
    Ok(())
}

/// Connects and makes sure the schema is in place.
pub async fn init_database(database_url: &str) -> Result<DatabaseConnection> {
    let db = create_connection(database_url).await?;
    create_tables(&db).await?;
    Ok(db)
}
