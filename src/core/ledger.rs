//! Ledger store - durable, per-chat persistence of transactions.
//!
//! The [`Ledger`] is constructed once at startup and handed to whoever needs it. It issues
//! exactly two query shapes: a single-row insert and a grouped sum by kind filtered by
//! chat. Each insert is atomic on its own, so concurrent handlers can share one `Ledger`.

use crate::{
    entities::{Kind, Transaction, transaction},
    errors::{Error, Result},
};
use sea_orm::{ActiveEnum, QuerySelect, Set, prelude::*};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Identifier assigned by the store on insert.
pub type TransactionId = i64;

/// Totals per kind for one chat. Kinds without transactions are absent.
pub type KindTotals = BTreeMap<Kind, f64>;

/// Handle to the transactions table.
#[derive(Debug, Clone)]
pub struct Ledger {
    db: DatabaseConnection,
}

impl Ledger {
    /// Wraps an open connection. The schema must already exist.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub(crate) const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Records a transaction and returns its new identifier.
    ///
    /// The amount must be finite and strictly positive and the category must not be blank.
    /// These are checked again here even though the command processor validates first.
    #[instrument(skip(self))]
    pub async fn record(
        &self,
        chat_id: i64,
        user_id: i64,
        kind: Kind,
        category: &str,
        amount: f64,
    ) -> Result<TransactionId> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidAmount { amount });
        }
        if category.trim().is_empty() {
            return Err(Error::EmptyCategory);
        }

        let model = transaction::ActiveModel {
            chat_id: Set(chat_id),
            user_id: Set(user_id),
            kind: Set(kind),
            category: Set(category.to_string()),
            amount: Set(amount),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };
        let stored = model.insert(&self.db).await?;

        info!(
            "Recorded transaction_id {} for chat_id {}: type='{}', amount={}, user_id={}",
            stored.id,
            chat_id,
            kind.as_str(),
            amount,
            user_id
        );
        Ok(stored.id)
    }

    /// Sums amounts per kind for one chat.
    #[instrument(skip(self))]
    pub async fn aggregate_by_kind(&self, chat_id: i64) -> Result<KindTotals> {
        let rows: Vec<(String, f64)> = Transaction::find()
            .select_only()
            .column(transaction::Column::Kind)
            .column_as(transaction::Column::Amount.sum(), "total")
            .filter(transaction::Column::ChatId.eq(chat_id))
            .group_by(transaction::Column::Kind)
            .into_tuple()
            .all(&self.db)
            .await?;

        let totals = rows
            .into_iter()
            .map(|(kind, total)| -> Result<(Kind, f64)> {
                Ok((Kind::try_from_value(&kind)?, total))
            })
            .collect::<Result<KindTotals>>()?;

        debug!("Aggregated {} kinds for chat_id {}", totals.len(), chat_id);
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_record_assigns_increasing_ids() -> Result<()> {
        let ledger = setup_test_ledger().await?;

        let first = ledger.record(1, 1, Kind::Income, "salary", 1000.0).await?;
        let second = ledger.record(1, 1, Kind::Expense, "food", 200.0).await?;

        assert!(second > first);
        Ok(())
    }

    #[tokio::test]
    async fn test_record_persists_all_fields() -> Result<()> {
        let ledger = setup_test_ledger().await?;
        let before = chrono::Utc::now();

        let id = ledger.record(7, 42, Kind::Expense, "rent", 850.5).await?;

        let row = Transaction::find_by_id(id)
            .one(ledger.connection())
            .await?
            .unwrap();
        assert_eq!(row.chat_id, 7);
        assert_eq!(row.user_id, 42);
        assert_eq!(row.kind, Kind::Expense);
        assert_eq!(row.category, "rent");
        assert_eq!(row.amount, 850.5);
        assert!(row.created_at >= before - chrono::Duration::seconds(1));
        Ok(())
    }

    #[tokio::test]
    async fn test_record_rejects_invalid_amounts() -> Result<()> {
        let ledger = setup_test_ledger().await?;

        for amount in [0.0, -0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = ledger.record(1, 1, Kind::Income, "x", amount).await;
            assert!(matches!(result, Err(Error::InvalidAmount { .. })));
        }

        assert_eq!(transaction_count(&ledger).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_record_rejects_blank_category() -> Result<()> {
        let ledger = setup_test_ledger().await?;

        let result = ledger.record(1, 1, Kind::Income, "  ", 10.0).await;
        assert!(matches!(result, Err(Error::EmptyCategory)));

        assert_eq!(transaction_count(&ledger).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_aggregate_empty_chat_is_empty() -> Result<()> {
        let ledger = setup_test_ledger().await?;

        let totals = ledger.aggregate_by_kind(99).await?;
        assert!(totals.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_aggregate_sums_per_kind() -> Result<()> {
        let ledger = setup_test_ledger().await?;
        ledger.record(1, 1, Kind::Income, "salary", 1000.0).await?;
        ledger.record(1, 2, Kind::Income, "bonus", 250.0).await?;
        ledger.record(1, 1, Kind::Expense, "food", 200.0).await?;

        let totals = ledger.aggregate_by_kind(1).await?;
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&Kind::Income], 1250.0);
        assert_eq!(totals[&Kind::Expense], 200.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_aggregate_omits_kind_without_rows() -> Result<()> {
        let ledger = setup_test_ledger().await?;
        ledger.record(1, 1, Kind::Expense, "food", 12.5).await?;

        let totals = ledger.aggregate_by_kind(1).await?;
        assert_eq!(totals.get(&Kind::Expense), Some(&12.5));
        assert!(!totals.contains_key(&Kind::Income));
        Ok(())
    }

    #[tokio::test]
    async fn test_aggregate_is_scoped_to_chat() -> Result<()> {
        let ledger = setup_test_ledger().await?;
        ledger.record(1, 1, Kind::Income, "salary", 100.0).await?;
        ledger.record(2, 1, Kind::Income, "salary", 30.0).await?;

        assert_eq!(ledger.aggregate_by_kind(1).await?[&Kind::Income], 100.0);
        assert_eq!(ledger.aggregate_by_kind(2).await?[&Kind::Income], 30.0);
        assert!(ledger.aggregate_by_kind(3).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_record_counted_exactly_once() -> Result<()> {
        let ledger = setup_test_ledger().await?;
        ledger.record(5, 1, Kind::Income, "salary", 40.0).await?;
        let before = ledger.aggregate_by_kind(5).await?;

        ledger.record(5, 1, Kind::Income, "gift", 2.5).await?;

        let after = ledger.aggregate_by_kind(5).await?;
        assert_eq!(after[&Kind::Income] - before[&Kind::Income], 2.5);
        Ok(())
    }

    #[tokio::test]
    async fn test_aggregate_reads_are_idempotent() -> Result<()> {
        let ledger = setup_test_ledger().await?;
        ledger.record(1, 1, Kind::Income, "salary", 10.0).await?;
        ledger.record(1, 1, Kind::Expense, "food", 3.0).await?;

        let first = ledger.aggregate_by_kind(1).await?;
        let second = ledger.aggregate_by_kind(1).await?;
        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_records_are_all_counted() -> Result<()> {
        let ledger = setup_test_ledger().await?;

        let mut tasks = tokio::task::JoinSet::new();
        for user_id in 0..20 {
            let ledger = ledger.clone();
            tasks.spawn(async move {
                ledger
                    .record(1, user_id, Kind::Expense, "coffee", 1.5)
                    .await
            });
        }
        while let Some(joined) = tasks.join_next().await {
            joined.unwrap()?;
        }

        assert_eq!(transaction_count(&ledger).await?, 20);
        assert_eq!(ledger.aggregate_by_kind(1).await?[&Kind::Expense], 30.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_records_survive_reconnect() -> Result<()> {
        let path = temp_db_path("reconnect");
        let url = format!("sqlite://{}?mode=rwc", path.display());

        {
            let ledger = Ledger::new(crate::config::database::init_database(&url).await?);
            ledger.record(3, 1, Kind::Income, "salary", 75.0).await?;
            ledger.connection().clone().close().await?;
        }

        let ledger = Ledger::new(crate::config::database::init_database(&url).await?);
        let totals = ledger.aggregate_by_kind(3).await?;
        ledger.connection().clone().close().await?;
        let _ = std::fs::remove_file(&path);

        assert_eq!(totals[&Kind::Income], 75.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_closed_connection_is_a_database_error() -> Result<()> {
        let ledger = setup_test_ledger().await?;
        ledger.connection().clone().close().await?;

        let record = ledger.record(1, 1, Kind::Income, "salary", 10.0).await;
        let aggregate = ledger.aggregate_by_kind(1).await;

        assert!(matches!(record, Err(Error::Database(_))));
        assert!(matches!(aggregate, Err(Error::Database(_))));
        Ok(())
    }
}
