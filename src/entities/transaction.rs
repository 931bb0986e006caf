//! Transaction entity - one signed entry in a chat's ledger.
//!
//! Each transaction belongs to a `chat_id`, was authored by a `user_id`, and carries a
//! [`Kind`], a free-text category and a strictly positive amount. Column names follow the
//! `transactions(id, chat_id, user_id, type, category, amount, date)` storage contract.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction polarity. Persisted as the text `"income"` or `"expense"`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Money coming in
    #[sea_orm(string_value = "income")]
    Income,
    /// Money going out
    #[sea_orm(string_value = "expense")]
    Expense,
}

impl Kind {
    /// Text form used in the `type` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Store-assigned, monotonically increasing identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Conversation the transaction belongs to
    pub chat_id: i64,
    /// Author of the transaction
    pub user_id: i64,
    /// Income or expense
    #[sea_orm(column_name = "type")]
    pub kind: Kind,
    /// Free-text label supplied by the user
    pub category: String,
    /// Always strictly positive; the sign comes from `kind`
    pub amount: f64,
    /// Insertion time
    #[sea_orm(column_name = "date")]
    pub created_at: DateTimeUtc,
}

/// Transactions have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
