//! Entity module - SeaORM entity definitions for the database.
//! The ledger has a single table; see [`transaction`].

pub mod transaction;

pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Kind, Model as TransactionModel,
};
