//! Unified error type for the ledger bot.
//!
//! User input mistakes (missing arguments, bad amounts) are not errors at this level;
//! they are answered directly by the command processor. Everything here is a fault that
//! aborts the current request.

use poise::serenity_prelude as serenity;
use thiserror::Error;

/// Errors raised by storage, configuration and the chat transport.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Failure reported by the storage engine
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Amount rejected at the storage boundary (non-finite or not strictly positive)
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Category rejected at the storage boundary
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// A chat or user snowflake that does not fit the stored integer type
    #[error("Identifier {id} is out of range")]
    IdOutOfRange {
        /// The raw identifier
        id: u64,
    },

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Framework setup failed, so no command could ever be handled
    #[error("Bot setup failed; client was shut down")]
    SetupFailed,

    /// Serenity/Poise framework failure
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<serenity::Error>),
}

impl From<serenity::Error> for Error {
    fn from(value: serenity::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
