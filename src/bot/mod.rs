//! Bot layer - Discord transport for the ledger commands.
//!
//! Poise delivers each command with its channel, author and raw arguments; the handlers
//! here only translate those into [`CommandProcessor`] calls and send the reply back.

/// Command implementations (`start`, `receita`, `despesa`, `resumo`)
pub mod commands;
/// Framework setup, client startup and error reporting
pub mod framework;

use crate::{
    core::CommandProcessor,
    errors::{Error, Result},
};

/// Shared data available to all bot commands.
pub struct BotData {
    /// Processor holding the injected ledger
    pub processor: CommandProcessor,
}

impl BotData {
    /// Creates a new `BotData` around an initialized processor.
    #[must_use]
    pub const fn new(processor: CommandProcessor) -> Self {
        Self { processor }
    }
}

/// Poise context used by every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

/// Converts a Discord snowflake into the integer stored in the ledger.
pub fn snowflake_to_i64(id: u64) -> Result<i64> {
    i64::try_from(id).map_err(|_| Error::IdOutOfRange { id })
}

/// `(chat_id, user_id)` of the invocation: the channel scopes the ledger.
pub fn invocation_ids(ctx: Context<'_>) -> Result<(i64, i64)> {
    Ok((
        snowflake_to_i64(ctx.channel_id().get())?,
        snowflake_to_i64(ctx.author().id.get())?,
    ))
}

pub use commands::*;
pub use framework::run_bot;
