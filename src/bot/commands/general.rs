//! General commands that don't touch the ledger.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{bot::Context, errors::Result};

    /// Shows the greeting and the list of commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn start(ctx: Context<'_>) -> Result<()> {
        let greeting = ctx.data().processor.handle_start();
        ctx.say(greeting).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
