//! `resumo` - income, expense and balance of the invoking channel.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, invocation_ids},
        errors::Result,
    };

    /// Shows income, expenses and balance for this chat.
    #[poise::command(slash_command, prefix_command)]
    pub async fn resumo(ctx: Context<'_>) -> Result<()> {
        let (chat_id, _) = invocation_ids(ctx)?;
        let reply = ctx.data().processor.handle_summary(chat_id).await?;
        ctx.say(reply).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
