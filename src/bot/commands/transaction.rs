//! Transaction commands - `receita` and `despesa`.
//!
//! Both take the rest of the message as raw text and feed the whitespace-separated tokens
//! to the same record pipeline; only the kind and the echoed label differ.

use crate::{
    bot::{Context, invocation_ids},
    core::processor::tokenize,
    entities::Kind,
    errors::Result,
};

async fn record(ctx: Context<'_>, args: Option<&str>, kind: Kind, label: &str) -> Result<()> {
    let (chat_id, user_id) = invocation_ids(ctx)?;
    let tokens = tokenize(args);
    let reply = ctx
        .data()
        .processor
        .handle_record(&tokens, chat_id, user_id, kind, label)
        .await?;
    ctx.say(reply).await?;
    Ok(())
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::record;
    use crate::{bot::Context, entities::Kind, errors::Result};

    /// Records an income: `/receita <valor> <categoria>`.
    #[poise::command(slash_command, prefix_command)]
    pub async fn receita(
        ctx: Context<'_>,
        #[description = "<valor> <categoria>, ex.: 1000 salario"]
        #[rest]
        args: Option<String>,
    ) -> Result<()> {
        record(ctx, args.as_deref(), Kind::Income, "receita").await
    }

    /// Records an expense: `/despesa <valor> <categoria>`.
    #[poise::command(slash_command, prefix_command)]
    pub async fn despesa(
        ctx: Context<'_>,
        #[description = "<valor> <categoria>, ex.: 200 mercado"]
        #[rest]
        args: Option<String>,
    ) -> Result<()> {
        record(ctx, args.as_deref(), Kind::Expense, "despesa").await
    }
}

// Re-export all commands
pub use inner::*;
