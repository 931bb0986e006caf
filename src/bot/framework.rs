//! Poise framework setup and the Discord client loop.

use super::{BotData, commands};
use crate::{
    config::settings::BotSettings,
    core::CommandProcessor,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tracing::{error, info, instrument};

/// Reply sent when a command fails for reasons other than user input.
pub const GENERIC_FAILURE_REPLY: &str =
    "⚠ Não foi possível processar o comando. Tente novamente mais tarde.";

/// Set by the setup callback when it fails. Poise never stores `BotData` after a failed
/// setup, so the client is shut down and [`run_bot`] reports the failure.
#[derive(Debug, Clone, Default)]
pub(crate) struct SetupStatus(Arc<AtomicBool>);

impl SetupStatus {
    pub(crate) fn mark_failed(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.0.load(Ordering::SeqCst) {
            Err(Error::SetupFailed)
        } else {
            Ok(())
        }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(GENERIC_FAILURE_REPLY).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Registers the ledger commands and runs the Discord client until it stops.
///
/// Returns [`Error::SetupFailed`] if command registration failed; the client is shut
/// down in that case instead of staying connected without handlers.
#[instrument(skip_all)]
pub async fn run_bot(
    token: String,
    settings: &BotSettings,
    processor: CommandProcessor,
) -> Result<()> {
    let setup_status = SetupStatus::default();
    let setup_flag = setup_status.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::start(),
                commands::receita(),
                commands::despesa(),
                commands::resumo(),
            ],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(settings.prefix.clone()),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                if let Err(e) =
                    poise::builtins::register_globally(ctx, &framework.options().commands).await
                {
                    setup_flag.mark_failed();
                    framework.shard_manager().shutdown_all().await;
                    return Err(e.into());
                }
                info!("Commands registered globally");
                Ok(BotData::new(processor))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;

    setup_status.check()
}
