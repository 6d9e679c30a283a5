use poise::serenity_prelude;
use thiserror::Error;
use tracing::{error, warn};

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Serenity(#[from] serenity_prelude::Error),

    #[error(transparent)]
    Redis(#[from] fred::error::Error),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("OS catalog is not configured")]
    OsCatalogUnavailable,

    #[error("Nothing is listening for the shutdown request")]
    ShutdownNotListening,
}

pub async fn on_error<U, E>(
    error: poise::FrameworkError<'_, U, E>,
) -> Result<(), serenity_prelude::Error>
where
    U: Send + Sync + 'static,
    E: std::fmt::Display + std::fmt::Debug,
{
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Error in user data setup: {error}");
            std::process::exit(1);
        }
        poise::FrameworkError::Command { ctx, error, .. } => {
            error!("Command /{} failed: {error:?}", ctx.command().name);
            let reply = poise::CreateReply::default()
                .content(error.to_string())
                .ephemeral(true);
            ctx.send(reply).await?;
        }
        poise::FrameworkError::CommandCheckFailed { ctx, error, .. } => {
            warn!(
                "A command check failed in command {} for user {}: {:?}",
                ctx.command().name,
                ctx.author().name,
                error,
            );
        }
        error => poise::builtins::on_error(error).await?,
    }

    Ok(())
}
