pub mod help;

use crate::{Context, Data, Error};

/// Every command the bot knows about
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![help::help(), register(), shutdown()]
}

/// Register or unregister application commands
#[poise::command(prefix_command, hide_in_help, owners_only)]
pub async fn register(ctx: Context<'_>) -> Result<(), Error> {
    poise::builtins::register_application_commands_buttons(ctx).await?;
    Ok(())
}

/// Shut the bot down
#[poise::command(prefix_command, hide_in_help, owners_only)]
pub async fn shutdown(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say("Shutting down").await?;
    ctx.data().shutdown()
}
