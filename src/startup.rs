use poise::{serenity_prelude, Framework};
use tracing::info;

use crate::{Data, Error};

/// Hands the already built user data to poise once discord is ready
pub async fn setup(
    _ctx: &serenity_prelude::Context,
    ready: &serenity_prelude::Ready,
    framework: &Framework<Data, Error>,
    state: Data,
) -> Result<Data, Error> {
    info!(
        "Bot ready as {}! {} commands available, {} guilds",
        ready.user.name,
        framework.options().commands.len(),
        ready.guilds.len()
    );

    Ok(state)
}
