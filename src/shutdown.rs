use std::sync::Arc;

use poise::serenity_prelude::ShardManager;
use tokio::{
    select,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
    sync::broadcast::Receiver,
};
use tracing::{error, info};

use crate::{Error, database::Database};

/// Wait for one of these and return its name:
///     - ctrl-c (SIGINT)
///     - SIGTERM
///     - SIGQUIT
///     - shutdown command
pub async fn wait_for_signal(mut internal_receiver: Receiver<()>) -> Result<&'static str, Error> {
    let mut stream_terminate = signal(SignalKind::terminate())?;
    let mut stream_quit = signal(SignalKind::quit())?;

    let received_signal = select! {
        _ = ctrl_c() => {
            "SIGINT"
        },
        _ = stream_terminate.recv() => {
            "SIGTERM"
        },
        _ = stream_quit.recv() => {
            "SIGQUIT"
        },
        _ = internal_receiver.recv() => {
            "INTERNAL"
        }
    };

    Ok(received_signal)
}

/// Wait for signal and shut down bot and database connection in order.
pub async fn shutdown(
    shard_manager: Arc<ShardManager>,
    database: Database,
    internal_receiver: Receiver<()>,
) -> Result<(), Error> {
    let received_signal = wait_for_signal(internal_receiver).await?;
    info!("Received signal {received_signal}, shutting down");

    // close connection to discord
    shard_manager.shutdown_all().await;
    info!("Discord has shut down");

    // disconnect from database
    match database.disconnect().await {
        Ok(()) => info!("Database disconnected properly"),
        Err(err) => error!("Database did not disconnect properly: {err:#}"),
    }

    info!("Shut down sequence done");
    Ok(())
}
