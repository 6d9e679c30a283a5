use cloud_instance_bot::{
    commands,
    database::Database,
    error::{self, Error},
    shutdown::shutdown,
    startup::setup,
    state::State,
    utils::start_logging,
    Settings,
};
use poise::{
    serenity_prelude::{ClientBuilder, GatewayIntents},
    FrameworkOptions, PrefixFrameworkOptions,
};
use tokio::sync::broadcast;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    Settings::init()?;
    let settings = Settings::get();

    start_logging(&settings.bot.log_level);

    let database = Database::setup(&settings.database).await?;
    let (shutdown_messenger, shutdown_receiver) = broadcast::channel(1);
    let state = State::new(settings, database.clone(), shutdown_messenger);

    info!("Setting up framework. prefix={}", settings.bot.prefix);

    let framework = poise::Framework::builder()
        .setup(move |ctx, ready, framework| Box::pin(setup(ctx, ready, framework, state)))
        .options(FrameworkOptions {
            commands: commands::commands(),
            on_error: |err| {
                Box::pin(async move {
                    if let Err(e) = error::on_error(err).await {
                        error!("{e:?}");
                    };
                })
            },
            prefix_options: PrefixFrameworkOptions {
                prefix: Some(settings.bot.prefix.clone()),

                ..Default::default()
            },
            ..Default::default()
        })
        .build();

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;
    let mut client = ClientBuilder::new(&settings.bot.token, intents)
        .framework(framework)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(err) = shutdown(shard_manager, database, shutdown_receiver).await {
            error!("Shutdown failed: {err}");
        }
    });

    // start client, returns once all shards are shut down
    if let Err(e) = client.start().await {
        error!("Startup Error: {:?}", e);
    }

    Ok(())
}
