use std::sync::Arc;

use tokio::sync::broadcast::Sender;
use tracing::{info, instrument};

use crate::{
    database::Database,
    help_view::HelpViewBuilder,
    os_catalog::SettingsOsCatalog,
    permissions::{AdminList, SuperUsers},
    Error, Settings,
};

/// The User data struct used in poise
pub struct State {
    /// Assembles the help embed
    help: HelpViewBuilder,
    /// Colour used for embeds
    embed_colour: u32,
    /// Sender for shutdown message
    shutdown_messenger: Sender<()>,
}

impl State {
    /// Wires the help collaborators together
    #[instrument(skip_all)]
    pub fn new(settings: &Settings, database: Database, shutdown_messenger: Sender<()>) -> Self {
        info!("Setting up state");

        State {
            help: help_builder(settings, database),
            embed_colour: settings.bot.embed_colour,
            shutdown_messenger,
        }
    }

    /// Get a reference to the help builder
    pub fn help(&self) -> &HelpViewBuilder {
        &self.help
    }

    pub fn embed_colour(&self) -> u32 {
        self.embed_colour
    }

    /// Shut down the bot
    pub fn shutdown(&self) -> Result<(), Error> {
        self.shutdown_messenger
            .send(())
            .map(|_| ())
            .map_err(|_| Error::ShutdownNotListening)
    }
}

/// Help builder backed by the settings and the database
pub fn help_builder(settings: &Settings, database: Database) -> HelpViewBuilder {
    HelpViewBuilder::new(
        Arc::new(AdminList::new(&settings.permissions, database.clone())),
        SuperUsers::from_settings(&settings.permissions),
        Arc::new(SettingsOsCatalog::new(settings.os.clone())),
        Arc::new(database),
    )
}
