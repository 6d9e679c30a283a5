pub mod cli;
pub mod commands;
pub mod constants;
pub mod database;
pub mod error;
pub mod help_view;
pub mod os_catalog;
pub mod permissions;
pub mod response;
pub mod settings;
pub mod shutdown;
pub mod startup;
pub mod state;
pub mod utils;

pub use error::Error;
pub use settings::Settings;
use state::State;

type Data = State;
type Context<'a> = poise::Context<'a, Data, Error>;
