use clap::{Parser, Subcommand};
use poise::serenity_prelude::GuildId;

#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct UtilCli {
    #[command(subcommand)]
    pub command: UtilCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum UtilCommand {
    RegisterCommands {
        #[command(subcommand)]
        command: GuildOrGlobally,
    },
    UnregisterCommands {
        #[command(subcommand)]
        command: GuildOrGlobally,
    },
    /// Print the help as a user with the given access would see it
    RenderHelp {
        #[arg(short, long)]
        admin: bool,
        #[arg(short, long)]
        super_user: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum GuildOrGlobally {
    InGuild { guild: GuildId },
    Globally,
}
