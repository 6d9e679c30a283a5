use clap::Parser;
use cloud_instance_bot::{
    cli::{GuildOrGlobally, UtilCli, UtilCommand},
    commands::commands,
    error::Error,
    database::Database,
    help_view::{Access, HelpDocument},
    state::help_builder,
    utils::start_logging,
    Settings,
};
use poise::serenity_prelude::{self, Http};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = UtilCli::parse();

    Settings::init()?;
    let settings = Settings::get();

    start_logging(&settings.bot.log_level);

    match cli.command {
        UtilCommand::RegisterCommands { command } => register_commands(&http(settings).await?, command).await?,
        UtilCommand::UnregisterCommands { command } => {
            unregister_commands(&http(settings).await?, command).await?
        }
        UtilCommand::RenderHelp { admin, super_user } => {
            let access = Access {
                is_admin: admin,
                is_super: super_user,
            };
            render_help(settings, access).await?
        }
    };

    Ok(())
}

async fn http(settings: &Settings) -> Result<Http, Error> {
    let http = Http::new(&settings.bot.token);
    http.set_application_id(http.get_current_application_info().await?.id);
    Ok(http)
}

pub async fn register_commands(
    http: &Http,
    guild_or_globally: GuildOrGlobally,
) -> Result<(), serenity_prelude::Error> {
    let commands = poise::builtins::create_application_commands(&commands());

    let result = match guild_or_globally {
        GuildOrGlobally::InGuild { guild } => guild.set_commands(http, commands).await,
        GuildOrGlobally::Globally => serenity_prelude::Command::set_global_commands(http, commands).await,
    };

    match &result {
        Ok(cmds) => match guild_or_globally {
            GuildOrGlobally::InGuild { guild } => {
                info!("{} commands have been set in guild: {}", cmds.len(), guild);
            }
            GuildOrGlobally::Globally => info!("{} commands have been set globally", cmds.len()),
        },
        Err(err) => error!("Failed to set commands: {err:#}"),
    };

    Ok(())
}

pub async fn unregister_commands(
    http: &Http,
    guild_or_globally: GuildOrGlobally,
) -> Result<(), serenity_prelude::Error> {
    let result = match guild_or_globally {
        GuildOrGlobally::InGuild { guild } => guild.set_commands(http, vec![]).await,
        GuildOrGlobally::Globally => serenity_prelude::Command::set_global_commands(http, vec![]).await,
    };

    match &result {
        Ok(_) => match guild_or_globally {
            GuildOrGlobally::InGuild { guild } => {
                info!("All commands have been removed in guild: {}", guild);
            }
            GuildOrGlobally::Globally => info!("All commands have been removed globally"),
        },
        Err(err) => error!("Failed to remove commands: {err:#}"),
    };

    Ok(())
}

/// Print the help with live OS catalog and instance count, but a fixed access level
pub async fn render_help(settings: &Settings, access: Access) -> Result<(), Error> {
    let database = Database::setup(&settings.database).await?;
    let help = help_builder(settings, database.clone());

    let document = HelpDocument::assemble(access, help.os_section().await, help.instance_total().await);
    println!("{document}");

    database.disconnect().await?;
    Ok(())
}
