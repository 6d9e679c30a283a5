use config::{Config, ConfigError, FileFormat};
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
    sync::OnceLock,
};

use crate::os_catalog::OsOption;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Wrapper for all settings
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Bot settings
    pub bot: Bot,
    /// Who counts as admin or super user
    #[serde(default)]
    pub permissions: Permissions,
    /// Database settings
    pub database: Database,
    /// Operating systems offered for new instances, in display order.
    /// Missing entirely means the catalog is unavailable.
    pub os: Option<Vec<OsOption>>,
}

impl Settings {
    #[allow(clippy::missing_panics_doc)]
    /// Load and deserialize settings into static struct
    pub fn init() -> Result<(), SettingsError> {
        Self::init_from_path(&PathBuf::from_str("settings").expect("hard coded"))
    }

    /// Load and deserialize settings into static struct from path
    pub fn init_from_path(path: &Path) -> Result<(), SettingsError> {
        let path = path.to_string_lossy();

        let settings = Config::builder()
            .add_source(config::File::with_name(&path))
            .build()?
            .try_deserialize()?;

        let _ = SETTINGS.set(settings);

        Ok(())
    }

    /// Deserialize settings from a toml string without touching the static struct
    pub fn from_toml_str(toml: &str) -> Result<Self, SettingsError> {
        Ok(Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?)
    }

    /// Get settings.
    ///
    /// # Panics
    /// Panics if called before [init].
    pub fn get() -> &'static Settings {
        SETTINGS.get().expect("Settings are not initialized")
    }
}

/// Bot settings
#[derive(Debug, Deserialize)]
pub struct Bot {
    /// Log level
    pub log_level: String,
    /// Prefix
    pub prefix: String,
    /// Token
    pub token: String,
    /// Colour of the help embed
    #[serde(default = "default_embed_colour")]
    pub embed_colour: u32,
}

fn default_embed_colour() -> u32 {
    crate::constants::DEFAULT_EMBED_COLOUR
}

/// Permission settings
#[derive(Debug, Default, Deserialize)]
pub struct Permissions {
    /// Members with this role are admins
    pub admin_role: Option<u64>,
    /// Users that are always admins, no matter their roles
    #[serde(default)]
    pub admins: Vec<u64>,
    /// Users above admins. Nobody is a super user if this is missing
    pub super_users: Option<Vec<u64>>,
}

/// Database settings
#[derive(Debug, Deserialize)]
pub struct Database {
    /// Host
    pub host: String,
    /// Prefix
    pub prefix: String,
}
