//! Operating systems that instances can be deployed with.

use poise::async_trait;
use serde::Deserialize;

use crate::Error;

/// One deployable operating system
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OsOption {
    /// What users type, e.g. `ubuntu`
    pub key: String,
    pub emoji: String,
    /// Human readable name
    pub name: String,
    pub description: String,
}

impl OsOption {
    pub fn new(
        key: impl Into<String>,
        emoji: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            emoji: emoji.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Single line used in the help embed
    pub fn help_line(&self) -> String {
        format!("{} {} — {}: {}", self.emoji, self.key, self.name, self.description)
    }
}

/// Source of the OS catalog
#[async_trait]
pub trait OsRegistry: Send + Sync {
    /// All entries, in the order they should be displayed
    async fn entries(&self) -> Result<Vec<OsOption>, Error>;
}

/// OS catalog read from the settings file
#[derive(Debug, Clone, Default)]
pub struct SettingsOsCatalog {
    entries: Option<Vec<OsOption>>,
}

impl SettingsOsCatalog {
    pub fn new(entries: Option<Vec<OsOption>>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl OsRegistry for SettingsOsCatalog {
    async fn entries(&self) -> Result<Vec<OsOption>, Error> {
        self.entries.clone().ok_or(Error::OsCatalogUnavailable)
    }
}
