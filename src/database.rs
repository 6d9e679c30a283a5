//! here be database stuff
//!
//! The bot only reads from redis. Instances and admins are written by the
//! services that manage them.

use std::{borrow::Cow, sync::Arc};

use fred::{
    prelude::{Client, ClientLike, Config, ConnectionConfig, ReconnectPolicy, SetsInterface},
    types::ConnectHandle,
};
use poise::{async_trait, serenity_prelude::UserId};
use tracing::{info, instrument};

use crate::{settings, Error};

type RedisError = fred::error::Error;

/// Knows how many instances exist
#[async_trait]
pub trait InstanceRegistry: Send + Sync {
    /// Total amount of instances, regardless of owner or state
    async fn count(&self) -> Result<usize, Error>;
}

/// The database used
#[derive(Clone)]
pub struct Database {
    /// The redis client
    client: Client,
    /// Handle to the connection
    connection_handle: Arc<ConnectHandle>,
    /// Every redis key is prefixed with this string.
    /// This helps identifying this program in case multiple prgrams are using the same
    /// redis instance.
    prefix: Cow<'static, str>,
}

impl Database {
    /// Sets up database connections
    pub async fn setup(settings: &settings::Database) -> Result<Self, Error> {
        let config = Config::from_url(&settings.host)?;
        let connection = ConnectionConfig::default();
        let policy = ReconnectPolicy::new_exponential(1, 20, 100, 2);
        let client = Client::new(config, None, Some(connection), Some(policy));
        info!("Connecting to database at {}", settings.host);

        let connection = client.init().await?;
        info!("Database connected");

        Ok(Self {
            client,
            connection_handle: Arc::new(connection),
            prefix: Cow::from(settings.prefix.clone()),
        })
    }

    /// Shut down database
    pub async fn disconnect(&self) -> Result<(), RedisError> {
        self.client.quit().await?;
        self.connection_handle.abort();
        Ok(())
    }

    /// Manipulats the database keys to have the correct prefix
    fn key(&self, key: &str) -> String {
        prefixed_key(&self.prefix, key)
    }

    /// Amount of known instances
    #[instrument(skip(self))]
    pub async fn instance_count(&self) -> Result<usize, RedisError> {
        self.client.scard(self.key("instances")).await
    }

    /// Is the user on the admin list
    #[instrument(skip(self))]
    pub async fn is_admin(&self, user_id: UserId) -> Result<bool, RedisError> {
        self.client.sismember(self.key("admins"), user_id.get().to_string()).await
    }
}

#[async_trait]
impl InstanceRegistry for Database {
    async fn count(&self) -> Result<usize, Error> {
        Ok(self.instance_count().await?)
    }
}

fn prefixed_key(prefix: &str, key: &str) -> String {
    format!("{prefix}:{key}")
}
