//! Who is allowed to see which part of the help.

use std::collections::HashSet;

use poise::{
    async_trait,
    serenity_prelude::{RoleId, UserId},
};

use crate::{database::Database, settings, Context, Error};

/// The user that invoked a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub id: UserId,
    /// Roles in the guild the command was invoked in. Empty in DMs.
    pub roles: Vec<RoleId>,
}

impl Requester {
    pub fn new(id: UserId, roles: Vec<RoleId>) -> Self {
        Self { id, roles }
    }

    /// Collect the author and, inside a guild, their roles
    pub async fn from_context(ctx: Context<'_>) -> Self {
        let roles = match ctx.author_member().await {
            Some(member) => member.roles.clone(),
            None => Vec::new(),
        };
        Self::new(ctx.author().id, roles)
    }
}

/// Decides whether a requester is a bot admin
#[async_trait]
pub trait PermissionClassifier: Send + Sync {
    async fn is_admin(&self, requester: &Requester) -> Result<bool, Error>;
}

/// Admins are members with the admin role, users listed in the settings
/// and users on the admin list in the database.
pub struct AdminList {
    admin_role: Option<RoleId>,
    admins: HashSet<UserId>,
    database: Database,
}

impl AdminList {
    pub fn new(settings: &settings::Permissions, database: Database) -> Self {
        Self {
            admin_role: settings.admin_role.map(RoleId::new),
            admins: settings.admins.iter().copied().map(UserId::new).collect(),
            database,
        }
    }
}

#[async_trait]
impl PermissionClassifier for AdminList {
    async fn is_admin(&self, requester: &Requester) -> Result<bool, Error> {
        if has_admin_role(self.admin_role, requester) || self.admins.contains(&requester.id) {
            return Ok(true);
        }

        Ok(self.database.is_admin(requester.id).await?)
    }
}

fn has_admin_role(admin_role: Option<RoleId>, requester: &Requester) -> bool {
    admin_role.is_some_and(|role| requester.roles.contains(&role))
}

/// Users with privileges above admins.
///
/// Not configuring any super users is valid, nobody is a super user then.
#[derive(Debug, Clone, Default)]
pub struct SuperUsers(Option<HashSet<UserId>>);

impl SuperUsers {
    pub fn new(users: Option<impl IntoIterator<Item = UserId>>) -> Self {
        Self(users.map(|users| users.into_iter().collect()))
    }

    pub fn from_settings(settings: &settings::Permissions) -> Self {
        Self::new(
            settings
                .super_users
                .as_ref()
                .map(|ids| ids.iter().copied().map(UserId::new)),
        )
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.0.as_ref().is_some_and(|users| users.contains(&user))
    }
}
