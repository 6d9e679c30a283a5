//! Builds the `/help` embed.
//!
//! Which sections show up depends on who is asking. Live data (OS catalog and
//! instance count) is fetched on every build, and a lookup that fails is
//! replaced by a placeholder instead of failing the whole help.

use std::{fmt::Display, sync::Arc};

use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter};
use tracing::{debug, instrument, warn};

use crate::{
    constants::{
        ADMIN_COMMANDS, ADMIN_SECTION, CommandEntry, EXAMPLES, EXAMPLES_SECTION, EXTRA_COMMANDS, EXTRAS_SECTION,
        FIELD_VALUE_LIMIT, HELP_DESCRIPTION, HELP_TITLE, OS_EMPTY, OS_SECTION, OS_UNAVAILABLE, SUPER_COMMANDS,
        SUPER_SECTION, TIPS, TIPS_SECTION, USER_COMMANDS, USER_SECTION,
    },
    database::InstanceRegistry,
    os_catalog::{OsOption, OsRegistry},
    permissions::{PermissionClassifier, Requester, SuperUsers},
};

/// Which privileged sections a requester gets to see
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Access {
    pub is_admin: bool,
    pub is_super: bool,
}

/// Instance count shown in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceTotal {
    Known(usize),
    /// The registry could not be asked
    Unknown,
}

impl Display for InstanceTotal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceTotal::Known(total) => write!(f, "{total}"),
            InstanceTotal::Unknown => write!(f, "?"),
        }
    }
}

/// A named section of the help
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl HelpField {
    fn block(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_owned(),
            value: fit_field_value(value.into()),
            inline: false,
        }
    }
}

/// Cut `value` down to [FIELD_VALUE_LIMIT] characters, keeping whole lines
/// where possible and marking the cut with `…`
fn fit_field_value(value: String) -> String {
    if value.chars().count() <= FIELD_VALUE_LIMIT {
        return value;
    }

    let mut cut: String = value.chars().take(FIELD_VALUE_LIMIT - 1).collect();
    if let Some(end_of_last_line) = cut.rfind('\n') {
        cut.truncate(end_of_last_line + 1);
    }
    warn!("Help field value too long, cut from {} to {} bytes", value.len(), cut.len());

    cut.push('…');
    cut
}

/// The assembled help, independent of how it is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpDocument {
    pub title: String,
    pub description: String,
    pub fields: Vec<HelpField>,
    pub footer: String,
}

impl HelpDocument {
    /// Assemble the document from already resolved lookups
    pub fn assemble(access: Access, os_section: String, total: InstanceTotal) -> Self {
        let mut fields = vec![
            HelpField::block(EXAMPLES_SECTION, EXAMPLES),
            HelpField::block(USER_SECTION, format_commands(USER_COMMANDS)),
            HelpField::block(EXTRAS_SECTION, format_commands(EXTRA_COMMANDS)),
        ];

        if access.is_admin {
            fields.push(HelpField::block(ADMIN_SECTION, format_commands(ADMIN_COMMANDS)));
        }

        if access.is_super {
            fields.push(HelpField::block(SUPER_SECTION, format_commands(SUPER_COMMANDS)));
        }

        let os_section = if os_section.is_empty() {
            OS_EMPTY.to_owned()
        } else {
            os_section
        };
        fields.push(HelpField::block(OS_SECTION, os_section));
        fields.push(HelpField::block(TIPS_SECTION, TIPS));

        Self {
            title: HELP_TITLE.to_owned(),
            description: HELP_DESCRIPTION.to_owned(),
            fields,
            footer: format!("Total instances: {total} • Need help? Contact staff."),
        }
    }

    /// Look up a section by name
    pub fn field(&self, name: &str) -> Option<&HelpField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn to_embed(&self, colour: u32) -> CreateEmbed {
        let fields = self
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.value.clone(), field.inline));

        CreateEmbed::new()
            .title(&self.title)
            .description(&self.description)
            .colour(colour)
            .fields(fields)
            .footer(CreateEmbedFooter::new(&self.footer))
    }
}

impl Display for HelpDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.description)?;
        for field in &self.fields {
            writeln!(f)?;
            writeln!(f, "{}", field.name)?;
            writeln!(f, "{}", field.value)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.footer)
    }
}

/// `• name — description`, one command per line
pub fn format_commands(commands: &[CommandEntry]) -> String {
    commands
        .iter()
        .map(|command| format!("• {} — {}", command.name, command.description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per OS, in catalog order
pub fn format_os_options(options: &[OsOption]) -> String {
    options.iter().map(OsOption::help_line).collect::<Vec<_>>().join("\n")
}

/// Resolves everything the help depends on and assembles it
#[derive(Clone)]
pub struct HelpViewBuilder {
    permissions: Arc<dyn PermissionClassifier>,
    super_users: SuperUsers,
    os_registry: Arc<dyn OsRegistry>,
    instances: Arc<dyn InstanceRegistry>,
}

impl HelpViewBuilder {
    pub fn new(
        permissions: Arc<dyn PermissionClassifier>,
        super_users: SuperUsers,
        os_registry: Arc<dyn OsRegistry>,
        instances: Arc<dyn InstanceRegistry>,
    ) -> Self {
        Self {
            permissions,
            super_users,
            os_registry,
            instances,
        }
    }

    /// Build the help for `requester`. Never fails.
    #[instrument(skip_all, fields(requester = %requester.id))]
    pub async fn build(&self, requester: &Requester) -> HelpDocument {
        let access = self.access(requester).await;
        let os_section = self.os_section().await;
        let total = self.instance_total().await;
        debug!("Building help with {access:?}, total instances: {total}");

        HelpDocument::assemble(access, os_section, total)
    }

    pub async fn access(&self, requester: &Requester) -> Access {
        let is_admin = match self.permissions.is_admin(requester).await {
            Ok(is_admin) => is_admin,
            Err(err) => {
                warn!("Admin check failed for {}, treating as non-admin: {err}", requester.id);
                false
            }
        };

        Access {
            is_admin,
            is_super: self.super_users.contains(requester.id),
        }
    }

    pub async fn os_section(&self) -> String {
        match self.os_registry.entries().await {
            Ok(entries) => format_os_options(&entries),
            Err(err) => {
                warn!("Could not read OS catalog: {err}");
                OS_UNAVAILABLE.to_owned()
            }
        }
    }

    pub async fn instance_total(&self) -> InstanceTotal {
        match self.instances.count().await {
            Ok(total) => InstanceTotal::Known(total),
            Err(err) => {
                warn!("Could not count instances: {err}");
                InstanceTotal::Unknown
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use poise::{
        async_trait,
        serenity_prelude::{self, RoleId, UserId},
    };

    use super::*;
    use crate::Error;

    pub(crate) fn lookup_failed() -> Error {
        Error::Serenity(serenity_prelude::Error::Other("lookup failed"))
    }

    pub(crate) struct FixedAdmin(pub Option<bool>);

    #[async_trait]
    impl PermissionClassifier for FixedAdmin {
        async fn is_admin(&self, _requester: &Requester) -> Result<bool, Error> {
            self.0.ok_or_else(lookup_failed)
        }
    }

    pub(crate) struct FixedOs(pub Option<Vec<OsOption>>);

    #[async_trait]
    impl OsRegistry for FixedOs {
        async fn entries(&self) -> Result<Vec<OsOption>, Error> {
            self.0.clone().ok_or(Error::OsCatalogUnavailable)
        }
    }

    pub(crate) struct FixedCount(pub Option<usize>);

    #[async_trait]
    impl InstanceRegistry for FixedCount {
        async fn count(&self) -> Result<usize, Error> {
            self.0.ok_or_else(lookup_failed)
        }
    }

    pub(crate) const REQUESTER_ID: u64 = 100;

    pub(crate) fn requester() -> Requester {
        Requester::new(UserId::new(REQUESTER_ID), vec![RoleId::new(1)])
    }

    pub(crate) fn ubuntu() -> OsOption {
        OsOption::new("ubuntu", "🐧", "Ubuntu", "Stable")
    }

    pub(crate) fn builder(
        is_admin: Option<bool>,
        super_users: SuperUsers,
        os: Option<Vec<OsOption>>,
        count: Option<usize>,
    ) -> HelpViewBuilder {
        HelpViewBuilder::new(
            Arc::new(FixedAdmin(is_admin)),
            super_users,
            Arc::new(FixedOs(os)),
            Arc::new(FixedCount(count)),
        )
    }

    fn names(document: &HelpDocument) -> Vec<&str> {
        document.fields.iter().map(|field| field.name.as_str()).collect()
    }

    #[tokio::test]
    async fn plain_user_sees_only_public_sections() {
        let builder = builder(Some(false), SuperUsers::default(), Some(vec![ubuntu()]), Some(5));
        let document = builder.build(&requester()).await;

        assert_eq!(
            names(&document),
            vec![EXAMPLES_SECTION, USER_SECTION, EXTRAS_SECTION, OS_SECTION, TIPS_SECTION]
        );
        assert!(document.field(ADMIN_SECTION).is_none());
        assert!(document.field(SUPER_SECTION).is_none());
        assert!(document.fields.iter().all(|field| !field.inline));
    }

    #[tokio::test]
    async fn admin_sees_admin_commands_in_order() {
        let builder = builder(Some(true), SuperUsers::default(), Some(vec![ubuntu()]), Some(5));
        let document = builder.build(&requester()).await;

        assert_eq!(
            document.field(ADMIN_SECTION).unwrap().value,
            "• `/deploy user:@u os:<os>` — [ADMIN] Create instance for a user\n\
             • `/list-all` — [ADMIN] List all instances with usage\n\
             • `/top_usage [metric] [limit]` — [ADMIN] Top containers by CPU/RAM\n\
             • `/delete-user-container <id>` — [ADMIN] Force delete any container\n\
             • `/bulk_stop scope:all` — [ADMIN] Stop many containers (all)\n\
             • `/vacuum_db` — [ADMIN] Clean broken DB entries\n\
             • `/transfer_vps <id> @new_owner` — [ADMIN/Owner] Transfer VPS ownership"
        );
        assert!(document.field(SUPER_SECTION).is_none());
    }

    #[tokio::test]
    async fn super_user_sees_super_section() {
        let super_users = SuperUsers::new(Some([UserId::new(REQUESTER_ID)]));
        let builder = builder(Some(false), super_users, Some(vec![ubuntu()]), Some(5));
        let document = builder.build(&requester()).await;

        let section = document.field(SUPER_SECTION).unwrap();
        assert_eq!(
            section.value,
            "• `/add_admin @member` — [SUPER] Grant bot-admin role\n\
             • `/remove_admin @member` — [SUPER] Revoke bot-admin role"
        );
        assert!(document.field(ADMIN_SECTION).is_none());
    }

    #[tokio::test]
    async fn admin_and_super_sections_keep_their_order() {
        let super_users = SuperUsers::new(Some([UserId::new(REQUESTER_ID)]));
        let builder = builder(Some(true), super_users, Some(vec![ubuntu()]), Some(5));
        let document = builder.build(&requester()).await;

        assert_eq!(
            names(&document),
            vec![
                EXAMPLES_SECTION,
                USER_SECTION,
                EXTRAS_SECTION,
                ADMIN_SECTION,
                SUPER_SECTION,
                OS_SECTION,
                TIPS_SECTION
            ]
        );
    }

    #[tokio::test]
    async fn failing_admin_check_counts_as_plain_user() {
        let builder = builder(None, SuperUsers::default(), Some(vec![ubuntu()]), Some(5));
        let document = builder.build(&requester()).await;

        assert!(document.field(ADMIN_SECTION).is_none());
    }

    #[tokio::test]
    async fn other_users_are_not_super() {
        let super_users = SuperUsers::new(Some([UserId::new(REQUESTER_ID + 1)]));
        let builder = builder(Some(false), super_users, Some(vec![ubuntu()]), Some(5));

        assert!(!builder.access(&requester()).await.is_super);
    }

    #[tokio::test]
    async fn unavailable_os_catalog() {
        let builder = builder(Some(false), SuperUsers::default(), None, Some(5));
        let document = builder.build(&requester()).await;

        assert_eq!(document.field(OS_SECTION).unwrap().value, "N/A");
    }

    #[tokio::test]
    async fn empty_os_catalog() {
        let builder = builder(Some(false), SuperUsers::default(), Some(vec![]), Some(5));
        let document = builder.build(&requester()).await;

        assert_eq!(document.field(OS_SECTION).unwrap().value, "—");
    }

    #[tokio::test]
    async fn unknown_instance_count() {
        let builder = builder(Some(false), SuperUsers::default(), Some(vec![ubuntu()]), None);
        let document = builder.build(&requester()).await;

        assert!(document.footer.contains("Total instances: ?"));
    }

    #[tokio::test]
    async fn plain_user_end_to_end() {
        let builder = builder(Some(false), SuperUsers::default(), Some(vec![ubuntu()]), Some(5));
        let document = builder.build(&requester()).await;

        assert_eq!(document.title, HELP_TITLE);
        assert_eq!(document.description, HELP_DESCRIPTION);
        assert_eq!(document.footer, "Total instances: 5 • Need help? Contact staff.");
        assert_eq!(document.field(OS_SECTION).unwrap().value, "🐧 ubuntu — Ubuntu: Stable");
        assert_eq!(
            document.field(EXTRAS_SECTION).unwrap().value,
            "• `/bulk_stop scope:mine` — Stop all *your* containers"
        );
        assert_eq!(document.field(USER_SECTION).unwrap().value.lines().count(), 14);
    }

    #[tokio::test]
    async fn building_twice_gives_the_same_document() {
        let os = vec![ubuntu(), OsOption::new("debian", "🌀", "Debian", "Rock solid")];
        let builder = builder(Some(true), SuperUsers::default(), Some(os), Some(12));

        let first = builder.build(&requester()).await;
        let second = builder.build(&requester()).await;
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn os_lines_keep_catalog_order() {
        let os = vec![OsOption::new("debian", "🌀", "Debian", "Rock solid"), ubuntu()];
        assert_eq!(
            format_os_options(&os),
            "🌀 debian — Debian: Rock solid\n🐧 ubuntu — Ubuntu: Stable"
        );
    }

    #[test]
    fn oversized_os_catalog_is_cut_at_a_line() {
        let os: Vec<_> = (0..60)
            .map(|n| OsOption::new(format!("os{n}"), "💿", format!("Distro {n}"), "A rather verbose description"))
            .collect();
        let lines = format_os_options(&os);
        assert!(lines.chars().count() > FIELD_VALUE_LIMIT);

        let document = HelpDocument::assemble(Access::default(), lines, InstanceTotal::Known(0));
        let value = &document.field(OS_SECTION).unwrap().value;

        assert!(value.chars().count() <= FIELD_VALUE_LIMIT);
        assert!(value.starts_with("💿 os0 — Distro 0: A rather verbose description\n"));
        assert!(value.ends_with("description\n…"));
    }

    #[test]
    fn short_values_are_untouched() {
        let value = "🐧 ubuntu — Ubuntu: Stable".to_owned();
        assert_eq!(fit_field_value(value.clone()), value);
    }

    #[test]
    fn embed_carries_the_whole_document() {
        let access = Access {
            is_admin: true,
            is_super: true,
        };
        let document = HelpDocument::assemble(access, ubuntu().help_line(), InstanceTotal::Known(5));
        let embed = serde_json::to_value(document.to_embed(0x5865F2)).unwrap();

        assert_eq!(embed["title"], HELP_TITLE);
        assert_eq!(embed["description"], HELP_DESCRIPTION);
        assert_eq!(embed["color"], 0x5865F2);
        assert_eq!(embed["footer"]["text"], "Total instances: 5 • Need help? Contact staff.");

        let fields = embed["fields"].as_array().unwrap();
        let names: Vec<_> = fields.iter().map(|field| field["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                EXAMPLES_SECTION,
                USER_SECTION,
                EXTRAS_SECTION,
                ADMIN_SECTION,
                SUPER_SECTION,
                OS_SECTION,
                TIPS_SECTION
            ]
        );
        assert!(fields.iter().all(|field| field["inline"] == false));
        assert_eq!(fields[5]["value"], "🐧 ubuntu — Ubuntu: Stable");
    }

    #[test]
    fn plain_text_rendering() {
        let document = HelpDocument::assemble(Access::default(), String::new(), InstanceTotal::Known(0));
        let text = document.to_string();

        assert!(text.starts_with(HELP_TITLE));
        assert!(text.contains(&format!("{OS_SECTION}\n—\n")));
        assert!(text.ends_with("Total instances: 0 • Need help? Contact staff."));
    }
}
