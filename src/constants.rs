//! Constants
//!
//! Static help text and command listings. See invidividual items' description

/// A command as it is listed in the help embed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
}

const fn entry(name: &'static str, description: &'static str) -> CommandEntry {
    CommandEntry { name, description }
}

/// Used when the settings don't specify a colour
pub const DEFAULT_EMBED_COLOUR: u32 = 0x5865F2;

pub const HELP_TITLE: &str = "✨ Cloud Instance Bot — Help";
pub const HELP_DESCRIPTION: &str =
    "All commands grouped by purpose. Use slash-commands in any channel where the bot is allowed.";

pub const EXAMPLES_SECTION: &str = "🚀 Examples";
pub const USER_SECTION: &str = "👤 User Commands";
pub const EXTRAS_SECTION: &str = "🧰 Extras";
pub const ADMIN_SECTION: &str = "🛡️ Admin Commands";
pub const SUPER_SECTION: &str = "👑 Super Users";
pub const OS_SECTION: &str = "🖥️ Available OS";
pub const TIPS_SECTION: &str = "📎 Tips & Policies";

/// Shown instead of the OS list when the catalog could not be read
pub const OS_UNAVAILABLE: &str = "N/A";
/// Shown instead of the OS list when the catalog is empty
pub const OS_EMPTY: &str = "—";

/// Discord rejects embeds with longer field values
pub const FIELD_VALUE_LIMIT: usize = 1024;

/// Sent to the requester when the help embed could not be delivered
pub const HELP_FAILED: &str = "❌ An error occurred while building help.";

pub const EXAMPLES: &str = "\
**Quick Examples**
• Create VPS (admin): ` /deploy user:@Majed os:ubuntu `
• Start VPS: ` /start 1a2b3c4d `
• Refresh SSH: ` /regen-ssh 1a2b `
• Transfer VPS: ` /transfer_vps 1a2b3c4d @NewUser `
• Top by RAM (admin): ` /top_usage metric:ram limit:10 `";

pub const TIPS: &str = "\
**Notes**
• **IDs**: You can pass the first 4+ characters (e.g., `1a2b`).
• **Ownership**: Most actions require you to own the VPS (or be admin).
• **Auto-stop**: Use `/set_autostop` to save resources.
• **Aliases**: Use `/rename_vps` then look for it in `/list` and UI panels.
• **Logs**: Use `/logs <id> [lines]` to debug your VPS quickly.";

pub const USER_COMMANDS: &[CommandEntry] = &[
    entry("`/list`", "List your instances"),
    entry("`/my_usage`", "CPU/RAM & status for your VPSs"),
    entry("`/send_ssh <id>`", "DM yourself the SSH (tmate) command"),
    entry("`/start <id>`", "Start your instance"),
    entry("`/stop <id>`", "Stop your instance"),
    entry("`/restart <id>`", "Restart your instance"),
    entry("`/regen-ssh <id>`", "Regenerate SSH connection"),
    entry("`/remove <id>`", "Delete your instance (permanent)"),
    entry("`/rename_vps <id> <alias>`", "Give your VPS an alias"),
    entry("`/logs <id> [lines]`", "Show last N log lines"),
    entry("`/set_autostop <id> <hours>`", "Auto-stop after idle (0=disable)"),
    entry("`/resources`", "Host machine resources"),
    entry("`/ping`", "Bot latency"),
    entry("`/manage_vps <id>`", "GUI to manage your VPS"),
];

pub const ADMIN_COMMANDS: &[CommandEntry] = &[
    entry("`/deploy user:@u os:<os>`", "[ADMIN] Create instance for a user"),
    entry("`/list-all`", "[ADMIN] List all instances with usage"),
    entry("`/top_usage [metric] [limit]`", "[ADMIN] Top containers by CPU/RAM"),
    entry("`/delete-user-container <id>`", "[ADMIN] Force delete any container"),
    entry("`/bulk_stop scope:all`", "[ADMIN] Stop many containers (all)"),
    entry("`/vacuum_db`", "[ADMIN] Clean broken DB entries"),
    entry("`/transfer_vps <id> @new_owner`", "[ADMIN/Owner] Transfer VPS ownership"),
];

/// Commands that look administrative but work for everybody
pub const EXTRA_COMMANDS: &[CommandEntry] = &[entry("`/bulk_stop scope:mine`", "Stop all *your* containers")];

pub const SUPER_COMMANDS: &[CommandEntry] = &[
    entry("`/add_admin @member`", "[SUPER] Grant bot-admin role"),
    entry("`/remove_admin @member`", "[SUPER] Revoke bot-admin role"),
];
