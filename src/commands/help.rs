use tracing::{error, instrument};

use crate::{
    constants::HELP_FAILED,
    help_view::HelpViewBuilder,
    permissions::Requester,
    response::ResponseChannel,
    Context, Error,
};

// slash only, prefix replies can't be ephemeral
/// ℹ️ Show full help with grouped sections and examples
#[poise::command(slash_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let requester = Requester::from_context(ctx).await;
    send_help(ctx.data().help(), &requester, &ctx).await;
    Ok(())
}

/// Build the help for `requester` and send it privately.
///
/// If the help cannot be delivered a short notice is sent instead. Failing to
/// send the notice is only logged.
#[instrument(skip_all, fields(requester = %requester.id))]
pub async fn send_help(builder: &HelpViewBuilder, requester: &Requester, channel: &impl ResponseChannel) {
    let document = builder.build(requester).await;

    let Err(err) = channel.send_private(&document).await else {
        return;
    };
    error!("Could not send help: {err}");

    if let Err(err) = channel.send_private_notice(HELP_FAILED).await {
        error!("Could not send help error notice: {err}");
    }
}
