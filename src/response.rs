//! Where replies to the requester go.

use poise::{async_trait, CreateReply};

use crate::{help_view::HelpDocument, Context, Error};

/// Sends replies only the requester can see
#[async_trait]
pub trait ResponseChannel: Send + Sync {
    async fn send_private(&self, document: &HelpDocument) -> Result<(), Error>;

    /// Plain text reply, used when the document could not be delivered
    async fn send_private_notice(&self, content: &str) -> Result<(), Error>;
}

#[async_trait]
impl<'a> ResponseChannel for Context<'a> {
    async fn send_private(&self, document: &HelpDocument) -> Result<(), Error> {
        let colour = self.data().embed_colour();
        let reply = CreateReply::default()
            .embed(document.to_embed(colour))
            .ephemeral(true);
        self.send(reply).await?;
        Ok(())
    }

    async fn send_private_notice(&self, content: &str) -> Result<(), Error> {
        let reply = CreateReply::default().content(content).ephemeral(true);
        self.send(reply).await?;
        Ok(())
    }
}
