use super::scraper;
use crate::application::poller::{FeedError, LetterFeed};
use crate::application::words::Token;
use crate::infrastructure::discord::config::MESSAGE_FETCH_LIMIT;
use crate::infrastructure::discord::{DiscordClient, DiscordError, DiscordMessage};
use async_trait::async_trait;

/// Reads the letters from the latest Word Bomb embed in a Discord channel.
pub struct DiscordFeed {
    client: DiscordClient,
    limit: u8,
}

impl DiscordFeed {
    pub fn new(client: DiscordClient) -> Self {
        DiscordFeed {
            client,
            limit: MESSAGE_FETCH_LIMIT,
        }
    }
}

/// Messages come newest first; embeds inside one message are scanned last
/// to first.
pub fn letters_in_messages(messages: &[DiscordMessage]) -> Option<Token> {
    scraper::latest_letters(
        messages
            .iter()
            .flat_map(|message| message.embeds.iter().rev())
            .map(|embed| embed.text_content()),
    )
}

impl From<DiscordError> for FeedError {
    fn from(err: DiscordError) -> Self {
        if err.is_fatal() {
            FeedError::Disconnected(err.to_string())
        } else {
            FeedError::Extraction(err.to_string())
        }
    }
}

#[async_trait]
impl LetterFeed for DiscordFeed {
    async fn extract_current_token(&mut self) -> Result<Option<Token>, FeedError> {
        let messages = self.client.recent_messages(self.limit).await?;
        let token = letters_in_messages(&messages);
        log::trace!(
            "feed.discord channel={} messages={} newest={} token={:?}",
            self.client.channel_id(),
            messages.len(),
            messages.first().map(|m| m.id.as_str()).unwrap_or("-"),
            token
        );
        Ok(token)
    }

    async fn close(&mut self) {
        log::info!("feed.discord: released channel={}", self.client.channel_id());
    }
}
