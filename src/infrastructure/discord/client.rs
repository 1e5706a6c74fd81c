use super::config::{DISCORD_API_BASE, HTTP_TIMEOUT};
use super::types::DiscordMessage;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum DiscordError {
    /// Discord refused the request outright; retrying will not help.
    #[error("discord rejected the request: {0}{hint}", hint = rejection_hint(*.0))]
    Rejected(StatusCode),
    #[error("discord returned {0}")]
    Status(StatusCode),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl DiscordError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, DiscordError::Rejected(_))
    }
}

fn rejection_hint(status: StatusCode) -> &'static str {
    if status == StatusCode::UNAUTHORIZED {
        " (check DISCORD_TOKEN; bot tokens need the \"Bot \" prefix)"
    } else {
        ""
    }
}

fn classify_status(status: StatusCode) -> Option<DiscordError> {
    if status.is_success() {
        return None;
    }
    Some(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
            DiscordError::Rejected(status)
        }
        other => DiscordError::Status(other),
    })
}

pub struct DiscordClient {
    http: Client,
    token: String,
    channel_id: String,
}

impl DiscordClient {
    pub fn new(token: String, channel_id: String) -> Result<Self, DiscordError> {
        let http = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .tcp_keepalive(HTTP_TIMEOUT)
            .build()?;
        Ok(DiscordClient {
            http,
            token,
            channel_id,
        })
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Most recent messages in the channel, newest first.
    pub async fn recent_messages(&self, limit: u8) -> Result<Vec<DiscordMessage>, DiscordError> {
        let url = format!(
            "{}/channels/{}/messages?limit={}",
            DISCORD_API_BASE, self.channel_id, limit
        );
        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, self.token.as_str())
            .send()
            .await?;

        if let Some(err) = classify_status(response.status()) {
            return Err(err);
        }

        Ok(response.json::<Vec<DiscordMessage>>().await?)
    }
}

/// Pulls the channel id out of `https://discord.com/channels/<guild>/<channel>`.
/// A bare numeric id is accepted as-is.
pub fn parse_channel_id(input: &str) -> Option<String> {
    let input = input.trim();
    if !input.is_empty() && input.chars().all(|ch| ch.is_ascii_digit()) {
        return Some(input.to_string());
    }

    let url = Url::parse(input).ok()?;
    let host = url.host_str()?;
    if host != "discord.com" && !host.ends_with(".discord.com") {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        ["channels", _guild, channel, ..] if channel.chars().all(|ch| ch.is_ascii_digit()) => {
            Some(channel.to_string())
        }
        _ => None,
    }
}
