use crate::application::words::Token;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// Nothing usable this cycle. The loop treats it as "no token".
    #[error("extraction failed: {0}")]
    Extraction(String),
    /// The feed can no longer serve at all (bad credentials, channel gone).
    #[error("feed disconnected: {0}")]
    Disconnected(String),
}

#[derive(Debug, Error)]
#[error("dispatch failed: {0}")]
pub struct DispatchError(pub String);

#[derive(Debug, Error)]
pub enum PollError {
    #[error("unrecognized failure: {0}")]
    Unrecognized(String),
}

/// Source of the current letters.
#[async_trait]
pub trait LetterFeed: Send {
    async fn extract_current_token(&mut self) -> Result<Option<Token>, FeedError>;

    /// Releases whatever the feed holds open. Called once when the loop ends.
    async fn close(&mut self) {}
}

/// Where results go. Neither call is acknowledged back to the loop beyond
/// the dispatch result, which is only logged.
pub trait WordSink {
    fn announce(&mut self, _token: &Token) {}

    fn display(&mut self, preview: &[String]);

    fn publish(&mut self, word: &str) -> Result<(), DispatchError>;
}

#[async_trait]
pub trait Pacer: Send {
    async fn pause(&mut self, interval: Duration);
}

pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&mut self, interval: Duration) {
        tokio::time::sleep(interval).await;
    }
}

/// What a single cycle ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cycle {
    Ignored,
    Unchanged,
    NoSelection,
    Selected(String),
    DispatchFailed(String),
}
