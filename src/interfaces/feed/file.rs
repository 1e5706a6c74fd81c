use super::scraper;
use crate::application::poller::{FeedError, LetterFeed};
use crate::application::words::Token;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Re-reads a text file on every poll. Messages are separated by blank lines,
/// newest at the bottom.
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: PathBuf) -> Self {
        FileFeed { path }
    }
}

pub fn letters_in_text(text: &str) -> Option<Token> {
    let mut blocks: Vec<String> = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push_str(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    scraper::latest_letters(blocks.iter().rev())
}

#[async_trait]
impl LetterFeed for FileFeed {
    async fn extract_current_token(&mut self) -> Result<Option<Token>, FeedError> {
        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| FeedError::Extraction(format!("{}: {}", self.path.display(), e)))?;
        Ok(letters_in_text(&text))
    }
}
