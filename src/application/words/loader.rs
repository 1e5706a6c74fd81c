use super::index::WordIndex;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
#[error("word list unavailable at {}: {source}", path.display())]
pub struct SourceUnavailable {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl WordIndex {
    /// Reads the word list once. Later edits to the file are not picked up.
    pub async fn load(path: impl AsRef<Path>) -> Result<WordIndex, SourceUnavailable> {
        let path = path.as_ref();
        let t0 = Instant::now();

        let raw = fs::read(path).await.map_err(|source| SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let text = decode(&raw);
        if let Cow::Owned(_) = text {
            log::warn!(
                "words: {} is not valid UTF-8, bad bytes were replaced with U+FFFD",
                path.display()
            );
        }
        let index = WordIndex::from_lines(text.lines());

        log::info!(
            "words.loaded={} path={} perf.load_us={}",
            index.len(),
            path.display(),
            t0.elapsed().as_micros()
        );
        if index.is_empty() {
            log::warn!(
                "words: {} has no entries, every search will come up empty",
                path.display()
            );
        }

        Ok(index)
    }
}

/// Lossy UTF-8 decode; `Cow::Owned` means something was replaced.
fn decode(raw: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(raw)
}
