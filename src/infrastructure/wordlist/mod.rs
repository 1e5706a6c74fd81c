use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::fs;

pub const DEFAULT_WORDS_URL: &str = "https://raw.githubusercontent.com/first20hours/google-10000-english/master/google-10000-english-usa-no-swears.txt";
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches a word list and writes it to `dest`, creating parent directories.
/// Returns the number of bytes written.
pub async fn download(url: &str, dest: &Path) -> Result<usize> {
    let t0 = Instant::now();
    let client = Client::builder().timeout(DOWNLOAD_TIMEOUT).build()?;

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("requesting {}", url))?;
    if !response.status().is_success() {
        return Err(anyhow!("wordlist download failed with status: {}", response.status()));
    }
    let body = response.text().await?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(dest, body.as_bytes())
        .await
        .with_context(|| format!("writing {}", dest.display()))?;

    log::info!(
        "words.downloaded bytes={} url={} perf.download_ms={}",
        body.len(),
        url,
        t0.elapsed().as_millis()
    );
    Ok(body.len())
}
