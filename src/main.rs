use anyhow::{Context, Result, anyhow};
use std::process;

mod application;
mod infrastructure;
mod interfaces;

use application::poller::{LetterFeed, PollLoop, TokioPacer};
use application::ranking::Ranker;
use application::words::WordIndex;
use infrastructure::discord::{DiscordClient, parse_channel_id};
use infrastructure::logging;
use infrastructure::settings::{self, DEFAULT_CHANNEL_URL, FeedKind, Settings};
use infrastructure::wordlist;
use interfaces::console::{ConsoleSink, ConsoleUI};
use interfaces::feed::{DiscordFeed, FileFeed};

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

async fn ensure_word_list(settings: &Settings) -> Result<()> {
    if settings.words_file.is_file() {
        return Ok(());
    }
    ConsoleUI::print_info(&format!(
        "No word list at {}, downloading one.",
        settings.words_file.display()
    ));
    let url = settings::prompt_line("Wordlist URL?", Some(settings.words_url.as_str()))
        .await?
        .unwrap_or_else(|| settings.words_url.clone());

    ConsoleUI::print_info(&format!("Downloading wordlist from {}...", url));
    wordlist::download(&url, &settings.words_file)
        .await
        .context("failed to download wordlist")?;
    ConsoleUI::print_success(&format!(
        "Wordlist saved to {}",
        settings.words_file.display()
    ));
    Ok(())
}

async fn discord_feed(settings: &Settings) -> Result<DiscordFeed> {
    let token = settings
        .discord_token
        .clone()
        .ok_or_else(|| {
            anyhow!("DISCORD_TOKEN must be set to read the channel (bot tokens as \"Bot <token>\")")
        })?;
    let channel_url = settings::get_config(
        &settings.channel_file,
        "Discord Channel URL:",
        Some(DEFAULT_CHANNEL_URL),
    )
    .await?
    .ok_or_else(|| anyhow!("a Discord channel URL is required to run"))?;
    let channel_id = parse_channel_id(&channel_url).ok_or_else(|| {
        anyhow!(
            "'{}' does not name a Discord channel (expected https://discord.com/channels/<server>/<channel>); fix or delete {}",
            channel_url,
            settings.channel_file.display()
        )
    })?;

    log::info!("feed.discord: watching channel={}", channel_id);
    let client = DiscordClient::new(token, channel_id)?;
    Ok(DiscordFeed::new(client))
}

fn file_feed(settings: &Settings) -> Result<FileFeed> {
    let path = settings
        .feed_file
        .clone()
        .ok_or_else(|| anyhow!("YAWC_FEED_FILE must be set when YAWC_FEED=file"))?;
    log::info!("feed.file: watching path={}", path.display());
    Ok(FileFeed::new(path))
}

/// Polls until interrupted. Returns the process exit code.
async fn monitor<F: LetterFeed>(feed: F, index: WordIndex, settings: &Settings) -> i32 {
    let mut poller = PollLoop::new(feed, ConsoleSink::new(), TokioPacer, index)
        .with_ranker(Ranker::new(settings.preview_size, settings.top_size))
        .with_interval(settings.poll_interval);

    ConsoleUI::print_header("Monitoring for new letters");
    ConsoleUI::print_info("Press Ctrl+C to exit.");

    match poller.run(shutdown_signal()).await {
        Ok(()) => {
            ConsoleUI::print_info("Exiting...");
            0
        }
        Err(e) => {
            ConsoleUI::print_error(&format!("An unexpected error occurred: {}", e));
            1
        }
    }
}

async fn run() -> Result<i32> {
    let settings = Settings::from_env()?;
    log::info!(
        "settings: app_dir={} feed={:?} poll_ms={}",
        settings.app_dir.display(),
        settings.feed,
        settings.poll_interval.as_millis()
    );

    ensure_word_list(&settings).await?;
    let index = WordIndex::load(&settings.words_file).await?;

    let code = match settings.feed {
        FeedKind::Discord => monitor(discord_feed(&settings).await?, index, &settings).await,
        FeedKind::File => monitor(file_feed(&settings)?, index, &settings).await,
    };
    Ok(code)
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    logging::init();
    ConsoleUI::print_banner();

    let code = match run().await {
        Ok(code) => code,
        Err(e) => {
            log::error!("startup failed: {:#}", e);
            ConsoleUI::print_error(&format!("{:#}", e));
            1
        }
    };
    process::exit(code);
}
