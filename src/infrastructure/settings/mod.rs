pub mod prompt;

use crate::application::poller::config::DEFAULT_POLL_INTERVAL;
use crate::application::ranking::config::{DEFAULT_PREVIEW_SIZE, DEFAULT_TOP_SIZE};
use crate::infrastructure::wordlist::DEFAULT_WORDS_URL;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub use prompt::{get_config, prompt_line};

pub const APP_DIR_NAME: &str = "YAWC";
pub const WORD_FILE_NAME: &str = "words.txt";
pub const CHANNEL_FILE_NAME: &str = "channel.txt";
pub const DEFAULT_CHANNEL_URL: &str = "https://discord.com/app";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot locate an application directory: set YAWC_HOME")]
    NoAppDir,
    #[error("unknown feed '{0}' in YAWC_FEED (expected 'discord' or 'file')")]
    UnknownFeed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedKind {
    Discord,
    File,
}

impl FromStr for FeedKind {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "discord" => Ok(FeedKind::Discord),
            "file" => Ok(FeedKind::File),
            other => Err(SettingsError::UnknownFeed(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub app_dir: PathBuf,
    pub words_file: PathBuf,
    pub words_url: String,
    pub channel_file: PathBuf,
    pub feed: FeedKind,
    pub feed_file: Option<PathBuf>,
    pub discord_token: Option<String>,
    pub poll_interval: Duration,
    pub preview_size: usize,
    pub top_size: usize,
}

impl Settings {
    pub fn from_env() -> Result<Settings, SettingsError> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Settings, SettingsError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let app_dir = if let Some(home) = get("YAWC_HOME") {
            PathBuf::from(home)
        } else if let Some(local) = get("LOCALAPPDATA") {
            PathBuf::from(local).join(APP_DIR_NAME)
        } else if let Some(home) = get("HOME") {
            PathBuf::from(home).join(".yawc")
        } else {
            return Err(SettingsError::NoAppDir);
        };

        let words_file = get("YAWC_WORDS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| app_dir.join(WORD_FILE_NAME));
        let feed = get("YAWC_FEED").unwrap_or_default().parse::<FeedKind>()?;
        let poll_ms = parse_or(
            "YAWC_POLL_MS",
            get("YAWC_POLL_MS"),
            DEFAULT_POLL_INTERVAL.as_millis() as u64,
        );

        Ok(Settings {
            channel_file: app_dir.join(CHANNEL_FILE_NAME),
            words_file,
            words_url: get("YAWC_WORDS_URL").unwrap_or_else(|| DEFAULT_WORDS_URL.to_string()),
            feed,
            feed_file: get("YAWC_FEED_FILE").map(PathBuf::from),
            discord_token: get("DISCORD_TOKEN"),
            poll_interval: Duration::from_millis(poll_ms),
            preview_size: parse_or(
                "YAWC_PREVIEW_SIZE",
                get("YAWC_PREVIEW_SIZE"),
                DEFAULT_PREVIEW_SIZE,
            ),
            top_size: parse_or("YAWC_TOP_SIZE", get("YAWC_TOP_SIZE"), DEFAULT_TOP_SIZE),
            app_dir,
        })
    }
}

/// Positive integer from the environment, or `default` with a warning when
/// the value is garbage.
fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + PartialOrd + Default + Copy + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) if value > T::default() => value,
        _ => {
            log::warn!(
                "settings: ignoring {}={:?}, using default {}",
                key,
                raw,
                default
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, SettingsError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_under_home() {
        let s = settings(&[("HOME", "/home/player")]).unwrap();
        assert_eq!(s.app_dir, PathBuf::from("/home/player/.yawc"));
        assert_eq!(s.words_file, PathBuf::from("/home/player/.yawc/words.txt"));
        assert_eq!(s.channel_file, PathBuf::from("/home/player/.yawc/channel.txt"));
        assert_eq!(s.words_url, DEFAULT_WORDS_URL);
        assert_eq!(s.feed, FeedKind::Discord);
        assert_eq!(s.poll_interval, Duration::from_secs(1));
        assert_eq!(s.preview_size, 8);
        assert_eq!(s.top_size, 4);
        assert!(s.discord_token.is_none());
    }

    #[test]
    fn app_dir_precedence() {
        let s = settings(&[("HOME", "/h"), ("LOCALAPPDATA", "C:/Local")]).unwrap();
        assert_eq!(s.app_dir, PathBuf::from("C:/Local").join("YAWC"));

        let s = settings(&[("HOME", "/h"), ("YAWC_HOME", "/srv/yawc")]).unwrap();
        assert_eq!(s.app_dir, PathBuf::from("/srv/yawc"));

        assert!(matches!(settings(&[]), Err(SettingsError::NoAppDir)));
    }

    #[test]
    fn overrides_are_read() {
        let s = settings(&[
            ("YAWC_HOME", "/y"),
            ("YAWC_FEED", "File"),
            ("YAWC_FEED_FILE", "/tmp/feed.txt"),
            ("YAWC_WORDS_FILE", "/w.txt"),
            ("YAWC_POLL_MS", "250"),
            ("YAWC_TOP_SIZE", "6"),
            ("DISCORD_TOKEN", " abc.def "),
        ])
        .unwrap();
        assert_eq!(s.feed, FeedKind::File);
        assert_eq!(s.feed_file, Some(PathBuf::from("/tmp/feed.txt")));
        assert_eq!(s.words_file, PathBuf::from("/w.txt"));
        assert_eq!(s.poll_interval, Duration::from_millis(250));
        assert_eq!(s.top_size, 6);
        assert_eq!(s.discord_token.as_deref(), Some("abc.def"));
    }

    #[test]
    fn bad_numbers_fall_back_to_defaults() {
        let s = settings(&[
            ("YAWC_HOME", "/y"),
            ("YAWC_POLL_MS", "soon"),
            ("YAWC_PREVIEW_SIZE", "0"),
            ("YAWC_TOP_SIZE", "-3"),
        ])
        .unwrap();
        assert_eq!(s.poll_interval, Duration::from_secs(1));
        assert_eq!(s.preview_size, 8);
        assert_eq!(s.top_size, 4);
    }

    #[test]
    fn unknown_feed_is_an_error() {
        let err = settings(&[("YAWC_HOME", "/y"), ("YAWC_FEED", "irc")]).unwrap_err();
        assert!(matches!(err, SettingsError::UnknownFeed(ref name) if name == "irc"));
    }
}
