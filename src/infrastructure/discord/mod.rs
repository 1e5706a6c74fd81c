pub mod client;
pub mod config;
pub mod types;

pub use client::{DiscordClient, DiscordError, parse_channel_id};
pub use types::DiscordMessage;
