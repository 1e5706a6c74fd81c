pub mod discord;
pub mod file;
pub mod scraper;

pub use discord::DiscordFeed;
pub use file::FileFeed;
