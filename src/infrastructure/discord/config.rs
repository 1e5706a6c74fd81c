use std::time::Duration;

pub const DISCORD_API_BASE: &str = "https://discord.com/api/v10";
pub const MESSAGE_FETCH_LIMIT: u8 = 20;
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(15);
