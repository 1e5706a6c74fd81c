use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
