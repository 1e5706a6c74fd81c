use std::io::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{Level, LevelFilter};
use pretty_env_logger::env_logger;

/// Set while a prompt owns the terminal.
static PROMPT_ACTIVE: AtomicBool = AtomicBool::new(false);

const NOISY_DEPENDENCIES: [&str; 3] = ["reqwest", "hyper_util", "rustls"];

/// Installs the colored, timestamped logger. `RUST_LOG` overrides the
/// `info` default.
pub fn init() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(LevelFilter::Info);
    for module in NOISY_DEPENDENCIES {
        builder.filter_module(module, LevelFilter::Warn);
    }
    builder.parse_default_env();

    builder.format(|buf, record| {
        if PROMPT_ACTIVE.load(Ordering::Acquire) && record.level() > Level::Error {
            return Ok(());
        }

        let mut level_style = buf.style();
        level_style.set_color(match record.level() {
            Level::Error => env_logger::fmt::Color::Red,
            Level::Warn => env_logger::fmt::Color::Yellow,
            Level::Info => env_logger::fmt::Color::Green,
            Level::Debug => env_logger::fmt::Color::Blue,
            Level::Trace => env_logger::fmt::Color::Magenta,
        });
        level_style.set_bold(true);

        writeln!(
            buf,
            "{} {} {} > {}",
            buf.timestamp(),
            level_style.value(format!("{:<5}", record.level())),
            short_target(record.target()),
            record.args()
        )
    });

    builder.init();
}

/// `yawc::application::poller::poll_loop` -> `poller::poll_loop`
fn short_target(target: &str) -> &str {
    let Some(rest) = target.strip_prefix("yawc::") else {
        return target;
    };
    ["application::", "infrastructure::", "interfaces::"]
        .iter()
        .find_map(|layer| rest.strip_prefix(layer))
        .unwrap_or(rest)
}

/// Holds back everything below error level until dropped.
pub fn suppress_stdout_logs() -> LogSuppressionGuard {
    let previous = PROMPT_ACTIVE.swap(true, Ordering::SeqCst);
    LogSuppressionGuard { previous }
}

pub struct LogSuppressionGuard {
    previous: bool,
}

impl Drop for LogSuppressionGuard {
    fn drop(&mut self) {
        PROMPT_ACTIVE.store(self.previous, Ordering::SeqCst);
    }
}
