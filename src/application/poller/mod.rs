pub mod config;
pub mod poll_loop;
pub mod types;

pub use poll_loop::PollLoop;
pub use types::{DispatchError, FeedError, LetterFeed, TokioPacer, WordSink};
