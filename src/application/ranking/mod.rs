pub mod config;
pub mod ranker;
pub mod types;

pub use ranker::Ranker;
