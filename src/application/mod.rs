pub mod letters;
pub mod poller;
pub mod ranking;
pub mod words;
