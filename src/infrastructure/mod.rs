pub mod clipboard;
pub mod discord;
pub mod logging;
pub mod settings;
pub mod wordlist;
