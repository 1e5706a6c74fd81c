pub mod console;
pub mod feed;
