pub mod console;
pub mod sink;

pub use console::ConsoleUI;
pub use sink::ConsoleSink;
