pub mod index;
pub mod loader;
pub mod types;

pub use index::WordIndex;
pub use types::Token;
