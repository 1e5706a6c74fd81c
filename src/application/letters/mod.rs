pub mod observer;

pub use observer::{LetterObserver, Observation};
