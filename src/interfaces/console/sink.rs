use super::console::ConsoleUI;
use crate::application::poller::{DispatchError, WordSink};
use crate::application::words::Token;
use crate::infrastructure::clipboard::Clipboard;

/// Prints results to the terminal and copies the pick to the clipboard.
pub struct ConsoleSink {
    clipboard: Clipboard,
}

impl ConsoleSink {
    pub fn new() -> Self {
        ConsoleSink {
            clipboard: Clipboard::new(),
        }
    }
}

impl WordSink for ConsoleSink {
    fn announce(&mut self, token: &Token) {
        ConsoleUI::print_letters(token.as_str());
    }

    fn display(&mut self, preview: &[String]) {
        if preview.is_empty() {
            ConsoleUI::print_warning("No words found.");
            return;
        }
        ConsoleUI::print_word_list(&format!("Top {} words:", preview.len()), preview);
    }

    fn publish(&mut self, word: &str) -> Result<(), DispatchError> {
        self.clipboard
            .copy(word)
            .map_err(|e| DispatchError(e.to_string()))?;
        ConsoleUI::print_success(&format!("Copied {} to clipboard.", word));
        Ok(())
    }
}
