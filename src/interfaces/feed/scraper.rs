use crate::application::words::Token;
use once_cell::sync::Lazy;
use regex::Regex;

pub const GAME_MARKER: &str = "Word Bomb";

static LETTERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Letters(.{3})").expect("letters pattern is valid"));

/// Letters from a single rendered game message, if it is one.
///
/// The message must mention the game; the token is the three characters right
/// after the first `Letters` label, trimmed. A blank capture counts as nothing.
pub fn find_letters(text: &str) -> Option<Token> {
    if !text.contains(GAME_MARKER) {
        return None;
    }
    let captures = LETTERS_RE.captures(text)?;
    let raw = captures.get(1)?.as_str().trim();
    if raw.is_empty() {
        return None;
    }
    Some(Token::new(raw))
}

/// First game message with letters, scanning `texts` newest first.
pub fn latest_letters<I, S>(texts: I) -> Option<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .find_map(|text| find_letters(text.as_ref()))
}
