use std::fmt;

/// The letters the game currently demands, in normalized form.
///
/// Two tokens are the same when their lower-cased, trimmed values match, so
/// `"ABC "` and `"abc"` compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn new(raw: &str) -> Self {
        Token(normalize_token(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Token::new(raw)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dictionary entries containing the current token, in load order.
pub type MatchSet = Vec<String>;

pub(crate) fn normalize_token(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_ignores_case_and_surrounding_whitespace() {
        assert_eq!(Token::new("ABC "), Token::new("abc"));
        assert_eq!(Token::new("\tIng\n").as_str(), "ing");
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_ne!(Token::new("a b"), Token::new("ab"));
    }

    #[test]
    fn blank_input_is_the_empty_token() {
        assert_eq!(Token::new("   ").as_str(), "");
    }
}
