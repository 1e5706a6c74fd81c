use crate::application::words::Token;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    /// A new token arrived and is now the current one.
    Changed,
    /// Same token as last time.
    Unchanged,
    /// The feed had nothing this cycle.
    Ignored,
}

/// Remembers the last token seen and decides whether a fresh one is news.
#[derive(Debug, Default)]
pub struct LetterObserver {
    current: Option<Token>,
}

impl LetterObserver {
    pub fn new() -> Self {
        LetterObserver::default()
    }

    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    pub fn observe(&mut self, candidate: Option<Token>) -> Observation {
        let Some(candidate) = candidate else {
            return Observation::Ignored;
        };
        if self.current.as_ref() == Some(&candidate) {
            return Observation::Unchanged;
        }
        self.current = Some(candidate);
        Observation::Changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(raw: &str) -> Option<Token> {
        Some(Token::new(raw))
    }

    #[test]
    fn first_token_is_a_change() {
        let mut observer = LetterObserver::new();
        assert_eq!(observer.observe(tok("abc")), Observation::Changed);
        assert_eq!(observer.current(), Some(&Token::new("abc")));
    }

    #[test]
    fn same_token_after_normalization_is_unchanged() {
        let mut observer = LetterObserver::new();
        observer.observe(tok("abc"));
        assert_eq!(observer.observe(tok("ABC ")), Observation::Unchanged);
        assert_eq!(observer.observe(tok(" aBc")), Observation::Unchanged);
    }

    #[test]
    fn different_token_is_a_change() {
        let mut observer = LetterObserver::new();
        observer.observe(tok("abc"));
        assert_eq!(observer.observe(tok("abd")), Observation::Changed);
        assert_eq!(observer.observe(tok("abc")), Observation::Changed);
    }

    #[test]
    fn repeats_never_fire_twice() {
        let mut observer = LetterObserver::new();
        let changes = (0..50)
            .map(|_| observer.observe(tok("ing")))
            .filter(|o| *o == Observation::Changed)
            .count();
        assert_eq!(changes, 1);
    }

    #[test]
    fn absence_is_ignored_and_keeps_state() {
        let mut observer = LetterObserver::new();
        assert_eq!(observer.observe(None), Observation::Ignored);
        assert!(observer.current().is_none());

        observer.observe(tok("qu"));
        assert_eq!(observer.observe(None), Observation::Ignored);
        assert_eq!(observer.observe(tok("QU")), Observation::Unchanged);
    }
}
