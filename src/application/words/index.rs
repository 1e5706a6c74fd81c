use super::types::{MatchSet, Token, normalize_token};

struct Entry {
    word: String,
    folded: String,
}

/// Read-only snapshot of the word list.
///
/// Entries keep their load order and duplicates. Lookups are a linear scan,
/// which is plenty for a ~10k word list queried once a second.
pub struct WordIndex {
    entries: Vec<Entry>,
}

impl WordIndex {
    /// Builds an index from line-delimited text. Blank lines are skipped and
    /// every other line is trimmed into one entry.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let entries = lines
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| Entry {
                word: line.to_string(),
                folded: normalize_token(line),
            })
            .collect();
        WordIndex { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry whose lower-cased form contains `containing`, in load order.
    ///
    /// The empty token matches the whole dictionary.
    pub fn find(&self, containing: &Token) -> MatchSet {
        let needle = containing.as_str();
        self.entries
            .iter()
            .filter(|entry| entry.folded.contains(needle))
            .map(|entry| entry.word.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(words: &[&str]) -> WordIndex {
        WordIndex::from_lines(words.iter().copied())
    }

    #[test]
    fn find_keeps_load_order() {
        let idx = index(&["cat", "at", "rat", "hat", "splat"]);
        assert_eq!(
            idx.find(&Token::new("at")),
            vec!["cat", "at", "rat", "hat", "splat"]
        );
    }

    #[test]
    fn find_is_case_insensitive_on_both_sides() {
        let idx = index(&["Station", "NATION", "ration", "stone"]);
        assert_eq!(
            idx.find(&Token::new(" ATI")),
            vec!["Station", "NATION", "ration"]
        );
    }

    #[test]
    fn find_returns_only_containing_entries() {
        let words = ["bring", "ring", "rang", "ingot", "sing", "sign"];
        let idx = index(&words);
        let token = Token::new("ing");
        let found = idx.find(&token);
        for word in &found {
            assert!(word.to_lowercase().contains(token.as_str()));
        }
        for word in words {
            if !found.iter().any(|f| f == word) {
                assert!(!word.contains("ing"), "{} should have matched", word);
            }
        }
        assert_eq!(found, vec!["bring", "ring", "ingot", "sing"]);
    }

    #[test]
    fn empty_token_matches_everything() {
        let idx = index(&["xenon", "zebra", "zebra"]);
        assert_eq!(idx.find(&Token::new("")), vec!["xenon", "zebra", "zebra"]);
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let idx = index(&["xenon", "zebra"]);
        assert!(idx.find(&Token::new("qq")).is_empty());
    }

    #[test]
    fn blank_lines_are_dropped_and_duplicates_kept() {
        let idx = WordIndex::from_lines("  apple \n\n\t\nbanana\napple\n".lines());
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.find(&Token::new("apple")), vec!["apple", "apple"]);
    }
}
