use super::config::{DEFAULT_PREVIEW_SIZE, DEFAULT_TOP_SIZE};
use super::types::Selection;

/// Picks the shortest of the first `top_size` matches.
///
/// Returns `None` when there is nothing to pick from. Ties go to the earlier
/// match. Fewer than `top_size` matches still produce a selection.
pub fn select(matches: &[String], preview_size: usize, top_size: usize) -> Option<Selection> {
    let top = &matches[..top_size.min(matches.len())];
    let word = top.iter().min_by_key(|word| word.chars().count())?;

    Some(Selection {
        word: word.clone(),
        preview: preview(matches, preview_size),
    })
}

pub fn preview(matches: &[String], preview_size: usize) -> Vec<String> {
    matches.iter().take(preview_size).cloned().collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ranker {
    pub preview_size: usize,
    pub top_size: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Ranker {
            preview_size: DEFAULT_PREVIEW_SIZE,
            top_size: DEFAULT_TOP_SIZE,
        }
    }
}

impl Ranker {
    pub fn new(preview_size: usize, top_size: usize) -> Self {
        Ranker {
            preview_size,
            top_size,
        }
    }

    pub fn select(&self, matches: &[String]) -> Option<Selection> {
        select(matches, self.preview_size, self.top_size)
    }

    pub fn preview(&self, matches: &[String]) -> Vec<String> {
        preview(matches, self.preview_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn picks_shortest_of_top_four() {
        let matches = words(&["cat", "at", "rat", "hat", "splat"]);
        let selection = Ranker::default().select(&matches).unwrap();
        assert_eq!(selection.word, "at");
        assert_eq!(selection.preview, matches);
    }

    #[test]
    fn words_past_the_top_are_not_candidates() {
        let matches = words(&["station", "nation", "ration", "cation", "at"]);
        let selection = Ranker::default().select(&matches).unwrap();
        assert_eq!(selection.word, "nation");
    }

    #[test]
    fn ties_go_to_the_earliest() {
        let matches = words(&["long", "bat", "cat", "rat"]);
        assert_eq!(Ranker::default().select(&matches).unwrap().word, "bat");
    }

    #[test]
    fn empty_matches_select_nothing() {
        assert_eq!(Ranker::default().select(&[]), None);
        assert!(Ranker::default().preview(&[]).is_empty());
    }

    #[test]
    fn fewer_than_top_size_still_selects() {
        let matches = words(&["quiz", "quo"]);
        assert_eq!(Ranker::default().select(&matches).unwrap().word, "quo");
    }

    #[test]
    fn preview_is_capped() {
        let matches: Vec<String> = (0..20).map(|i| format!("word{}", i)).collect();
        let selection = Ranker::default().select(&matches).unwrap();
        assert_eq!(selection.preview.len(), 8);
        assert_eq!(selection.preview[7], "word7");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let matches = words(&["éèê", "abcd"]);
        assert_eq!(select(&matches, 8, 4).unwrap().word, "éèê");
    }

    #[test]
    fn selected_word_is_never_longer_than_any_top_word() {
        let matches = words(&["alpha", "be", "gamma", "pi", "omicron", "x"]);
        let ranker = Ranker::new(8, 4);
        let chosen = ranker.select(&matches).unwrap().word;
        for word in &matches[..4] {
            assert!(chosen.chars().count() <= word.chars().count());
        }
        assert_eq!(chosen, "be");
    }
}
