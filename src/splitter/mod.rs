//! Sentence splitting
//!
//! Breaks raw text into candidate sentences on runs of terminal punctuation
//! (`.`, `!`, `?`). There is no boundary detection beyond this rule — no
//! handling of abbreviations, decimal numbers, or quoted punctuation. That is
//! a known limitation of the heuristic, not a bug.

use regex::Regex;

use crate::pipeline::traits::SplitSentences;
use crate::types::Sentence;

/// Default splitter: regex split on `[.!?]+`, trim, drop empty fragments.
///
/// Indices are assigned 0..n-1 in split order *after* empty fragments are
/// dropped; this order is the canonical document order used by the selector
/// to restore narrative flow.
#[derive(Debug, Clone)]
pub struct RegexSentenceSplitter {
    boundary: Regex,
}

impl RegexSentenceSplitter {
    pub fn new() -> Self {
        Self {
            boundary: Regex::new(r"[.!?]+").expect("hard-coded boundary pattern"),
        }
    }
}

impl Default for RegexSentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitSentences for RegexSentenceSplitter {
    fn split(&self, text: &str) -> Vec<Sentence> {
        self.boundary
            .split(text)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .enumerate()
            .map(|(index, fragment)| Sentence::new(fragment, index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<Sentence> {
        RegexSentenceSplitter::new().split(text)
    }

    #[test]
    fn test_split_on_each_delimiter() {
        let sentences = split("One. Two! Three?");
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_delimiter_runs_collapse() {
        let sentences = split("Wait... what?! Really.");
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Wait", "what", "Really"]);
    }

    #[test]
    fn test_indices_assigned_after_filtering() {
        // The stray delimiter run between sentences must not burn an index.
        let sentences = split("First. ?! Second.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].index, 0);
        assert_eq!(sentences[1].index, 1);
        assert_eq!(sentences[1].text, "Second");
    }

    #[test]
    fn test_fragments_are_trimmed() {
        let sentences = split("A sentence.   Padded one.  ");
        assert_eq!(sentences[1].text, "Padded one");
    }

    #[test]
    fn test_empty_and_punctuation_only_inputs() {
        assert!(split("").is_empty());
        assert!(split("   ").is_empty());
        assert!(split("?!?!...").is_empty());
    }

    #[test]
    fn test_no_trailing_delimiter() {
        let sentences = split("No terminator here");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "No terminator here");
        assert_eq!(sentences[0].index, 0);
    }

    #[test]
    fn test_abbreviations_split_naively() {
        // Known limitation: "Dr." terminates a sentence.
        let sentences = split("Dr. Smith arrived.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Dr");
    }
}
