//! Stage trait definitions for the summarization pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; the default stages are [`RegexSentenceSplitter`]
//! and [`HeuristicScorer`].
//!
//! [`RegexSentenceSplitter`]: crate::splitter::RegexSentenceSplitter
//! [`HeuristicScorer`]: crate::scorer::HeuristicScorer

use crate::types::Sentence;

/// Splitter stage: break raw text into candidate sentences.
///
/// # Contract
///
/// - **Input**: arbitrary UTF-8 text.
/// - **Output**: sentences in document order, trimmed, delimiters stripped,
///   empty spans dropped, indices assigned 0..n-1 in split order.
/// - **Total**: never fails; empty input yields an empty vector.
pub trait SplitSentences {
    fn split(&self, text: &str) -> Vec<Sentence>;
}

/// Scorer stage: assign a relevance score to one candidate sentence.
///
/// # Contract
///
/// - **Deterministic**: the score depends only on the sentence text and its
///   index — no cross-call state.
/// - **Non-negative**: scores are unsigned; signals only add.
///
/// The default implementation is a fixed-signal heuristic; a statistical or
/// learned scorer can be swapped in without touching the splitter or
/// selector contracts.
pub trait ScoreSentences {
    fn score(&self, sentence: &Sentence) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A custom scorer slots in behind the trait boundary.
    #[test]
    fn test_custom_scorer_impl() {
        struct WordCountScorer;

        impl ScoreSentences for WordCountScorer {
            fn score(&self, sentence: &Sentence) -> u32 {
                sentence.word_count() as u32
            }
        }

        let s = Sentence::new("four words right here", 0);
        assert_eq!(WordCountScorer.score(&s), 4);
    }

    /// A custom splitter slots in behind the trait boundary.
    #[test]
    fn test_custom_splitter_impl() {
        struct LineSplitter;

        impl SplitSentences for LineSplitter {
            fn split(&self, text: &str) -> Vec<Sentence> {
                text.lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .enumerate()
                    .map(|(i, l)| Sentence::new(l, i))
                    .collect()
            }
        }

        let sentences = LineSplitter.split("one\n\ntwo\n");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].text, "two");
        assert_eq!(sentences[1].index, 1);
    }
}
