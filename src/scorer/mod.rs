//! Sentence scoring
//!
//! Assigns each candidate sentence a relevance score by summing independent
//! heuristic signals. Signals are cumulative, never mutually exclusive:
//!
//! | Signal | Condition | Contribution |
//! |--------|-----------|--------------|
//! | Position | always | `max(0, 10 − index)` |
//! | Ideal length | word count in [8, 25] | +5 |
//! | Definitional phrasing | `is \| are \| means \| refers to \| defined as` | +8 |
//! | Exemplification | `for example \| such as \| including \| like` | +3 |
//! | Numeric content | contains a digit | +2 |
//! | Proper-name pattern | `Xxxx Yyyy` sequence | +4 |
//!
//! Scores are integers; ties are broken only by the stable sort downstream,
//! which preserves split order for equal scores.

pub mod signals;

use serde::{Deserialize, Serialize};

use crate::pipeline::traits::ScoreSentences;
use crate::scorer::signals::SignalPatterns;
use crate::types::Sentence;

/// Signal weights and bounds.
///
/// `Default` holds the fixed constants of the heuristic; tests pin them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalWeights {
    /// Position bonus starts here and decreases by one per sentence index,
    /// floored at zero.
    pub position_ceiling: u32,
    /// Bonus when the word count falls in the ideal range.
    pub ideal_length_bonus: u32,
    /// Inclusive lower bound of the ideal word-count range.
    pub ideal_min_words: usize,
    /// Inclusive upper bound of the ideal word-count range.
    pub ideal_max_words: usize,
    pub definition_bonus: u32,
    pub exemplification_bonus: u32,
    pub numeric_bonus: u32,
    pub proper_name_bonus: u32,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            position_ceiling: 10,
            ideal_length_bonus: 5,
            ideal_min_words: 8,
            ideal_max_words: 25,
            definition_bonus: 8,
            exemplification_bonus: 3,
            numeric_bonus: 2,
            proper_name_bonus: 4,
        }
    }
}

/// Default scorer: six additive heuristic signals per sentence.
#[derive(Debug, Clone)]
pub struct HeuristicScorer {
    weights: SignalWeights,
    patterns: SignalPatterns,
}

impl HeuristicScorer {
    pub fn new() -> Self {
        Self {
            weights: SignalWeights::default(),
            patterns: SignalPatterns::new(),
        }
    }

    /// Replace the signal weights, keeping the compiled patterns.
    pub fn with_weights(mut self, weights: SignalWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &SignalWeights {
        &self.weights
    }
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreSentences for HeuristicScorer {
    fn score(&self, sentence: &Sentence) -> u32 {
        let w = &self.weights;
        let index = u32::try_from(sentence.index).unwrap_or(u32::MAX);
        let mut score = w.position_ceiling.saturating_sub(index);

        let words = sentence.word_count();
        if (w.ideal_min_words..=w.ideal_max_words).contains(&words) {
            score += w.ideal_length_bonus;
        }
        if self.patterns.is_definitional(&sentence.text) {
            score += w.definition_bonus;
        }
        if self.patterns.has_example(&sentence.text) {
            score += w.exemplification_bonus;
        }
        if self.patterns.has_number(&sentence.text) {
            score += w.numeric_bonus;
        }
        if self.patterns.has_proper_name(&sentence.text) {
            score += w.proper_name_bonus;
        }
        score
    }
}
