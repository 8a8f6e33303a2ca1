//! Core data types shared across the summarization stages.
//!
//! All of these are created fresh per summarization call and discarded when
//! the call returns — there is no cross-call state anywhere in the crate.

use serde::{Deserialize, Serialize};

/// Fixed label prepended to every rendered summary.
///
/// An input that already starts with this prefix is stripped before
/// processing, so re-summarizing a summary never stacks labels.
pub const SUMMARY_PREFIX: &str = "Summary: ";

/// Ellipsis marker appended when a summary body is truncated by word count.
pub const TRUNCATION_MARKER: &str = "...";

/// A candidate sentence produced by the splitter.
///
/// `index` is the 0-based position of the sentence in the split sequence of
/// the original document. It is assigned once at split time and never
/// reassigned; downstream stages rely on it to restore document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Trimmed sentence text with the terminal delimiter stripped.
    pub text: String,
    /// Position in the split sequence of the source document.
    pub index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// Number of whitespace-separated words in the sentence.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A sentence paired with its accumulated heuristic score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    /// Non-negative sum of the independent signal contributions.
    pub score: u32,
}

impl ScoredSentence {
    pub fn new(sentence: Sentence, score: u32) -> Self {
        Self { sentence, score }
    }
}

/// Length-based strategy branch for a summarization call.
///
/// The boundaries come from the literal source constants and are preserved
/// exactly: 100 characters is still short, 200 characters is still medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// At most 100 characters — the input is used verbatim.
    Short,
    /// 101 to 200 characters — the first two sentences are kept.
    Medium,
    /// More than 200 characters — full score-and-select pipeline.
    Long,
}

impl Regime {
    /// Classify a character count against the configured thresholds.
    pub fn for_len(chars: usize, config: &SummarizerConfig) -> Self {
        if chars > config.long_threshold {
            Self::Long
        } else if chars > config.medium_threshold {
            Self::Medium
        } else {
            Self::Short
        }
    }

    /// Returns the user-facing name used in JSON and log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

/// Configuration for the selector stage.
///
/// The defaults are the fixed constants of the heuristic; they are exposed as
/// configuration so callers can tighten the budget, but the stock values are
/// the contract and tests pin them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Character count above which the full score-and-select path runs.
    pub long_threshold: usize,
    /// Character count above which the two-sentence medium path runs.
    pub medium_threshold: usize,
    /// Maximum number of sentences selected on the long path.
    pub max_selected: usize,
    /// Number of leading sentences kept on the medium path.
    pub medium_selected: usize,
    /// Rendered bodies longer than this are truncated by word count.
    pub max_body_chars: usize,
    /// Word budget applied when truncating an over-long body.
    pub truncation_words: usize,
    /// Sources with more than this many sentences gain a provenance suffix.
    pub provenance_min_sentences: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            long_threshold: 200,
            medium_threshold: 100,
            max_selected: 3,
            medium_selected: 2,
            max_body_chars: 500,
            truncation_words: 60,
            provenance_min_sentences: 4,
        }
    }
}

/// Result artifact of a summarization call.
///
/// The stable external interface is the rendered string (see
/// [`crate::summarize`]); this type additionally exposes which regime ran and
/// whether the word-count truncation fired, for callers that want to surface
/// that in a UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Rendered summary body, without the `"Summary: "` label.
    pub body: String,
    /// Which length regime produced the body.
    pub regime: Regime,
    /// Sentence count of the source document (after dropping empty spans).
    pub source_sentences: usize,
    /// Whether the body was cut to the word budget and ellipsis-terminated.
    pub truncated: bool,
}

impl Summary {
    /// Render the final labeled summary string.
    pub fn into_text(self) -> String {
        format!("{SUMMARY_PREFIX}{}", self.body)
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{SUMMARY_PREFIX}{}", self.body)
    }
}
