//! # rapid-gist
//!
//! Extractive, heuristic text summarization: given an arbitrary block of
//! text, select a small subset of the original sentences that best represent
//! the whole, keep them in their original order, and return them as a
//! condensed summary behind a fixed `"Summary: "` label.
//!
//! The pipeline runs three sequential stages with no feedback loops:
//!
//! | Module | Stage |
//! |--------|-------|
//! | [`splitter`] | Break raw text into candidate sentences on `[.!?]+` |
//! | [`scorer`] | Sum six independent heuristic signals per sentence |
//! | [`selector`] | Rank, pick a bounded top-k, restore order, render |
//!
//! [`pipeline`] wires the stages together; [`types`] holds the shared data
//! model and the fixed constants (length regimes, top-3 budget, 500-char
//! cap). The core is a pure, total, deterministic function of its input:
//! no I/O, no cross-call state, nothing to fail.
//!
//! The remaining modules are thin collaborators around the core, for hosts
//! that embed it: [`capture`] (debounced selection snapshots over a
//! channel), [`store`] (single-slot snapshot store with change
//! notification), [`speech`] (utterance cleanup, voice preference, silent
//! placeholder WAV), and [`popup`] (explicit presentation-layer state).
//!
//! # Quick start
//!
//! ```
//! let summary = rapid_gist::summarize("Rust is a systems programming language.");
//! assert_eq!(summary, "Summary: Rust is a systems programming language.");
//! ```
//!
//! Summarizing a summary converges; the label never stacks:
//!
//! ```
//! let once = rapid_gist::summarize("Some captured text.");
//! let twice = rapid_gist::summarize(&once);
//! assert_eq!(once, twice);
//! ```

pub mod capture;
pub mod error;
pub mod pipeline;
pub mod popup;
pub mod scorer;
pub mod selector;
pub mod speech;
pub mod splitter;
pub mod store;
pub mod types;

pub use error::GistError;
pub use pipeline::{ScoreSentences, SplitSentences, Summarizer};
pub use scorer::{HeuristicScorer, SignalWeights};
pub use splitter::RegexSentenceSplitter;
pub use types::{Regime, ScoredSentence, Sentence, Summary, SummarizerConfig, SUMMARY_PREFIX};

/// Summarize `text` with the stock pipeline and render the labeled string.
///
/// This is the single stable operation the crate exposes to collaborators:
/// synchronous, side-effect free, total over all string inputs (an empty or
/// whitespace-only input yields the degenerate `"Summary: "`).
pub fn summarize(text: &str) -> String {
    Summarizer::new().summarize(text).into_text()
}
