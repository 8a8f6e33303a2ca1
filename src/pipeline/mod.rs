//! Pipeline composition
//!
//! Stage traits and the statically-dispatched runner that wires
//! Splitter → Scorer → Selector together.

pub mod runner;
pub mod traits;

pub use runner::Summarizer;
pub use traits::{ScoreSentences, SplitSentences};
