//! Pipeline runner — executes Splitter → Scorer → Selector in order.
//!
//! [`Summarizer`] holds a statically-composed pair of stage implementations
//! plus the selector configuration. Calling [`Summarizer::summarize`] strips
//! an existing summary label, classifies the input into a length regime, and
//! runs only the stages that regime needs. The whole path is a pure function
//! of the input string: no I/O, no shared state, safe to call concurrently
//! from independent callers.
//!
//! # Static dispatch
//!
//! `Summarizer` is generic over both stage types, so the compiler
//! monomorphizes each combination into a unique concrete type. The defaults
//! ([`RegexSentenceSplitter`], [`HeuristicScorer`]) cover the stock
//! heuristic; custom stages slot in via [`Summarizer::with_stages`].

use crate::pipeline::traits::{ScoreSentences, SplitSentences};
use crate::scorer::HeuristicScorer;
use crate::selector;
use crate::splitter::RegexSentenceSplitter;
use crate::types::{Regime, ScoredSentence, Summary, SummarizerConfig, SUMMARY_PREFIX};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

/// Statically-composed summarization pipeline.
#[derive(Debug, Clone)]
pub struct Summarizer<Sp = RegexSentenceSplitter, Sc = HeuristicScorer> {
    splitter: Sp,
    scorer: Sc,
    config: SummarizerConfig,
}

impl Summarizer {
    /// Pipeline with the stock regex splitter and heuristic scorer.
    pub fn new() -> Self {
        Self::with_stages(RegexSentenceSplitter::new(), HeuristicScorer::new())
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<Sp, Sc> Summarizer<Sp, Sc>
where
    Sp: SplitSentences,
    Sc: ScoreSentences,
{
    /// Compose a pipeline from custom stage implementations.
    pub fn with_stages(splitter: Sp, scorer: Sc) -> Self {
        Self {
            splitter,
            scorer,
            config: SummarizerConfig::default(),
        }
    }

    /// Replace the selector configuration.
    pub fn with_config(mut self, config: SummarizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `raw` and return the full result artifact.
    ///
    /// Total over all inputs: empty, whitespace-only, and punctuation-only
    /// strings all produce a valid (possibly degenerate) summary. A leading
    /// `"Summary: "` label on the input is stripped before processing, so
    /// summarizing a summary converges instead of growing.
    pub fn summarize(&self, raw: &str) -> Summary {
        // Strip the label before trimming so the degenerate "Summary: "
        // (whose prefix ends in the whitespace trim would eat) still
        // converges to itself.
        let stripped = raw.trim_start();
        let source = stripped.strip_prefix(SUMMARY_PREFIX).unwrap_or(stripped).trim();
        let regime = Regime::for_len(source.chars().count(), &self.config);

        trace_stage!("split");
        let sentences = self.splitter.split(source);

        let (body, truncated) = match regime {
            Regime::Long => {
                trace_stage!("score");
                let scored: Vec<ScoredSentence> = sentences
                    .iter()
                    .map(|s| ScoredSentence::new(s.clone(), self.scorer.score(s)))
                    .collect();

                trace_stage!("select");
                selector::render_long(&sentences, &scored, &self.config)
            }
            Regime::Medium => (
                selector::render_medium(source, &sentences, &self.config),
                false,
            ),
            Regime::Short => (source.to_string(), false),
        };

        Summary {
            body,
            regime,
            source_sentences: sentences.len(),
            truncated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: &str = "Paris is the capital of France. It is known for the Eiffel Tower. \
         Many tourists visit every year. The city has over 2 million residents. \
         French cuisine is famous worldwide.";

    #[test]
    fn test_medium_regime_takes_first_two_sentences() {
        // 172 characters: above the medium threshold, below the long one.
        let summary = Summarizer::new().summarize(PARIS);
        assert_eq!(summary.regime, Regime::Medium);
        assert_eq!(summary.source_sentences, 5);
        assert_eq!(
            summary.into_text(),
            "Summary: Paris is the capital of France. It is known for the Eiffel Tower."
        );
    }

    #[test]
    fn test_short_regime_verbatim() {
        let summary = Summarizer::new().summarize("  Rust is fast.  ");
        assert_eq!(summary.regime, Regime::Short);
        assert_eq!(summary.into_text(), "Summary: Rust is fast.");
    }

    #[test]
    fn test_empty_input_is_degenerate_not_an_error() {
        let summary = Summarizer::new().summarize("");
        assert_eq!(summary.regime, Regime::Short);
        assert_eq!(summary.source_sentences, 0);
        assert!(!summary.truncated);
        assert_eq!(summary.into_text(), "Summary: ");
    }

    #[test]
    fn test_existing_label_is_stripped_before_processing() {
        let summary = Summarizer::new().summarize("Summary: Rust is fast.");
        assert_eq!(summary.into_text(), "Summary: Rust is fast.");
    }

    #[test]
    fn test_label_stripping_affects_regime_classification() {
        // 105 visible characters plus the label: the stripped source is what
        // gets classified, so this stays on the medium path.
        let body = "a".repeat(105);
        let summary = Summarizer::new().summarize(&format!("Summary: {body}"));
        assert_eq!(summary.regime, Regime::Medium);
        assert_eq!(summary.body, body);
    }

    #[test]
    fn test_determinism() {
        let s = Summarizer::new();
        assert_eq!(s.summarize(PARIS), s.summarize(PARIS));
    }

    #[test]
    fn test_custom_config_thresholds() {
        let cfg = SummarizerConfig {
            long_threshold: 10,
            medium_threshold: 5,
            ..SummarizerConfig::default()
        };
        let s = Summarizer::new().with_config(cfg);
        assert_eq!(s.summarize("tiny").regime, Regime::Short);
        assert_eq!(s.summarize("seven ch").regime, Regime::Medium);
        assert_eq!(s.summarize("well past ten chars").regime, Regime::Long);
    }
}
