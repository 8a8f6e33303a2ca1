//! Sentence selection and summary rendering
//!
//! Ranks scored sentences, keeps a bounded top-k, restores document order,
//! and renders the final body for each length regime. The descending sort is
//! stable, so equal scores keep their relative order from the scoring pass —
//! which itself preserves split order.

use crate::types::{ScoredSentence, Sentence, SummarizerConfig, TRUNCATION_MARKER};

/// Rank descending by score (stable), keep at most `max`, then restore
/// original document order.
pub fn select_top(scored: &[ScoredSentence], max: usize) -> Vec<ScoredSentence> {
    let mut ranked = scored.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(max);
    ranked.sort_by_key(|s| s.sentence.index);
    ranked
}

/// Join sentence texts with `". "` and append a trailing period.
fn join_sentences<'a>(texts: impl Iterator<Item = &'a str>) -> String {
    let mut body = texts.collect::<Vec<_>>().join(". ");
    body.push('.');
    body
}

/// Re-tokenize by whitespace, keep the first `max_words` words, and terminate
/// with the ellipsis marker instead of a period.
fn truncate_words(body: &str, max_words: usize) -> String {
    let words: Vec<&str> = body.split_whitespace().collect();
    let keep = max_words.min(words.len());
    let mut out = words[..keep].join(" ");
    out.push_str(TRUNCATION_MARKER);
    out
}

/// Provenance note appended when the source had enough sentences to matter.
fn provenance_suffix(source_sentences: usize) -> String {
    format!(" (Summarized from {source_sentences} sentences)")
}

/// Long-regime rendering: top-k selection, length cap, provenance suffix.
///
/// Returns the body and whether the word-count truncation fired. The
/// provenance suffix always uses the pre-truncation sentence count and is
/// appended after truncation, so it survives the cap.
pub fn render_long(
    sentences: &[Sentence],
    scored: &[ScoredSentence],
    config: &SummarizerConfig,
) -> (String, bool) {
    let top = select_top(scored, config.max_selected);

    let mut body = if top.is_empty() {
        // Degenerate fallback: first sentences in split order.
        join_sentences(
            sentences
                .iter()
                .take(config.max_selected)
                .map(|s| s.text.as_str()),
        )
    } else {
        join_sentences(top.iter().map(|s| s.sentence.text.as_str()))
    };

    let mut truncated = false;
    if body.chars().count() > config.max_body_chars {
        body = truncate_words(&body, config.truncation_words);
        truncated = true;
    }

    if sentences.len() > config.provenance_min_sentences {
        body.push_str(&provenance_suffix(sentences.len()));
    }

    (body, truncated)
}

/// Medium-regime rendering: first sentences in document order, or the source
/// verbatim when there are not enough of them.
pub fn render_medium(source: &str, sentences: &[Sentence], config: &SummarizerConfig) -> String {
    if sentences.len() >= config.medium_selected {
        join_sentences(
            sentences
                .iter()
                .take(config.medium_selected)
                .map(|s| s.text.as_str()),
        )
    } else {
        source.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(items: &[(&str, u32)]) -> Vec<ScoredSentence> {
        items
            .iter()
            .enumerate()
            .map(|(i, (text, score))| ScoredSentence::new(Sentence::new(*text, i), *score))
            .collect()
    }

    #[test]
    fn test_select_top_restores_document_order() {
        let scored = scored(&[("a", 5), ("b", 30), ("c", 10), ("d", 20)]);
        let top = select_top(&scored, 3);
        let texts: Vec<&str> = top.iter().map(|s| s.sentence.text.as_str()).collect();
        // Top by score: b, d, c — re-sorted to document order.
        assert_eq!(texts, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_select_top_ties_keep_split_order() {
        let scored = scored(&[("a", 7), ("b", 7), ("c", 7), ("d", 7)]);
        let top = select_top(&scored, 2);
        let texts: Vec<&str> = top.iter().map(|s| s.sentence.text.as_str()).collect();
        // Stable descending sort keeps a before b for equal scores.
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_select_top_bounded_by_input() {
        let scored = scored(&[("a", 1)]);
        assert_eq!(select_top(&scored, 3).len(), 1);
        assert!(select_top(&[], 3).is_empty());
    }

    #[test]
    fn test_truncate_words_marker() {
        let body = vec!["word"; 10].join(" ");
        let out = truncate_words(&body, 4);
        assert_eq!(out, "word word word word...");
        // Budget larger than the body keeps everything.
        let out = truncate_words("just three words", 60);
        assert_eq!(out, "just three words...");
    }

    #[test]
    fn test_render_long_appends_provenance_after_truncation() {
        let cfg = SummarizerConfig {
            max_body_chars: 20,
            truncation_words: 3,
            ..SummarizerConfig::default()
        };
        let sentences: Vec<Sentence> = (0..6)
            .map(|i| Sentence::new("several words in every sentence here", i))
            .collect();
        let scored: Vec<ScoredSentence> = sentences
            .iter()
            .map(|s| ScoredSentence::new(s.clone(), 1))
            .collect();
        let (body, truncated) = render_long(&sentences, &scored, &cfg);
        assert!(truncated);
        assert_eq!(body, "several words in... (Summarized from 6 sentences)");
    }

    #[test]
    fn test_render_long_empty_sentences_degenerates() {
        let cfg = SummarizerConfig::default();
        let (body, truncated) = render_long(&[], &[], &cfg);
        assert_eq!(body, ".");
        assert!(!truncated);
    }

    #[test]
    fn test_render_medium_two_sentences() {
        let cfg = SummarizerConfig::default();
        let sentences = vec![
            Sentence::new("First", 0),
            Sentence::new("Second", 1),
            Sentence::new("Third", 2),
        ];
        assert_eq!(render_medium("ignored", &sentences, &cfg), "First. Second.");
    }

    #[test]
    fn test_render_medium_single_sentence_verbatim() {
        let cfg = SummarizerConfig::default();
        let sentences = vec![Sentence::new("Only one here", 0)];
        assert_eq!(
            render_medium("Only one here, verbatim source", &sentences, &cfg),
            "Only one here, verbatim source"
        );
    }
}
