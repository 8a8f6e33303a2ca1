//! Fixed heuristic signal patterns.
//!
//! Each predicate is a compiled regular expression over the raw sentence
//! text. The patterns are fixed heuristic constants: they may eventually be
//! replaced by a statistical or learned scorer, but the splitter and selector
//! contracts do not change when that happens.

use regex::Regex;

/// Compiled content-signal predicates.
///
/// All four checks run independently per sentence; a sentence can trigger
/// any subset of them.
#[derive(Debug, Clone)]
pub struct SignalPatterns {
    definition: Regex,
    exemplification: Regex,
    numeric: Regex,
    proper_name: Regex,
}

impl SignalPatterns {
    pub fn new() -> Self {
        Self {
            definition: Regex::new(r"(?i)\b(?:is|are|means|refers to|defined as)\b")
                .expect("hard-coded definition pattern"),
            exemplification: Regex::new(r"(?i)\b(?:for example|such as|including|like)\b")
                .expect("hard-coded exemplification pattern"),
            numeric: Regex::new(r"\d").expect("hard-coded numeric pattern"),
            proper_name: Regex::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+\b")
                .expect("hard-coded proper-name pattern"),
        }
    }

    /// Definitional phrasing: `is`, `are`, `means`, `refers to`, `defined as`
    /// as a whole word or phrase, case-insensitive.
    pub fn is_definitional(&self, text: &str) -> bool {
        self.definition.is_match(text)
    }

    /// Exemplification cue: `for example`, `such as`, `including`, `like`.
    pub fn has_example(&self, text: &str) -> bool {
        self.exemplification.is_match(text)
    }

    /// At least one digit anywhere in the sentence.
    pub fn has_number(&self, text: &str) -> bool {
        self.numeric.is_match(text)
    }

    /// Two adjacent capitalized words (`Xxxx Yyyy`), a crude proper-name cue.
    pub fn has_proper_name(&self, text: &str) -> bool {
        self.proper_name.is_match(text)
    }
}

impl Default for SignalPatterns {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_matches_whole_words_only() {
        let p = SignalPatterns::new();
        assert!(p.is_definitional("Rust is a language"));
        assert!(p.is_definitional("Latency REFERS TO delay"));
        assert!(p.is_definitional("These are defined as constants"));
        // "is" embedded in a longer word must not match.
        assert!(!p.is_definitional("This island has history"));
    }

    #[test]
    fn test_exemplification_phrases() {
        let p = SignalPatterns::new();
        assert!(p.has_example("Languages such as Rust"));
        assert!(p.has_example("For example, consider caching"));
        assert!(p.has_example("tools like compilers"));
        assert!(!p.has_example("An unlikely outcome"));
    }

    #[test]
    fn test_numeric_detection() {
        let p = SignalPatterns::new();
        assert!(p.has_number("over 2 million residents"));
        assert!(!p.has_number("no digits here"));
    }

    #[test]
    fn test_proper_name_pattern() {
        let p = SignalPatterns::new();
        assert!(p.has_proper_name("the Eiffel Tower at night"));
        assert!(!p.has_proper_name("Paris is lovely"));
        // All-caps acronyms do not fit the Xxxx Yyyy shape.
        assert!(!p.has_proper_name("the HTTP API surface"));
    }
}
