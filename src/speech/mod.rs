//! Speech preparation
//!
//! Utilities for handing summary text to a platform text-to-speech facility.
//! The crate does not vocalize anything itself; the [`SpeakText`] trait is
//! the seam where a platform backend plugs in. What lives here is the pure
//! part: cleaning the text before vocalization, the fixed utterance
//! parameters, voice preference ordering, and the silent placeholder clip
//! ([`wav`]).

pub mod wav;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::GistError;
use crate::types::SUMMARY_PREFIX;

/// Old-format character-count suffix, e.g. `"... (123 characters)"`.
static LEGACY_LENGTH_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.\.\. \(\d+ characters\)$").expect("hard-coded legacy suffix pattern")
});

/// Clean text for vocalization.
///
/// Strips the `"Summary: "` label and the legacy character-count suffix,
/// then trims. Speaking the label aloud sounds wrong, so every path into a
/// speech backend goes through here first.
pub fn prepare_utterance(text: &str) -> String {
    let text = text.trim_start();
    let text = text.strip_prefix(SUMMARY_PREFIX).unwrap_or(text).trim();
    let text = LEGACY_LENGTH_SUFFIX.replace(text, "");
    text.trim().to_string()
}

/// Fixed utterance parameters.
///
/// The defaults favor clarity over speed: slightly slower rate, normal
/// pitch, comfortable volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtteranceSettings {
    /// BCP 47 language tag.
    pub lang: String,
    /// Speaking rate multiplier.
    pub rate: f32,
    /// Pitch multiplier.
    pub pitch: f32,
    /// Volume in [0, 1].
    pub volume: f32,
}

impl Default for UtteranceSettings {
    fn default() -> Self {
        Self {
            lang: "en-US".to_string(),
            rate: 0.9,
            pitch: 1.0,
            volume: 0.8,
        }
    }
}

/// A voice advertised by a speech backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    /// BCP 47 language tag, e.g. `"en-GB"`.
    pub lang: String,
}

/// Pick a voice from a backend's advertised list.
///
/// Preference order: an English voice with "Female" in its name, then any
/// English voice, then the first voice offered. Returns `None` only when the
/// list is empty.
pub fn pick_voice(voices: &[Voice]) -> Option<&Voice> {
    voices
        .iter()
        .find(|v| v.lang.starts_with("en") && v.name.contains("Female"))
        .or_else(|| voices.iter().find(|v| v.lang.starts_with("en")))
        .or_else(|| voices.first())
}

/// Platform text-to-speech seam.
///
/// Implementations wrap whatever speech facility the host offers. A backend
/// without speech support reports [`GistError::SpeechUnavailable`] so the
/// presentation layer can show a user-visible error state.
pub trait SpeakText {
    fn speak(&mut self, text: &str, settings: &UtteranceSettings) -> Result<(), GistError>;
}
