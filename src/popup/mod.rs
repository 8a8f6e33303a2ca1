//! Presentation-layer controller
//!
//! Owns the mutable UI state — text area contents, status line, per-action
//! busy flags — as explicit local state instead of module-level globals. The
//! summarization core stays stateless; this controller is the only place
//! where "what the user currently sees" lives.
//!
//! The status line has no timer here: the host UI decides when to call
//! [`PopupController::clear_status`] (the original hid it after three
//! seconds).

use serde::Serialize;

use crate::error::GistError;
use crate::pipeline::Summarizer;
use crate::speech::{self, wav, SpeakText, UtteranceSettings};
use crate::store::SnapshotStore;

/// Severity of a status-line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// A status-line message with its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    fn new(message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

/// Explicit UI state for the summarize/listen popup.
#[derive(Debug, Default)]
pub struct PopupController {
    summarizer: Summarizer,
    settings: UtteranceSettings,
    text: String,
    status: Option<Status>,
    summarize_busy: bool,
    listen_busy: bool,
}

impl PopupController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text area contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text area contents (user edit).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Host UI calls this when the status display window elapses.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Whether the summarize action should be disabled.
    pub fn summarize_busy(&self) -> bool {
        self.summarize_busy
    }

    /// Whether the listen action should be disabled.
    pub fn listen_busy(&self) -> bool {
        self.listen_busy
    }

    /// Populate the text area from the snapshot store on open.
    pub fn load_from_store(&mut self, store: &SnapshotStore) {
        match store.latest() {
            Some(text) => {
                self.text = text;
                self.status = Some(Status::new("Text loaded from storage", StatusKind::Success));
            }
            None => {
                self.text.clear();
                self.status = Some(Status::new("No text selected yet", StatusKind::Info));
            }
        }
    }

    /// React to a store change notification while the popup is open.
    pub fn on_store_change(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.status = Some(Status::new(
            "Text updated from page selection",
            StatusKind::Info,
        ));
    }

    /// Summarize the text area contents in place.
    ///
    /// On success the text area holds the rendered summary, so a second
    /// press re-summarizes the summary (which converges, never stacks
    /// labels).
    pub fn summarize(&mut self) -> Result<&str, GistError> {
        if self.text.trim().is_empty() {
            self.status = Some(Status::new("Please select some text first", StatusKind::Error));
            return Err(GistError::NoCapturedText);
        }

        self.summarize_busy = true;
        let summary = self.summarizer.summarize(&self.text).into_text();
        self.text = summary;
        self.summarize_busy = false;

        self.status = Some(Status::new(
            "Text summarized successfully",
            StatusKind::Success,
        ));
        Ok(&self.text)
    }

    /// Vocalize the text area contents through a speech backend.
    ///
    /// Returns the silent placeholder clip for the host's audio player.
    /// Backend failures surface as an error status plus the returned error.
    pub fn listen<S: SpeakText>(&mut self, backend: &mut S) -> Result<Vec<u8>, GistError> {
        if self.text.trim().is_empty() {
            self.status = Some(Status::new("Please select some text first", StatusKind::Error));
            return Err(GistError::NoCapturedText);
        }

        self.listen_busy = true;
        let utterance = speech::prepare_utterance(&self.text);
        let result = backend.speak(&utterance, &self.settings);
        self.listen_busy = false;

        match result {
            Ok(()) => {
                self.status = Some(Status::new(
                    "Speech generated successfully",
                    StatusKind::Success,
                ));
                Ok(wav::silent_wav(&utterance))
            }
            Err(err) => {
                self.status = Some(Status::new(
                    format!("Error generating speech: {err}"),
                    StatusKind::Error,
                ));
                Err(err)
            }
        }
    }
}
