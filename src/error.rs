use thiserror::Error;

/// Errors surfaced by the collaborator components.
///
/// The summarization core itself never fails; it is total over all string
/// inputs. These variants exist for the layers around it: reporting absent
/// input to the user and surfacing missing platform capabilities.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GistError {
    #[error("no text captured")]
    NoCapturedText,

    #[error("speech synthesis unavailable: {0}")]
    SpeechUnavailable(String),
}
