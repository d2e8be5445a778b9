//! Speech-to-text provider seam.
//!
//! The matcher never talks to a transcription service itself. Callers hold a
//! [`TranscriptionProvider`] chosen at startup, transcribe the recording, and
//! hand the resulting text to [`match_with_thresholds`].

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use crate::matching::match_with_thresholds;
use crate::types::{MatchResult, MatchThresholds};

/// Transcript text used when a role-play recording could not be transcribed.
pub const AUDIO_PLACEHOLDER: &str = "[Audio recorded]";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranscriptionError {
    #[error("recording contained no audio")]
    EmptyAudio,
    #[error("provider returned {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Reference to a recorded audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRef {
    uri: String,
}

impl AudioRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Build a `file://` reference from a local path or URI.
    pub fn from_path(path: &str) -> Self {
        if path.starts_with("file://") {
            Self::new(path)
        } else {
            Self::new(format!("file://{}", path))
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Container format guessed from the URI; recorders default to m4a.
    pub fn format(&self) -> AudioFormat {
        if self.uri.contains(".wav") {
            AudioFormat::Wav
        } else if self.uri.contains(".mp3") {
            AudioFormat::Mp3
        } else if self.uri.contains(".mp4") {
            AudioFormat::Mp4
        } else {
            AudioFormat::M4a
        }
    }
}

/// Audio container formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    M4a,
    Wav,
    Mp3,
    Mp4,
}

impl AudioFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::M4a => "audio/m4a",
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mp3",
            Self::Mp4 => "audio/mp4",
        }
    }

    /// Upload file name for multipart requests.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::M4a => "recording.m4a",
            Self::Wav => "recording.wav",
            Self::Mp3 => "recording.mp3",
            Self::Mp4 => "recording.mp4",
        }
    }
}

/// Language the provider should transcribe in (ISO 639-1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageHint(pub String);

impl Default for LanguageHint {
    fn default() -> Self {
        Self("es".to_string())
    }
}

impl LanguageHint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Speech-to-text service.
///
/// Implementations take their credentials and endpoints as constructor
/// arguments.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    /// Provider identifier.
    fn name(&self) -> &'static str;

    /// Best-effort text for the recording, in the hinted language.
    async fn transcribe(
        &self,
        audio: &AudioRef,
        language: &LanguageHint,
    ) -> Result<String, TranscriptionError>;
}

/// Provider that replays queued outcomes in order.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    outcomes: Mutex<VecDeque<Result<String, TranscriptionError>>>,
}

impl ScriptedProvider {
    pub fn new(outcomes: impl IntoIterator<Item = Result<String, TranscriptionError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
        }
    }

    /// Provider that returns each text once.
    pub fn with_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(|t| Ok(t.into())))
    }

    pub fn push(&self, outcome: Result<String, TranscriptionError>) {
        self.queue().push_back(outcome);
    }

    fn queue(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<String, TranscriptionError>>> {
        // A poisoned queue still holds valid outcomes
        self.outcomes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl TranscriptionProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn transcribe(
        &self,
        _audio: &AudioRef,
        _language: &LanguageHint,
    ) -> Result<String, TranscriptionError> {
        self.queue()
            .pop_front()
            .unwrap_or_else(|| Err(TranscriptionError::Unavailable("script exhausted".to_string())))
    }
}

/// Transcribe a drill recording and grade it against the expected phrase.
pub async fn score_attempt(
    provider: &dyn TranscriptionProvider,
    audio: &AudioRef,
    language: &LanguageHint,
    expected: &str,
    thresholds: &MatchThresholds,
) -> Result<MatchResult, TranscriptionError> {
    let text = provider.transcribe(audio, language).await?;
    Ok(match_with_thresholds(text.trim(), expected, thresholds))
}

/// Transcribe a role-play turn, substituting [`AUDIO_PLACEHOLDER`] on failure.
pub async fn transcribe_or_placeholder(
    provider: &dyn TranscriptionProvider,
    audio: &AudioRef,
    language: &LanguageHint,
) -> String {
    match provider.transcribe(audio, language).await {
        Ok(text) => text.trim().to_string(),
        Err(_) => AUDIO_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Feedback;

    #[test]
    fn from_path_adds_file_scheme() {
        assert_eq!(AudioRef::from_path("/tmp/rec.m4a").uri(), "file:///tmp/rec.m4a");
        assert_eq!(AudioRef::from_path("file:///tmp/rec.m4a").uri(), "file:///tmp/rec.m4a");
    }

    #[test]
    fn detects_audio_format() {
        assert_eq!(AudioRef::new("file:///a/rec.wav").format(), AudioFormat::Wav);
        assert_eq!(AudioRef::new("file:///a/rec.mp3").format(), AudioFormat::Mp3);
        assert_eq!(AudioRef::new("file:///a/rec.mp4").format(), AudioFormat::Mp4);
        assert_eq!(AudioRef::new("file:///a/rec.caf").format(), AudioFormat::M4a);
        assert_eq!(AudioFormat::Wav.mime_type(), "audio/wav");
        assert_eq!(AudioFormat::M4a.file_name(), "recording.m4a");
    }

    #[test]
    fn default_language_is_spanish() {
        assert_eq!(LanguageHint::default().as_str(), "es");
    }

    #[tokio::test]
    async fn score_attempt_trims_and_matches() {
        let provider = ScriptedProvider::with_texts(["  Una semana.\n"]);
        let result = score_attempt(
            &provider,
            &AudioRef::from_path("/tmp/rec.m4a"),
            &LanguageHint::default(),
            "Una semana",
            &MatchThresholds::default(),
        )
        .await
        .unwrap();

        assert!(result.is_correct);
        assert_eq!(result.feedback, Feedback::Perfect);
        assert_eq!(result.transcribed, "Una semana.");
    }

    #[tokio::test]
    async fn score_attempt_propagates_provider_errors() {
        let provider = ScriptedProvider::new([Err(TranscriptionError::Rejected {
            status: 401,
            body: "invalid key".to_string(),
        })]);
        let result = score_attempt(
            &provider,
            &AudioRef::new("file:///tmp/rec.wav"),
            &LanguageHint::default(),
            "hola",
            &MatchThresholds::default(),
        )
        .await;

        assert!(matches!(result, Err(TranscriptionError::Rejected { status: 401, .. })));
    }

    #[tokio::test]
    async fn empty_transcription_is_graded() {
        let provider = ScriptedProvider::with_texts([""]);
        let result = score_attempt(
            &provider,
            &AudioRef::new("file:///tmp/rec.wav"),
            &LanguageHint::default(),
            "hola",
            &MatchThresholds::default(),
        )
        .await
        .unwrap();

        assert_eq!(result.score, 0);
        assert_eq!(result.feedback, Feedback::TryAgain);
    }

    #[tokio::test]
    async fn placeholder_on_failure() {
        let provider = ScriptedProvider::new([
            Ok(" ¡Hola! ".to_string()),
            Err(TranscriptionError::EmptyAudio),
        ]);
        let audio = AudioRef::new("file:///tmp/rec.m4a");
        let language = LanguageHint::default();

        assert_eq!(transcribe_or_placeholder(&provider, &audio, &language).await, "¡Hola!");
        assert_eq!(
            transcribe_or_placeholder(&provider, &audio, &language).await,
            AUDIO_PLACEHOLDER
        );
    }

    #[tokio::test]
    async fn exhausted_script_is_unavailable() {
        let provider = ScriptedProvider::default();
        provider.push(Ok("uno".to_string()));
        let audio = AudioRef::new("file:///tmp/rec.m4a");
        let language = LanguageHint::default();

        assert_eq!(provider.transcribe(&audio, &language).await.unwrap(), "uno");
        assert!(matches!(
            provider.transcribe(&audio, &language).await,
            Err(TranscriptionError::Unavailable(_))
        ));
        assert_eq!(provider.name(), "scripted");
    }
}
