//! Core pronunciation library shared by the backend and mobile clients.
//!
//! Provides:
//! - Pronunciation matching (normalization, Levenshtein similarity, tiered feedback)
//! - Scenario catalog for vocabulary drills and role-play
//! - Transcription provider seam (speech-to-text is supplied by the caller)
//! - Content-based role-play goal evaluation
//! - Drill scoring

pub mod catalog;
pub mod error;
pub mod goals;
pub mod matching;
pub mod scoring;
pub mod transcription;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, ConfigError, Result};
pub use goals::{evaluate_goals, SessionGrade, SessionSummary};
pub use matching::{
    classify, levenshtein_distance, match_pronunciation, match_with_thresholds, normalize,
    similarity_score,
};
pub use scoring::points_for;
pub use transcription::{
    score_attempt, transcribe_or_placeholder, AudioFormat, AudioRef, LanguageHint,
    ScriptedProvider, TranscriptionError, TranscriptionProvider,
};
pub use types::{
    Feedback, Goal, GoalStatus, ItemKind, LearningItem, MatchResult, MatchThresholds, Scenario,
    ScenarioSummary, Speaker, TranscriptEntry, VocabularyItem,
};
