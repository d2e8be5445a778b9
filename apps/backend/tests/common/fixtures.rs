//! Test fixtures and factory functions for request bodies.

use chrono::Utc;
use serde_json::{json, Value};

use pronunciation_backend::models::{GoalEvaluationRequest, TranscriptEntry};
use pronunciation_core::Speaker;

/// Body for POST /api/match.
pub fn match_request(transcribed: &str, expected: &str) -> Value {
    json!({
        "transcribed": transcribed,
        "expected": expected,
    })
}

/// Body for POST /api/scenarios/:id/drill/:index.
pub fn drill_request(transcribed: &str) -> Value {
    json!({ "transcribed": transcribed })
}

/// A transcript line spoken by the learner.
pub fn learner(message: &str) -> TranscriptEntry {
    TranscriptEntry {
        speaker: Speaker::Learner,
        message: message.to_string(),
        timestamp: Utc::now(),
    }
}

/// A transcript line spoken by the role-play partner.
pub fn partner(message: &str) -> TranscriptEntry {
    TranscriptEntry {
        speaker: Speaker::Partner,
        message: message.to_string(),
        timestamp: Utc::now(),
    }
}

/// Body for POST /api/scenarios/:id/goals/evaluate.
pub fn goal_evaluation_request(
    transcript: Vec<TranscriptEntry>,
    remaining_secs: Option<u32>,
) -> GoalEvaluationRequest {
    GoalEvaluationRequest {
        transcript,
        remaining_secs,
    }
}
