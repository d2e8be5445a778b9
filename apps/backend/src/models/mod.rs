//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from pronunciation-core
pub use pronunciation_core::{
    GoalStatus, ItemKind, LearningItem, MatchResult, Scenario, ScenarioSummary, SessionSummary,
    TranscriptEntry,
};

/// Request for POST /api/match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub transcribed: String,
    pub expected: String,
}

/// Response for GET /api/scenarios
#[derive(Debug, Serialize, Deserialize)]
pub struct ScenarioListResponse {
    pub scenarios: Vec<ScenarioSummary>,
}

/// Request for POST /api/scenarios/:id/drill/:index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillAttemptRequest {
    pub transcribed: String,
}

/// Response for POST /api/scenarios/:id/drill/:index
#[derive(Debug, Serialize, Deserialize)]
pub struct DrillAttemptResponse {
    pub index: usize,
    pub item: LearningItem,
    pub result: MatchResult,
    pub points_awarded: u32,
    /// Index of the next item, absent after the last one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_index: Option<usize>,
}

/// Request for POST /api/scenarios/:id/goals/evaluate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalEvaluationRequest {
    pub transcript: Vec<TranscriptEntry>,
    /// Seconds left on the session timer; absent means the timer ran out.
    #[serde(default)]
    pub remaining_secs: Option<u32>,
}

/// Response for POST /api/scenarios/:id/goals/evaluate
#[derive(Debug, Serialize, Deserialize)]
pub struct GoalEvaluationResponse {
    pub goals: Vec<GoalStatus>,
    pub summary: SessionSummary,
}
