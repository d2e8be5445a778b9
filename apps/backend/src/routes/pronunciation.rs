//! Pronunciation matching endpoint

use axum::{extract::State, Json};
use pronunciation_core::match_with_thresholds;

use crate::models::{MatchRequest, MatchResult};
use crate::AppState;

/// POST /api/match
/// Grades transcribed speech against the expected phrase
pub async fn grade(
    State(state): State<AppState>,
    Json(payload): Json<MatchRequest>,
) -> Json<MatchResult> {
    let result = match_with_thresholds(&payload.transcribed, &payload.expected, &state.thresholds);

    tracing::debug!(
        "Graded attempt: score={} correct={}",
        result.score,
        result.is_correct
    );

    Json(result)
}
