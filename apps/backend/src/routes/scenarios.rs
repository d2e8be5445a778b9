//! Scenario endpoints: listing, vocabulary drill, role-play goals

use axum::{
    extract::{Path, State},
    Json,
};
use pronunciation_core::{evaluate_goals, match_with_thresholds, points_for};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/scenarios
pub async fn list(State(state): State<AppState>) -> Json<ScenarioListResponse> {
    Json(ScenarioListResponse {
        scenarios: state.catalog.summaries(),
    })
}

/// GET /api/scenarios/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Scenario>> {
    let scenario = find_scenario(&state, id)?;
    Ok(Json(scenario.clone()))
}

/// POST /api/scenarios/:id/drill/:index
/// Grades one vocabulary item and awards points for a correct attempt
pub async fn drill_attempt(
    State(state): State<AppState>,
    Path((id, index)): Path<(u32, usize)>,
    Json(payload): Json<DrillAttemptRequest>,
) -> Result<Json<DrillAttemptResponse>> {
    let scenario = find_scenario(&state, id)?;
    let item = scenario
        .learning_item(index)
        .ok_or_else(|| ApiError::NotFound(format!("Item {} in scenario {}", index, id)))?;

    let result = match_with_thresholds(&payload.transcribed, &item.item.spanish, &state.thresholds);
    let points_awarded = points_for(item.kind, &result);

    tracing::info!(
        "Drill attempt scenario={} item={} score={} points={}",
        id,
        index,
        result.score,
        points_awarded
    );

    let item_count = scenario.words.len() + scenario.phrases.len();
    let next_index = Some(index + 1).filter(|next| *next < item_count);

    Ok(Json(DrillAttemptResponse {
        index,
        item,
        result,
        points_awarded,
        next_index,
    }))
}

/// POST /api/scenarios/:id/goals/evaluate
/// Evaluates role-play goals against the conversation transcript
pub async fn evaluate(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<GoalEvaluationRequest>,
) -> Result<Json<GoalEvaluationResponse>> {
    let scenario = find_scenario(&state, id)?;

    let remaining_secs = payload.remaining_secs.unwrap_or(0);
    if remaining_secs > scenario.duration_secs {
        return Err(ApiError::BadRequest(format!(
            "remaining_secs {} exceeds duration {}",
            remaining_secs, scenario.duration_secs
        )));
    }

    let goals = evaluate_goals(&scenario.goals, &payload.transcript, &state.thresholds);
    let summary = SessionSummary::from_statuses(&goals, scenario.duration_secs, remaining_secs);

    tracing::info!(
        "Evaluated goals scenario={} completed={}/{}",
        id,
        summary.completed_goals,
        summary.total_goals
    );

    Ok(Json(GoalEvaluationResponse { goals, summary }))
}

fn find_scenario(state: &AppState, id: u32) -> Result<&Scenario> {
    state
        .catalog
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("Scenario {}", id)))
}
