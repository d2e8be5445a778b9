//! Role-play goal evaluation.
//!
//! A goal is complete once the learner has said one of its cue phrases. Cues
//! are matched with the same normalization and similarity rules as drill
//! attempts, so small transcription errors still count.

use serde::{Deserialize, Serialize};

use crate::matching::{normalize, similarity_score};
use crate::types::{Goal, GoalStatus, MatchThresholds, Speaker, TranscriptEntry};

/// Evaluate every goal against the learner's side of the conversation.
pub fn evaluate_goals(
    goals: &[Goal],
    transcript: &[TranscriptEntry],
    thresholds: &MatchThresholds,
) -> Vec<GoalStatus> {
    let utterances: Vec<(&str, String)> = transcript
        .iter()
        .filter(|entry| entry.speaker == Speaker::Learner)
        .map(|entry| (entry.message.as_str(), normalize(&entry.message)))
        .collect();

    goals
        .iter()
        .map(|goal| {
            let cues: Vec<String> = goal.cues.iter().map(|c| normalize(c)).collect();
            let evidence = utterances
                .iter()
                .find(|(_, spoken)| cues.iter().any(|cue| cue_spoken(spoken, cue, thresholds)))
                .map(|(raw, _)| raw.to_string());

            GoalStatus {
                id: goal.id,
                content: goal.content.clone(),
                completed: evidence.is_some(),
                evidence,
            }
        })
        .collect()
}

/// Whether a normalized utterance contains a normalized cue as whole words,
/// allowing for transcription errors within a window of the cue's word count.
fn cue_spoken(utterance: &str, cue: &str, thresholds: &MatchThresholds) -> bool {
    let words: Vec<&str> = utterance.split_whitespace().collect();
    let cue_words: Vec<&str> = cue.split_whitespace().collect();
    let cue_len = cue_words.len();

    if cue_len == 0 || words.is_empty() {
        return false;
    }

    // "hola" must not match inside "holanda"
    let padded_utterance = format!(" {} ", words.join(" "));
    let padded_cue = format!(" {} ", cue_words.join(" "));
    if padded_utterance.contains(&padded_cue) {
        return true;
    }

    if words.len() <= cue_len {
        return similarity_score(&words.join(" "), cue) >= thresholds.accept;
    }

    words
        .windows(cue_len)
        .any(|window| similarity_score(&window.join(" "), cue) >= thresholds.accept)
}

/// Overall grade for a role-play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionGrade {
    Excellent,
    Good,
    NeedsPractice,
}

impl SessionGrade {
    /// Grade for a goal completion percentage.
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= 90 {
            Self::Excellent
        } else if percentage >= 70 {
            Self::Good
        } else {
            Self::NeedsPractice
        }
    }
}

/// Outcome of a finished role-play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub completed_goals: usize,
    pub total_goals: usize,
    /// Share of goals completed, 0 to 100; 0 when the scenario has no goals.
    pub percentage: u8,
    pub grade: SessionGrade,
    pub time_used_secs: u32,
}

impl SessionSummary {
    pub fn from_statuses(statuses: &[GoalStatus], duration_secs: u32, remaining_secs: u32) -> Self {
        let total_goals = statuses.len();
        let completed_goals = statuses.iter().filter(|s| s.completed).count();
        let percentage = if total_goals == 0 {
            0
        } else {
            ((200 * completed_goals + total_goals) / (2 * total_goals)) as u8
        };

        Self {
            completed_goals,
            total_goals,
            percentage,
            grade: SessionGrade::from_percentage(percentage),
            time_used_secs: duration_secs.saturating_sub(remaining_secs),
        }
    }
}
