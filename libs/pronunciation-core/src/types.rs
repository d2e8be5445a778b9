//! Core types for the pronunciation engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Feedback tier shown to the learner after an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    #[serde(rename = "Perfect!")]
    Perfect,
    #[serde(rename = "Great job!")]
    GreatJob,
    #[serde(rename = "Close, but try again!")]
    Close,
    #[serde(rename = "Try again!")]
    TryAgain,
}

impl Feedback {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect!",
            Self::GreatJob => "Great job!",
            Self::Close => "Close, but try again!",
            Self::TryAgain => "Try again!",
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Verdict for a single pronunciation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the attempt counts as correct.
    pub is_correct: bool,
    /// Similarity percentage, 0 to 100.
    pub score: u8,
    pub feedback: Feedback,
    /// Raw transcribed text as supplied by the caller.
    pub transcribed: String,
}

/// Score thresholds for the verdict tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchThresholds {
    /// Minimum score counted as correct.
    pub accept: u8,
    /// Minimum score that earns the "close" tier.
    pub close: u8,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            accept: 80,
            close: 60,
        }
    }
}

impl MatchThresholds {
    /// Check that both thresholds are percentages and correctly ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for value in [self.accept, self.close] {
            if value > 100 {
                return Err(ConfigError::ThresholdOutOfRange { value });
            }
        }
        if self.close > self.accept {
            return Err(ConfigError::ThresholdOrder {
                accept: self.accept,
                close: self.close,
            });
        }
        Ok(())
    }
}

/// Kind of vocabulary drill item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Word,
    Phrase,
}

/// A Spanish word or phrase with its English gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub spanish: String,
    pub english: String,
}

/// Vocabulary item tagged with its kind, in drill order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningItem {
    pub kind: ItemKind,
    #[serde(flatten)]
    pub item: VocabularyItem,
}

/// Role-play goal the learner works toward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: u32,
    pub content: String,
    /// Spanish phrases that, when spoken, complete the goal.
    #[serde(default)]
    pub cues: Vec<String>,
}

/// A practice scenario: vocabulary drill followed by a role-play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub avatar: String,
    pub avatar_name: String,
    pub duration_secs: u32,
    pub words: Vec<VocabularyItem>,
    pub phrases: Vec<VocabularyItem>,
    pub goals: Vec<Goal>,
    /// Lines spoken by the role-play partner, in order.
    pub partner_lines: Vec<String>,
}

impl Scenario {
    /// Words first, then phrases.
    pub fn learning_items(&self) -> Vec<LearningItem> {
        let words = self.words.iter().map(|item| LearningItem {
            kind: ItemKind::Word,
            item: item.clone(),
        });
        let phrases = self.phrases.iter().map(|item| LearningItem {
            kind: ItemKind::Phrase,
            item: item.clone(),
        });
        words.chain(phrases).collect()
    }

    /// Learning item at `index` in drill order.
    pub fn learning_item(&self, index: usize) -> Option<LearningItem> {
        if index < self.words.len() {
            return Some(LearningItem {
                kind: ItemKind::Word,
                item: self.words[index].clone(),
            });
        }
        self.phrases
            .get(index - self.words.len())
            .map(|item| LearningItem {
                kind: ItemKind::Phrase,
                item: item.clone(),
            })
    }

    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            avatar_name: self.avatar_name.clone(),
            duration_secs: self.duration_secs,
            item_count: self.words.len() + self.phrases.len(),
            goal_count: self.goals.len(),
        }
    }
}

/// Scenario listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub avatar_name: String,
    pub duration_secs: u32,
    pub item_count: usize,
    pub goal_count: usize,
}

/// Who spoke a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Learner,
    Partner,
}

/// One line of a role-play conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Completion state of a goal after evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalStatus {
    pub id: u32,
    pub content: String,
    pub completed: bool,
    /// Learner utterance that completed the goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}
