//! Scenario catalog.
//!
//! # Format
//! A JSON array of scenarios:
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "On the Airplane to Mexico",
//!     "words": [{ "spanish": "semana", "english": "week" }],
//!     "phrases": [{ "spanish": "Una semana", "english": "One week" }],
//!     "goals": [{ "id": 1, "content": "Explain how long you'll stay", "cues": ["una semana"] }],
//!     ...
//!   }
//! ]
//! ```

use std::collections::HashSet;

use crate::error::{CatalogError, Result};
use crate::types::{Scenario, ScenarioSummary};

const BUILTIN_SCENARIOS: &str = include_str!("../data/scenarios.json");

/// Validated collection of practice scenarios.
#[derive(Debug, Clone)]
pub struct Catalog {
    scenarios: Vec<Scenario>,
}

impl Catalog {
    /// Scenarios bundled with the library.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SCENARIOS)
    }

    /// Parse and validate a JSON scenario list.
    pub fn from_json(content: &str) -> Result<Self> {
        let scenarios: Vec<Scenario> = serde_json::from_str(content)?;
        Self::new(scenarios)
    }

    /// Validate scenarios: unique IDs, unique goal IDs, non-empty drills.
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self> {
        let mut seen_ids = HashSet::new();

        for scenario in &scenarios {
            if !seen_ids.insert(scenario.id) {
                return Err(CatalogError::DuplicateScenario { id: scenario.id });
            }
            if scenario.words.is_empty() && scenario.phrases.is_empty() {
                return Err(CatalogError::EmptyScenario { id: scenario.id });
            }

            let mut seen_goals = HashSet::new();
            for goal in &scenario.goals {
                if !seen_goals.insert(goal.id) {
                    return Err(CatalogError::DuplicateGoal {
                        scenario: scenario.id,
                        goal: goal.id,
                    });
                }
            }
        }

        Ok(Self { scenarios })
    }

    pub fn get(&self, id: u32) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn summaries(&self) -> Vec<ScenarioSummary> {
        self.scenarios.iter().map(Scenario::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_json(id: u32, goal_ids: &[u32], with_words: bool) -> String {
        let goals = goal_ids
            .iter()
            .map(|g| format!(r#"{{"id": {g}, "content": "Goal {g}"}}"#))
            .collect::<Vec<_>>()
            .join(", ");
        let words = if with_words {
            r#"[{"spanish": "hola", "english": "hello"}]"#
        } else {
            "[]"
        };
        format!(
            r#"{{"id": {id}, "title": "S{id}", "description": "", "avatar": "", "avatar_name": "Ana",
                "duration_secs": 300, "words": {words}, "phrases": [], "goals": [{goals}],
                "partner_lines": []}}"#
        )
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 3);

        let airplane = catalog.get(1).unwrap();
        assert_eq!(airplane.avatar_name, "Carlos");
        assert_eq!(airplane.learning_items().len(), 12);
        assert_eq!(airplane.goals.len(), 4);
        assert!(airplane.goals.iter().all(|g| !g.cues.is_empty()));
    }

    #[test]
    fn summaries_count_items_and_goals() {
        let catalog = Catalog::builtin().unwrap();
        let summaries = catalog.summaries();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[1].title, "Ordering at a Restaurant");
        assert_eq!(summaries[1].item_count, 11);
        assert_eq!(summaries[1].goal_count, 4);
    }

    #[test]
    fn get_unknown_scenario() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn goals_without_cues_parse() {
        let json = format!("[{}]", scenario_json(1, &[1, 2], true));
        let catalog = Catalog::from_json(&json).unwrap();
        assert!(catalog.get(1).unwrap().goals[0].cues.is_empty());
    }

    #[test]
    fn reject_duplicate_scenario_ids() {
        let json = format!("[{}, {}]", scenario_json(4, &[], true), scenario_json(4, &[], true));
        let result = Catalog::from_json(&json);
        assert!(matches!(result, Err(CatalogError::DuplicateScenario { id: 4 })));
    }

    #[test]
    fn reject_duplicate_goal_ids() {
        let json = format!("[{}]", scenario_json(2, &[1, 1], true));
        let result = Catalog::from_json(&json);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateGoal { scenario: 2, goal: 1 })
        ));
    }

    #[test]
    fn reject_empty_scenario() {
        let json = format!("[{}]", scenario_json(3, &[], false));
        let result = Catalog::from_json(&json);
        assert!(matches!(result, Err(CatalogError::EmptyScenario { id: 3 })));
    }

    #[test]
    fn reject_malformed_json() {
        let result = Catalog::from_json("{not json");
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn empty_list_is_valid() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }
}
