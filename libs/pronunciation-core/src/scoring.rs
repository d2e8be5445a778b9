//! Drill points.

use crate::types::{ItemKind, MatchResult};

impl ItemKind {
    /// Points a correct attempt earns.
    pub fn points(self) -> u32 {
        match self {
            Self::Word => 5,
            Self::Phrase => 10,
        }
    }
}

/// Points earned by an attempt; only correct verdicts score.
pub fn points_for(kind: ItemKind, result: &MatchResult) -> u32 {
    if result.is_correct {
        kind.points()
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::match_pronunciation;

    #[test]
    fn phrases_worth_more_than_words() {
        assert_eq!(ItemKind::Word.points(), 5);
        assert_eq!(ItemKind::Phrase.points(), 10);
    }

    #[test]
    fn correct_attempt_earns_points() {
        let result = match_pronunciation("Es mi primera ves", "Es mi primera vez");
        assert!(result.is_correct);
        assert_eq!(points_for(ItemKind::Phrase, &result), 10);
    }

    #[test]
    fn incorrect_attempt_earns_nothing() {
        let result = match_pronunciation("tiempo", "semana");
        assert!(!result.is_correct);
        assert_eq!(points_for(ItemKind::Word, &result), 0);
    }
}
