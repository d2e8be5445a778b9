//! Pronunciation matching: compares a learner's transcribed speech to the target phrase.

use crate::types::{Feedback, MatchResult, MatchThresholds};

/// Punctuation that never affects grading.
const IGNORED_PUNCTUATION: [char; 8] = ['¿', '?', '¡', '!', '.', ',', ';', ':'];

/// Compare transcribed speech to the expected phrase using the default thresholds.
pub fn match_pronunciation(transcribed: &str, expected: &str) -> MatchResult {
    match_with_thresholds(transcribed, expected, &MatchThresholds::default())
}

/// Compare transcribed speech to the expected phrase.
pub fn match_with_thresholds(
    transcribed: &str,
    expected: &str,
    thresholds: &MatchThresholds,
) -> MatchResult {
    let transcribed_normalized = normalize(transcribed);
    let expected_normalized = normalize(expected);

    if transcribed_normalized == expected_normalized {
        return MatchResult {
            is_correct: true,
            score: 100,
            feedback: Feedback::Perfect,
            transcribed: transcribed.to_string(),
        };
    }

    let score = similarity_score(&transcribed_normalized, &expected_normalized);
    let (is_correct, feedback) = classify(score, thresholds);

    MatchResult {
        is_correct,
        score,
        feedback,
        transcribed: transcribed.to_string(),
    }
}

/// Map a similarity score onto a verdict and feedback tier.
///
/// Exact matches are handled by the caller; a score of 100 here still
/// reports [`Feedback::GreatJob`].
pub fn classify(score: u8, thresholds: &MatchThresholds) -> (bool, Feedback) {
    if score >= thresholds.accept {
        (true, Feedback::GreatJob)
    } else if score >= thresholds.close {
        (false, Feedback::Close)
    } else {
        (false, Feedback::TryAgain)
    }
}

/// Lowercase, strip grading-irrelevant punctuation, and trim.
///
/// Accents and interior whitespace are preserved: "café" and "cafe" differ.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !IGNORED_PUNCTUATION.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Calculate Levenshtein distance between two strings, counted in characters.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Row i of the DP table; only the previous row is kept
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;

        for (j, b_char) in b_chars.iter().enumerate() {
            curr[j + 1] = if a_char == b_char {
                prev[j]
            } else {
                1 + prev[j] // substitution
                    .min(curr[j]) // insertion
                    .min(prev[j + 1]) // deletion
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Similarity percentage between two already-normalized strings.
///
/// Two empty strings are a full match. The score never drops below zero
/// because the distance is bounded by the longer length.
pub fn similarity_score(a: &str, b: &str) -> u8 {
    let (a_len, b_len) = (a.chars().count(), b.chars().count());
    let (longer, shorter, longer_len) = if a_len >= b_len {
        (a, b, a_len)
    } else {
        (b, a, b_len)
    };

    if longer_len == 0 {
        return 100;
    }

    let distance = levenshtein_distance(longer, shorter);
    let matched = longer_len.saturating_sub(distance);

    // round(matched / longer_len * 100), half-up, in integers
    let score = (200 * matched + longer_len) / (2 * longer_len);
    score.min(100) as u8
}
