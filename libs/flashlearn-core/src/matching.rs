//! Answer matching and grading.

use std::collections::HashSet;

use crate::types::{Question, QuestionType, RoundSettings};

/// Similarity a written answer must exceed when typos are allowed.
pub const TYPO_THRESHOLD: f64 = 0.8;

/// Case-insensitive Dice coefficient over the character bigrams of two strings.
///
/// Returns 0.0 when either side is absent and 1.0 for an exact
/// (case-insensitive) match. Bigrams are compared as sets, so a repeated
/// bigram counts once.
pub fn similarity<'a, 'b>(a: impl Into<Option<&'a str>>, b: impl Into<Option<&'b str>>) -> f64 {
    let (Some(a), Some(b)) = (a.into(), b.into()) else {
        return 0.0;
    };

    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        return 1.0;
    }

    let pairs_a = bigrams(&a);
    let pairs_b = bigrams(&b);
    let total = pairs_a.len() + pairs_b.len();
    if total == 0 {
        // Two different single characters
        return 0.0;
    }

    let shared = pairs_a.intersection(&pairs_b).count();
    (2 * shared) as f64 / total as f64
}

fn bigrams(s: &str) -> HashSet<(char, char)> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

/// Grade a submitted answer.
///
/// Choice questions need an exact match with the correct option. Written
/// answers are trimmed first, then either compared exactly or, with
/// `allow_typos`, accepted when their similarity is above [`TYPO_THRESHOLD`].
pub fn grade(question: &Question, submitted: &str, settings: &RoundSettings) -> bool {
    match question.question_type {
        QuestionType::MultipleChoice | QuestionType::TrueFalse => {
            submitted == question.correct_answer
        }
        QuestionType::Written => {
            let typed = submitted.trim();
            if settings.allow_typos {
                similarity(typed, question.correct_answer.as_str()) > TYPO_THRESHOLD
            } else {
                typed == question.correct_answer
            }
        }
    }
}
