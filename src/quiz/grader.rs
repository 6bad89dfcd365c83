use std::collections::HashMap;

use serde::Serialize;

use super::{AnsweredQuestion, Question};

/// Recorded answer for a question the student skipped
pub const NOT_ANSWERED: &str = "Not answered";

/// Grade submitted labels against the answer key.
///
/// `answers` maps question index to the submitted label. Labels compare
/// case-insensitively; a missing answer is recorded as [`NOT_ANSWERED`] and
/// is always incorrect.
pub fn grade(questions: &[Question], answers: &HashMap<usize, String>) -> Vec<AnsweredQuestion> {
    questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let (user_answer, is_correct) = match answers.get(&i) {
                Some(answer) => (
                    answer.clone(),
                    answer.to_uppercase() == question.correct.to_uppercase(),
                ),
                None => (NOT_ANSWERED.to_string(), false),
            };

            AnsweredQuestion {
                question: question.clone(),
                user_answer,
                is_correct,
            }
        })
        .collect()
}

/// Turn submitted form fields into index -> label answers.
///
/// Fields whose name is not a question index are ignored.
pub fn answers_from_form(fields: HashMap<String, String>) -> HashMap<usize, String> {
    fields
        .into_iter()
        .filter_map(|(key, value)| key.trim().parse::<usize>().ok().map(|i| (i, value)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn percent(&self) -> f64 {
        if self.total > 0 {
            (self.correct as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

pub fn score(answered: &[AnsweredQuestion]) -> Score {
    Score {
        correct: answered.iter().filter(|a| a.is_correct).count(),
        total: answered.len(),
    }
}
