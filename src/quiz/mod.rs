pub mod generator;
pub mod grader;

pub use generator::{BLANK, BlankPolicy, GeneratorConfig, QuestionGenerator};
#[allow(unused_imports)]
pub use generator::generate;
pub use grader::{NOT_ANSWERED, Score, answers_from_form, grade, score};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Option labels, assigned positionally after shuffling
pub const OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub text: String,
}

/// A generated multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Sentence with the answer replaced by the blank marker
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    /// Label of the option holding the blanked word
    pub correct: String,
}

impl Question {
    pub fn option(&self, label: &str) -> Option<&AnswerOption> {
        self.options
            .iter()
            .find(|o| o.label.eq_ignore_ascii_case(label))
    }

    /// Text of the correct option
    pub fn answer(&self) -> Option<&str> {
        self.option(&self.correct).map(|o| o.text.as_str())
    }
}

/// Questions handed from the teacher to the students under a short key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: String,
    pub questions: Vec<Question>,
    pub timer_seconds: u32,
    pub created_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(id: impl Into<String>, questions: Vec<Question>, timer_seconds: u32) -> Self {
        Self {
            id: id.into(),
            questions,
            timer_seconds,
            created_at: Utc::now(),
        }
    }
}

/// A question together with the student's answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    #[serde(flatten)]
    pub question: Question,
    pub user_answer: String,
    pub is_correct: bool,
}
