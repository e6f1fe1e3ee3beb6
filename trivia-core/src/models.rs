//! Question and category records

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lenient::opt_i32_or_string;

/// A stored trivia question, in its wire shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// A question category (read-only through the API)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Body of `POST /questions`.
///
/// Every field is optional on the wire; the store decides what it accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "opt_i32_or_string")]
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "opt_i32_or_string")]
    pub difficulty: Option<i32>,
}

/// Field a store requires but the request left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField(pub &'static str);

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is required", self.0)
    }
}

impl std::error::Error for MissingField {}

/// Fully populated insert, produced by [`NewQuestion::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Check the NOT NULL columns, in schema order.
    pub fn validate(self) -> Result<QuestionDraft, MissingField> {
        Ok(QuestionDraft {
            question: self.question.ok_or(MissingField("question"))?,
            answer: self.answer.ok_or(MissingField("answer"))?,
            category: self.category.ok_or(MissingField("category"))?,
            difficulty: self.difficulty.ok_or(MissingField("difficulty"))?,
        })
    }
}

impl QuestionDraft {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn question_wire_shape() {
        let q = Question {
            id: 5,
            question: "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?".into(),
            answer: "Maya Angelou".into(),
            category: 4,
            difficulty: 2,
        };
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 5,
                "question": "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
                "answer": "Maya Angelou",
                "category": 4,
                "difficulty": 2
            })
        );
    }

    #[test]
    fn new_question_accepts_string_ids() {
        let body = json!({
            "question": "What is the capital of France?",
            "answer": "Paris",
            "category": "3",
            "difficulty": 1
        });
        let new: NewQuestion = serde_json::from_value(body).unwrap();
        assert_eq!(new.category, Some(3));
        assert_eq!(new.difficulty, Some(1));
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let new = NewQuestion {
            question: Some("Q".into()),
            answer: None,
            category: None,
            difficulty: Some(1),
        };
        assert_eq!(new.validate().unwrap_err(), MissingField("answer"));
    }

    #[test]
    fn validate_builds_draft() {
        let new = NewQuestion {
            question: Some("Q".into()),
            answer: Some("A".into()),
            category: Some(1),
            difficulty: Some(3),
        };
        let q = new.validate().unwrap().with_id(42);
        assert_eq!(q.id, 42);
        assert_eq!(q.difficulty, 3);
    }
}
