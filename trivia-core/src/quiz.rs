//! Quiz selection: one random question the player has not seen yet

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::lenient::i32_or_string;
use crate::models::Question;

/// Category id meaning "every category"
pub const ALL_CATEGORIES: i32 = 0;

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

/// Category chosen by the player; the client also sends `type`, which is ignored
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "i32_or_string")]
    pub id: i32,
}

/// Which questions are eligible for a quiz round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i32),
}

impl QuizScope {
    pub fn from_category_id(id: i32) -> Self {
        if id == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(id)
        }
    }
}

impl QuizRequest {
    pub fn scope(&self) -> QuizScope {
        QuizScope::from_category_id(self.quiz_category.id)
    }

    pub fn previous(&self) -> HashSet<i32> {
        self.previous_questions.iter().copied().collect()
    }
}

/// Pick uniformly among `candidates` whose id is not in `previous`.
///
/// Returns `None` only when every candidate has already been asked.
pub fn select_question<R>(
    candidates: Vec<Question>,
    previous: &HashSet<i32>,
    rng: &mut R,
) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    remaining.choose(rng).cloned()
}
