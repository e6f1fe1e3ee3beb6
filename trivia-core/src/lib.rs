//! trivia-core: domain types and request-independent logic for the trivia API
//!
//! Nothing in this crate touches the network or the database. The server
//! crate loads rows, then hands them to [`paginate`] and [`select_question`].

pub mod error;
pub mod lenient;
pub mod models;
pub mod pagination;
pub mod quiz;
pub mod search;

pub use error::{CoreError, Result};
pub use models::{Category, MissingField, NewQuestion, Question, QuestionDraft};
pub use pagination::{paginate, PageParams, QUESTIONS_PER_PAGE};
pub use quiz::{select_question, QuizCategory, QuizRequest, QuizScope};
pub use search::SearchRequest;
