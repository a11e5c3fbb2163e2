//! Core types for the canvass crate.
//!
//! This crate provides the foundational types for describing surveys and
//! the responses collected for them:
//! - `Survey` - The top-level survey structure with its ordered question list
//! - `Question` and `QuestionType` - Individual questions and their answer shapes
//! - `AnswerValue` - The tagged union of everything a respondent can submit
//! - `Response` and `ResponseSet` - One submission, and the stored collection
//!
//! All types round-trip through the JSON document shapes the hosted survey
//! service stores, including its historical quirks (stringified question
//! indices as response keys, the misspelled `continousScale` type name).

mod answer;
pub use answer::AnswerValue;

mod question;
pub use question::{Question, QuestionType};

mod response;
pub use response::{Response, ResponseSet};

mod survey;
pub use survey::Survey;
