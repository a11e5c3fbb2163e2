//! # canvass
//!
//! Results aggregation for typed surveys. Storage- and presentation-agnostic.
//!
//! Given a survey schema and the raw responses collected for it, this crate
//! computes per-question statistics (the summary view), projects single
//! respondents for playback (the individual view), and checks submissions
//! before they are stored. The aggregation functions are pure and do no
//! I/O or logging, so every surface that renders or exports results calls
//! the same functions and gets the same numbers.
//!
//! ## Usage
//!
//! ```rust
//! use canvass::{Response, Survey, Question, summarize_survey};
//!
//! let survey = Survey::new("Team check-in", vec![Question::text("How was your week?")]);
//! let responses = vec![
//!     Response::new().with_answer(0, "Busy"),
//!     Response::new().with_answer(0, "Quiet"),
//! ];
//!
//! let summary = summarize_survey(&survey, &responses);
//! assert_eq!(summary.respondent_count, 2);
//! assert_eq!(summary.questions[0].response_count, 2);
//! ```
//!
//! Statistics depend on the question type: text answers pass through
//! verbatim, numeric and scale questions get means, choice questions get
//! per-option counts and percentages. A question nobody answered yet is
//! reported as such rather than as a row of zeros, and a question with an
//! unrecognized type degrades to a marker instead of failing the survey.

// Re-export all types from canvass-types
pub use canvass_types::*;

mod error;
pub use error::ResultsError;

mod summary;
pub use summary::{
    OptionCount, PositionCount, QuestionStats, QuestionSummary, SurveySummary, ValueCount,
    summarize_question, summarize_survey,
};

mod individual;
pub use individual::{AnswerView, individual_response, respondent_answers};

mod submission;
pub use submission::{SubmissionError, apply_scale_defaults, validate_response};
