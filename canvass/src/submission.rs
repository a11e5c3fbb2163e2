use canvass_types::{AnswerValue, Question, QuestionType, Response, Survey};

/// Error type for submission checks.
///
/// Each variant names the first offending question; the submission surface
/// shows one problem at a time, so validation stops at the first failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The survey is closed to new responses.
    #[error("survey is not accepting responses")]
    SurveyClosed,

    /// A required question has no answer.
    #[error("question {index} requires an answer")]
    MissingRequired { index: usize },

    /// The answer's shape does not fit the question's type.
    #[error("answer to question {index} has the wrong shape: expected {expected}, got {actual}")]
    ShapeMismatch {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },

    /// A choice answer names a label the question does not offer.
    #[error("answer to question {index} names an unknown option {label:?}")]
    UnknownOption { index: usize, label: String },

    /// A scale answer is outside its domain, or a ranged pair is inverted.
    #[error("answer to question {index} is outside the allowed range")]
    OutOfRange { index: usize },
}

/// Check a response against a survey before it is stored.
///
/// Verifies that the survey is open, that every required question has an
/// answer (by the same missing rule aggregation uses, so an answer of `0`
/// counts), and that every present answer fits its question: the right
/// value shape, labels the question actually offers, scale values inside
/// their domain. Questions of unsupported types never block a submission.
pub fn validate_response(survey: &Survey, response: &Response) -> Result<(), SubmissionError> {
    if !survey.active {
        return Err(SubmissionError::SurveyClosed);
    }
    for (index, question) in survey.questions.iter().enumerate() {
        match response.answer(index) {
            Some(value) => check_answer(index, question, value)?,
            None => {
                if question.required() && question.kind().is_supported() {
                    return Err(SubmissionError::MissingRequired { index });
                }
            }
        }
    }
    Ok(())
}

fn check_answer(
    index: usize,
    question: &Question,
    value: &AnswerValue,
) -> Result<(), SubmissionError> {
    match question.kind() {
        QuestionType::Text => {
            expect_text(index, value)?;
        }
        QuestionType::Number => {
            expect_number(index, value)?;
        }
        QuestionType::SingleChoice | QuestionType::DropdownList => {
            let label = expect_text(index, value)?;
            check_label(index, question, label)?;
        }
        QuestionType::MultipleChoice => {
            let labels = value
                .as_texts()
                .ok_or_else(|| mismatch(index, "Texts", value))?;
            for label in labels {
                check_label(index, question, label)?;
            }
        }
        QuestionType::DiscreteScale if question.range_enabled() => {
            let [low, high] = expect_pair(index, value)?;
            check_position(index, question, low)?;
            check_position(index, question, high)?;
            check_order(index, low, high)?;
        }
        QuestionType::DiscreteScale => {
            let position = expect_number(index, value)?;
            check_position(index, question, position)?;
        }
        QuestionType::ContinuousScale if question.range_enabled() => {
            let [low, high] = expect_pair(index, value)?;
            check_domain(index, low)?;
            check_domain(index, high)?;
            check_order(index, low, high)?;
        }
        QuestionType::ContinuousScale => {
            let position = expect_number(index, value)?;
            check_domain(index, position)?;
        }
        // Nothing sensible to check; the answer is stored as-is and the
        // results side reports the type as unsupported.
        QuestionType::Unsupported(_) => {}
    }
    Ok(())
}

fn expect_text<'a>(index: usize, value: &'a AnswerValue) -> Result<&'a str, SubmissionError> {
    value.as_text().ok_or_else(|| mismatch(index, "Text", value))
}

fn expect_number(index: usize, value: &AnswerValue) -> Result<f64, SubmissionError> {
    value
        .as_number()
        .ok_or_else(|| mismatch(index, "Number", value))
}

fn expect_pair(index: usize, value: &AnswerValue) -> Result<[f64; 2], SubmissionError> {
    value.as_pair().ok_or_else(|| mismatch(index, "Pair", value))
}

fn mismatch(index: usize, expected: &'static str, value: &AnswerValue) -> SubmissionError {
    SubmissionError::ShapeMismatch {
        index,
        expected,
        actual: value.type_name(),
    }
}

fn check_label(index: usize, question: &Question, label: &str) -> Result<(), SubmissionError> {
    if question.options().iter().any(|option| option == label) {
        Ok(())
    } else {
        Err(SubmissionError::UnknownOption {
            index,
            label: label.to_string(),
        })
    }
}

/// A discrete position must be a whole index into the option list.
fn check_position(index: usize, question: &Question, position: f64) -> Result<(), SubmissionError> {
    let count = question.options().len() as f64;
    if position.fract() == 0.0 && position >= 0.0 && position < count {
        Ok(())
    } else {
        Err(SubmissionError::OutOfRange { index })
    }
}

fn check_domain(index: usize, value: f64) -> Result<(), SubmissionError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(SubmissionError::OutOfRange { index })
    }
}

fn check_order(index: usize, low: f64, high: f64) -> Result<(), SubmissionError> {
    if low <= high {
        Ok(())
    } else {
        Err(SubmissionError::OutOfRange { index })
    }
}

/// Fill in the preselected defaults for untouched scale questions.
///
/// The submission form shows scale questions with a slider already sitting
/// somewhere, so "never touched" still means "submitted at the preset":
/// the middle position for a discrete scale, the quarter points for a
/// ranged one, 50 (or 25/75) on the 0-100 domain. Only absent scale
/// answers are filled; everything the respondent did touch stays as-is,
/// and required-question enforcement still applies afterwards.
pub fn apply_scale_defaults(survey: &Survey, mut response: Response) -> Response {
    for (index, question) in survey.questions.iter().enumerate() {
        if response.has_answer(index) {
            continue;
        }
        let positions = question.options().len();
        let default = match question.kind() {
            QuestionType::DiscreteScale if question.range_enabled() => {
                AnswerValue::Pair([(positions / 4) as f64, (positions * 3 / 4) as f64])
            }
            QuestionType::DiscreteScale => AnswerValue::Number((positions / 2) as f64),
            QuestionType::ContinuousScale if question.range_enabled() => {
                AnswerValue::Pair([25.0, 75.0])
            }
            QuestionType::ContinuousScale => AnswerValue::Number(50.0),
            _ => continue,
        };
        response.insert(index, default);
    }
    response
}
