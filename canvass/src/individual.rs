use canvass_types::{AnswerValue, Question, QuestionType, Response, Survey};
use serde::Serialize;

use crate::ResultsError;

/// One respondent's answer to one question, reshaped for display.
///
/// This is a projection of the stored value, not a statistic: nothing is
/// averaged or counted. The paginated individual view renders a list of
/// these, one per question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum AnswerView {
    /// The respondent skipped this question. Distinct from every answered
    /// shape, including an empty selection list.
    NoResponse,

    /// The question's type is not recognized; the stored value is carried
    /// raw so it can at least be shown.
    Unsupported {
        type_name: String,
        value: AnswerValue,
    },

    /// A text answer.
    Text { text: String },

    /// A numeric answer.
    Number { value: f64 },

    /// The chosen label of a single-choice or dropdown question.
    Choice { label: String },

    /// The chosen labels of a multiple-choice question, in stored order.
    Choices { labels: Vec<String> },

    /// A discrete scale position, with its option label when the index
    /// actually points at one.
    Position { index: f64, label: Option<String> },

    /// A continuous scale value on the 0-100 domain.
    Value { value: f64 },

    /// A ranged scale answer.
    Range { low: f64, high: f64 },

    /// The stored value does not fit the question's type; carried raw for
    /// display rather than dropped.
    Mismatched { value: AnswerValue },
}

/// Project one respondent's answer to one question.
///
/// `respondent_index` selects a response by its position in the response
/// list (this is what the individual view pages over), `question_index` a
/// question by its position in the survey. Both are checked; a skipped
/// answer comes back as [`AnswerView::NoResponse`] before any type
/// handling happens.
pub fn individual_response(
    survey: &Survey,
    responses: &[Response],
    respondent_index: usize,
    question_index: usize,
) -> Result<AnswerView, ResultsError> {
    let response = respondent(responses, respondent_index)?;
    let question = survey
        .question(question_index)
        .ok_or(ResultsError::UnknownQuestion {
            index: question_index,
            count: survey.len(),
        })?;
    Ok(project(question, response.answer(question_index)))
}

/// Project all of one respondent's answers, in question order.
pub fn respondent_answers(
    survey: &Survey,
    responses: &[Response],
    respondent_index: usize,
) -> Result<Vec<AnswerView>, ResultsError> {
    let response = respondent(responses, respondent_index)?;
    Ok(survey
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| project(question, response.answer(index)))
        .collect())
}

fn respondent(responses: &[Response], index: usize) -> Result<&Response, ResultsError> {
    responses
        .get(index)
        .ok_or(ResultsError::RespondentOutOfRange {
            index,
            count: responses.len(),
        })
}

fn project(question: &Question, answer: Option<&AnswerValue>) -> AnswerView {
    let Some(value) = answer else {
        return AnswerView::NoResponse;
    };

    let view = match question.kind() {
        QuestionType::Text => value.as_text().map(|text| AnswerView::Text {
            text: text.to_string(),
        }),
        QuestionType::Number => value.as_number().map(|value| AnswerView::Number { value }),
        QuestionType::SingleChoice | QuestionType::DropdownList => {
            value.as_text().map(|label| AnswerView::Choice {
                label: label.to_string(),
            })
        }
        QuestionType::MultipleChoice => value.as_texts().map(|labels| AnswerView::Choices {
            labels: labels.to_vec(),
        }),
        QuestionType::DiscreteScale | QuestionType::ContinuousScale
            if question.range_enabled() =>
        {
            value
                .as_pair()
                .map(|[low, high]| AnswerView::Range { low, high })
        }
        QuestionType::DiscreteScale => value.as_number().map(|index| AnswerView::Position {
            index,
            label: position_label(question, index),
        }),
        QuestionType::ContinuousScale => value.as_number().map(|value| AnswerView::Value { value }),
        QuestionType::Unsupported(name) => Some(AnswerView::Unsupported {
            type_name: name.clone(),
            value: value.clone(),
        }),
    };

    view.unwrap_or_else(|| AnswerView::Mismatched {
        value: value.clone(),
    })
}

fn position_label(question: &Question, index: f64) -> Option<String> {
    if index.fract() != 0.0 || index < 0.0 {
        return None;
    }
    question.options().get(index as usize).cloned()
}
