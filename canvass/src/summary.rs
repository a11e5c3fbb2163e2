use canvass_types::{AnswerValue, Question, QuestionType, Response, Survey};
use serde::Serialize;

use crate::ResultsError;

/// Aggregate statistics for a whole survey.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySummary {
    /// Total number of responses recorded for the survey. A respondent who
    /// skipped individual questions still counts here.
    pub respondent_count: usize,

    /// One summary per question, in question order.
    pub questions: Vec<QuestionSummary>,
}

/// Aggregate statistics for a single question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    /// The question's position in the survey.
    pub index: usize,

    /// The prompt text, carried along so consumers need not re-join
    /// against the schema.
    pub prompt: String,

    /// The question type.
    #[serde(rename = "type")]
    pub kind: QuestionType,

    /// How many respondents answered this question (missing answers
    /// excluded).
    pub response_count: usize,

    /// The type-dependent statistics.
    pub stats: QuestionStats,
}

/// Type-dependent statistics for one question.
///
/// The two marker variants ([`NoResponses`](Self::NoResponses) and
/// [`Unsupported`](Self::Unsupported)) are ordinary values, not errors:
/// a question nobody answered yet and a question of a type this version
/// does not know both leave the rest of the survey fully summarized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum QuestionStats {
    /// Nobody has answered this question yet.
    NoResponses,

    /// The question's type is not recognized; `type_name` is the raw wire
    /// name so it can be reported.
    Unsupported { type_name: String },

    /// Text answers, verbatim and in response order.
    Text { answers: Vec<String> },

    /// Numeric answers: their mean and a frequency count per distinct
    /// value, ascending.
    Number { mean: f64, histogram: Vec<ValueCount> },

    /// Single-choice and dropdown answers: per-option counts with
    /// percentages of the respondents who answered.
    Choice { options: Vec<OptionCount> },

    /// Multiple-choice answers: per-option counts with percentages of all
    /// selections made. A respondent picking two options contributes two
    /// selections, so percentages relate to `total_selections`, not to
    /// respondent count.
    MultipleChoice {
        options: Vec<OptionCount>,
        total_selections: usize,
    },

    /// Non-ranged discrete scale: mean position plus a count per labelled
    /// position.
    DiscreteScale {
        mean: f64,
        positions: Vec<PositionCount>,
    },

    /// Ranged scale (discrete or continuous): the low and high ends of the
    /// submitted pairs averaged independently.
    RangedScale { low_mean: f64, high_mean: f64 },

    /// Non-ranged continuous scale: mean plus one bucket per integer value
    /// of the 0-100 domain, zero-filled.
    ContinuousScale { mean: f64, buckets: Vec<u64> },
}

/// Count and percentage for one option label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionCount {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

/// Frequency of one distinct numeric value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueCount {
    pub value: f64,
    pub count: usize,
}

/// Count of answers landing on one discrete scale position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionCount {
    pub label: String,
    pub count: usize,
}

/// Number of buckets for the non-ranged continuous scale histogram: one
/// per integer value of the 0-100 domain.
const CONTINUOUS_BUCKETS: usize = 101;

/// Summarize every question of the survey.
///
/// Applies the same per-question aggregation as [`summarize_question`] to
/// each question in order. Infallible: per-question oddities (no answers,
/// unknown types) are values inside the summary, never errors.
pub fn summarize_survey(survey: &Survey, responses: &[Response]) -> SurveySummary {
    let questions = survey
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| summarize(question, index, responses))
        .collect();
    SurveySummary {
        respondent_count: responses.len(),
        questions,
    }
}

/// Summarize a single question.
///
/// `question_index` must be a valid position in the survey's question
/// list. The statistics cover the non-missing answers at that index across
/// all responses; their shape depends on the question type (see
/// [`QuestionStats`]).
///
/// Pure: identical inputs always produce identical output, and neither
/// input is mutated.
pub fn summarize_question(
    survey: &Survey,
    responses: &[Response],
    question_index: usize,
) -> Result<QuestionSummary, ResultsError> {
    let question = survey
        .question(question_index)
        .ok_or(ResultsError::UnknownQuestion {
            index: question_index,
            count: survey.len(),
        })?;
    Ok(summarize(question, question_index, responses))
}

fn summarize(question: &Question, index: usize, responses: &[Response]) -> QuestionSummary {
    let answers: Vec<&AnswerValue> = responses
        .iter()
        .filter_map(|response| response.answer(index))
        .collect();

    // The empty case is decided up front, for every type alike. Without
    // this, each branch would degrade differently (0% rows, NaN means).
    let stats = if answers.is_empty() {
        QuestionStats::NoResponses
    } else {
        match question.kind() {
            QuestionType::Text => text_stats(&answers),
            QuestionType::Number => number_stats(&answers),
            QuestionType::SingleChoice | QuestionType::DropdownList => {
                choice_stats(question.options(), &answers)
            }
            QuestionType::MultipleChoice => multiple_choice_stats(question.options(), &answers),
            QuestionType::DiscreteScale | QuestionType::ContinuousScale
                if question.range_enabled() =>
            {
                ranged_stats(&answers)
            }
            QuestionType::DiscreteScale => discrete_stats(question.options(), &answers),
            QuestionType::ContinuousScale => continuous_stats(&answers),
            QuestionType::Unsupported(name) => QuestionStats::Unsupported {
                type_name: name.clone(),
            },
        }
    };

    QuestionSummary {
        index,
        prompt: question.prompt().to_string(),
        kind: question.kind().clone(),
        response_count: answers.len(),
        stats,
    }
}

fn text_stats(answers: &[&AnswerValue]) -> QuestionStats {
    let answers = answers
        .iter()
        .filter_map(|value| value.as_text())
        .map(str::to_string)
        .collect();
    QuestionStats::Text { answers }
}

fn number_stats(answers: &[&AnswerValue]) -> QuestionStats {
    let mut histogram: Vec<ValueCount> = Vec::new();
    for value in answers.iter().filter_map(|value| value.as_number()) {
        match histogram.iter_mut().find(|entry| entry.value == value) {
            Some(entry) => entry.count += 1,
            None => histogram.push(ValueCount { value, count: 1 }),
        }
    }
    histogram.sort_by(|a, b| a.value.total_cmp(&b.value));
    QuestionStats::Number {
        mean: mean_of(answers),
        histogram,
    }
}

fn choice_stats(options: &[String], answers: &[&AnswerValue]) -> QuestionStats {
    let total = answers.len();
    let options = options
        .iter()
        .map(|label| {
            let count = answers
                .iter()
                .filter(|value| value.as_text() == Some(label.as_str()))
                .count();
            OptionCount {
                label: label.clone(),
                count,
                percentage: percentage(count, total),
            }
        })
        .collect();
    QuestionStats::Choice { options }
}

fn multiple_choice_stats(options: &[String], answers: &[&AnswerValue]) -> QuestionStats {
    let counts: Vec<usize> = options
        .iter()
        .map(|label| {
            answers
                .iter()
                .filter(|value| {
                    value
                        .as_texts()
                        .is_some_and(|labels| labels.iter().any(|chosen| chosen == label))
                })
                .count()
        })
        .collect();
    let total_selections: usize = counts.iter().sum();
    let options = options
        .iter()
        .zip(counts)
        .map(|(label, count)| OptionCount {
            label: label.clone(),
            count,
            percentage: percentage(count, total_selections),
        })
        .collect();
    QuestionStats::MultipleChoice {
        options,
        total_selections,
    }
}

fn discrete_stats(options: &[String], answers: &[&AnswerValue]) -> QuestionStats {
    let positions = options
        .iter()
        .enumerate()
        .map(|(position, label)| {
            let count = answers
                .iter()
                .filter(|value| value.as_number() == Some(position as f64))
                .count();
            PositionCount {
                label: label.clone(),
                count,
            }
        })
        .collect();
    QuestionStats::DiscreteScale {
        mean: mean_of(answers),
        positions,
    }
}

fn ranged_stats(answers: &[&AnswerValue]) -> QuestionStats {
    if answers.is_empty() {
        return QuestionStats::RangedScale {
            low_mean: 0.0,
            high_mean: 0.0,
        };
    }
    let mut low_sum = 0.0;
    let mut high_sum = 0.0;
    for value in answers {
        let [low, high] = value.as_pair().unwrap_or([0.0, 0.0]);
        low_sum += low;
        high_sum += high;
    }
    let count = answers.len() as f64;
    QuestionStats::RangedScale {
        low_mean: round2(low_sum / count),
        high_mean: round2(high_sum / count),
    }
}

fn continuous_stats(answers: &[&AnswerValue]) -> QuestionStats {
    let mut buckets = vec![0u64; CONTINUOUS_BUCKETS];
    for value in answers.iter().filter_map(|value| value.as_number()) {
        // Only whole values of the 0-100 domain land in a bucket; the
        // mean still covers everything.
        if value.fract() == 0.0 && (0.0..=100.0).contains(&value) {
            buckets[value as usize] += 1;
        }
    }
    QuestionStats::ContinuousScale {
        mean: mean_of(answers),
        buckets,
    }
}

/// Mean of the numeric interpretations, rounded to two decimals.
///
/// Values of the wrong shape contribute zero to the sum but still count in
/// the denominator, so a stray malformed answer drags the mean instead of
/// poisoning it with NaN.
fn mean_of(answers: &[&AnswerValue]) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }
    let sum: f64 = answers
        .iter()
        .map(|value| value.as_number().unwrap_or(0.0))
        .sum();
    round2(sum / answers.len() as f64)
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(count as f64 * 100.0 / total as f64)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
