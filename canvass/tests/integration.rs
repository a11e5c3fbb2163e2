//! Integration tests for canvass, driven by the shared example surveys.

use canvass::{
    AnswerView, QuestionStats, ResultsError, individual_response, respondent_answers,
    summarize_question, summarize_survey,
};
use example_surveys::{course_feedback, tiny};
use serde_json::json;

#[test]
fn test_course_feedback_summary() {
    let survey = course_feedback::survey();
    let responses = course_feedback::responses();

    let summary = summarize_survey(&survey, &responses);
    assert_eq!(summary.respondent_count, 4);
    assert_eq!(summary.questions.len(), 9);

    // One respondent skipped the text question with an empty string.
    let text = &summary.questions[0];
    assert_eq!(text.response_count, 3);
    assert_eq!(
        text.stats,
        QuestionStats::Text {
            answers: vec![
                "The hands-on labs".into(),
                "Pairing sessions".into(),
                "The guest lectures".into(),
            ],
        }
    );

    let QuestionStats::Number { mean, ref histogram } = summary.questions[1].stats else {
        panic!("expected number stats");
    };
    assert_eq!(mean, 8.0);
    assert_eq!(histogram.len(), 2);
    assert_eq!((histogram[0].value, histogram[0].count), (4.0, 1));
    assert_eq!((histogram[1].value, histogram[1].count), (10.0, 2));

    // Everyone answered the required track question.
    let QuestionStats::Choice { ref options } = summary.questions[2].stats else {
        panic!("expected choice stats");
    };
    assert_eq!(summary.questions[2].response_count, 4);
    let percentages: Vec<(usize, f64)> = options
        .iter()
        .map(|option| (option.count, option.percentage))
        .collect();
    assert_eq!(percentages, vec![(2, 50.0), (1, 25.0), (1, 25.0)]);

    // Five selections across three respondents.
    let QuestionStats::MultipleChoice {
        ref options,
        total_selections,
    } = summary.questions[3].stats
    else {
        panic!("expected multiple choice stats");
    };
    assert_eq!(total_selections, 5);
    assert_eq!(options[0].count, 3);
    assert_eq!(options[0].percentage, 60.0);
    assert_eq!(options[3].count, 0);
    assert_eq!(options[3].percentage, 0.0);

    let QuestionStats::DiscreteScale { mean, ref positions } = summary.questions[5].stats else {
        panic!("expected discrete scale stats");
    };
    assert_eq!(mean, 2.33);
    let counts: Vec<usize> = positions.iter().map(|position| position.count).collect();
    assert_eq!(counts, vec![0, 0, 2, 1, 0]);

    assert_eq!(
        summary.questions[6].stats,
        QuestionStats::RangedScale {
            low_mean: 1.33,
            high_mean: 3.33,
        }
    );

    let QuestionStats::ContinuousScale { mean, ref buckets } = summary.questions[7].stats else {
        panic!("expected continuous scale stats");
    };
    assert_eq!(mean, 75.0);
    assert_eq!(buckets.len(), 101);
    assert_eq!(buckets[50], 1);
    assert_eq!(buckets[70], 1);
    assert_eq!(buckets[90], 2);
    assert_eq!(buckets.iter().sum::<u64>(), 4);

    assert_eq!(
        summary.questions[8].stats,
        QuestionStats::RangedScale {
            low_mean: 26.67,
            high_mean: 66.67,
        }
    );
}

#[test]
fn test_summary_is_idempotent() {
    let survey = course_feedback::survey();
    let responses = course_feedback::responses();

    let first = summarize_survey(&survey, &responses);
    let second = summarize_survey(&survey, &responses);
    assert_eq!(first, second);
}

#[test]
fn test_dropdown_percentages_sum_to_hundred_within_rounding() {
    let survey = course_feedback::survey();
    let responses = course_feedback::responses();

    let summary = summarize_question(&survey, &responses, 4).unwrap();
    let QuestionStats::Choice { options } = summary.stats else {
        panic!("expected choice stats");
    };
    // three answers, one per option: 33.3 each
    assert!(options.iter().all(|option| option.percentage == 33.3));
    let total: f64 = options.iter().map(|option| option.percentage).sum();
    assert!((total - 100.0).abs() < 0.2);
}

#[test]
fn test_summary_wire_shape() {
    let summary = summarize_survey(&tiny::survey(), &tiny::responses());
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(
        json,
        json!({
            "respondentCount": 3,
            "questions": [{
                "index": 0,
                "prompt": "What is your name?",
                "type": "text",
                "responseCount": 3,
                "stats": {
                    "kind": "text",
                    "answers": ["Mike", "Emma", "Felix"],
                },
            }],
        })
    );
}

#[test]
fn test_individual_view_pages_through_respondents() {
    let survey = course_feedback::survey();
    let responses = course_feedback::responses();

    // the third respondent skipped around; every missing shape shows as NoResponse
    let views = respondent_answers(&survey, &responses, 2).unwrap();
    assert_eq!(views[0], AnswerView::NoResponse);
    assert_eq!(views[3], AnswerView::NoResponse);
    assert_eq!(views[4], AnswerView::NoResponse);
    assert_eq!(
        views[5],
        AnswerView::Position {
            index: 2.0,
            label: Some("Just right".into()),
        }
    );
    assert_eq!(views[8], AnswerView::NoResponse);

    // paging past the last respondent fails instead of defaulting
    let result = individual_response(&survey, &responses, 4, 0);
    assert_eq!(
        result,
        Err(ResultsError::RespondentOutOfRange { index: 4, count: 4 })
    );
}

#[test]
fn test_individual_view_projects_raw_values() {
    let survey = course_feedback::survey();
    let responses = course_feedback::responses();

    assert_eq!(
        individual_response(&survey, &responses, 0, 8).unwrap(),
        AnswerView::Range {
            low: 20.0,
            high: 60.0,
        }
    );
    assert_eq!(
        individual_response(&survey, &responses, 1, 3).unwrap(),
        AnswerView::Choices {
            labels: vec!["Lecture notes".into()],
        }
    );
}
