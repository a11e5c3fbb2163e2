//! End-of-term feedback survey for a programming course.
//!
//! One question of every supported type, with the scale types present in
//! both ranged and non-ranged form. The responses are arranged so that
//! every flavour of "skipped" shows up somewhere: absent keys, explicit
//! nulls, and an empty text answer.

use canvass::{AnswerValue, Question, Response, Survey};

/// The course feedback survey: nine questions covering all seven types.
pub fn survey() -> Survey {
    Survey::new(
        "Rust course feedback",
        vec![
            Question::text("What did you like most about the course?"),
            Question::number("How many hours per week did you spend on coursework?"),
            Question::single_choice(
                "Which track did you follow?",
                ["Beginner", "Intermediate", "Advanced"],
            )
            .require(),
            Question::multiple_choice(
                "Which materials did you use?",
                [
                    "Lecture notes",
                    "Video recordings",
                    "Exercise sheets",
                    "Office hours",
                ],
            ),
            Question::dropdown_list(
                "How did you hear about the course?",
                ["A friend", "Newsletter", "Search engine"],
            ),
            Question::discrete_scale(
                "How difficult was the course?",
                ["Trivial", "Easy", "Just right", "Hard", "Brutal"],
            ),
            Question::discrete_scale(
                "Which difficulty range should the next edition cover?",
                ["Trivial", "Easy", "Just right", "Hard", "Brutal"],
            )
            .ranged(),
            Question::continuous_scale(
                "How likely are you to recommend the course?",
                "Not at all",
                "Absolutely",
            ),
            Question::continuous_scale(
                "How much lecture time should go to live coding?",
                "None",
                "All of it",
            )
            .ranged(),
        ],
    )
    .with_description("Tell us how the last twelve weeks went.")
    .with_author("user-314", "Rafael")
}

/// Four responses: two complete, two with gaps.
pub fn responses() -> Vec<Response> {
    vec![
        Response::new()
            .with_answer(0, "The hands-on labs")
            .with_answer(1, 10.0)
            .with_answer(2, "Beginner")
            .with_answer(3, vec!["Lecture notes", "Exercise sheets"])
            .with_answer(4, "A friend")
            .with_answer(5, 2.0)
            .with_answer(6, [1.0, 3.0])
            .with_answer(7, 90.0)
            .with_answer(8, [20.0, 60.0]),
        Response::new()
            .with_answer(0, "Pairing sessions")
            .with_answer(1, 4.0)
            .with_answer(2, "Advanced")
            .with_answer(3, vec!["Lecture notes"])
            .with_answer(4, "Newsletter")
            .with_answer(5, 3.0)
            .with_answer(6, [2.0, 4.0])
            .with_answer(7, 70.0)
            .with_answer(8, [40.0, 80.0]),
        // skipped half the survey, in all three missing shapes
        Response::new()
            .with_answer(0, "")
            .with_answer(1, 10.0)
            .with_answer(2, "Beginner")
            .with_answer(4, AnswerValue::Null)
            .with_answer(5, 2.0)
            .with_answer(6, [1.0, 3.0])
            .with_answer(7, 50.0),
        Response::new()
            .with_answer(0, "The guest lectures")
            .with_answer(2, "Intermediate")
            .with_answer(3, vec!["Video recordings", "Lecture notes"])
            .with_answer(4, "Search engine")
            .with_answer(5, AnswerValue::Null)
            .with_answer(7, 90.0)
            .with_answer(8, [20.0, 60.0]),
    ]
}
