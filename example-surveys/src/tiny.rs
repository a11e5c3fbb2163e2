//! The smallest useful fixture: one text question, three answers.

use canvass::{Question, Response, Survey};

/// A single-question survey.
pub fn survey() -> Survey {
    Survey::new("Name poll", vec![Question::text("What is your name?")])
}

/// Three plain text answers.
pub fn responses() -> Vec<Response> {
    ["Mike", "Emma", "Felix"]
        .into_iter()
        .map(|name| Response::new().with_answer(0, name))
        .collect()
}
