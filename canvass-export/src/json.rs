use canvass::SurveySummary;

use crate::ExportError;

/// Render a survey summary as pretty-printed JSON.
///
/// The structure is exactly the engine's [`SurveySummary`]: respondent
/// count at the top, one entry per question with its type-dependent
/// statistics nested under `stats`.
pub fn summary_to_json(summary: &SurveySummary) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvass::{Question, Response, Survey, summarize_survey};
    use serde_json::Value;

    #[test]
    fn nested_summary_structure() {
        let survey = Survey::new(
            "Test",
            vec![
                Question::single_choice("Track?", ["Beginner", "Advanced"]),
                Question::number("Hours?"),
            ],
        );
        let responses = vec![
            Response::new().with_answer(0, "Beginner").with_answer(1, 6.0),
            Response::new().with_answer(0, "Beginner"),
        ];

        let rendered = summary_to_json(&summarize_survey(&survey, &responses)).unwrap();
        let json: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["respondentCount"], 2);
        assert_eq!(json["questions"][0]["type"], "singleChoice");
        assert_eq!(json["questions"][0]["stats"]["kind"], "choice");
        assert_eq!(
            json["questions"][0]["stats"]["options"][0]["percentage"],
            100.0
        );
        assert_eq!(json["questions"][1]["stats"]["kind"], "number");
        assert_eq!(json["questions"][1]["responseCount"], 1);
        assert_eq!(json["questions"][1]["stats"]["mean"], 6.0);
    }
}
