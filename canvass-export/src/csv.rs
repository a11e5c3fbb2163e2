use canvass::{Response, Survey};
use csv::Writer;

use crate::ExportError;

/// Render all responses as CSV, one row per respondent.
///
/// The header carries the question prompts; cells hold the raw answers
/// (skipped questions are empty cells, multiple selections join with
/// `"; "`, ranged answers render as `low - high`). No statistics are
/// included; spreadsheet users re-derive their own from the raw rows.
pub fn responses_to_csv(survey: &Survey, responses: &[Response]) -> Result<String, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());

    let mut header = Vec::with_capacity(survey.len() + 1);
    header.push("Response".to_string());
    header.extend(survey.questions.iter().map(|q| q.prompt().to_string()));
    writer.write_record(&header)?;

    for (row, response) in responses.iter().enumerate() {
        let mut record = Vec::with_capacity(survey.len() + 1);
        record.push((row + 1).to_string());
        for index in 0..survey.len() {
            let cell = response
                .answer(index)
                .map(ToString::to_string)
                .unwrap_or_default();
            record.push(cell);
        }
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvass::Question;

    #[test]
    fn rows_hold_raw_answers() {
        let survey = Survey::new(
            "Test",
            vec![
                Question::text("Name?"),
                Question::multiple_choice("Materials?", ["A", "B"]),
                Question::continuous_scale("Share?", "None", "All").ranged(),
            ],
        );
        let responses = vec![
            Response::new()
                .with_answer(0, "Emma")
                .with_answer(1, vec!["A", "B"])
                .with_answer(2, [20.0, 60.0]),
            Response::new().with_answer(0, "Mike"),
        ];

        let rendered = responses_to_csv(&survey, &responses).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Response,Name?,Materials?,Share?");
        assert_eq!(lines[1], "1,Emma,A; B,20 - 60");
        assert_eq!(lines[2], "2,Mike,,");
    }

    #[test]
    fn prompts_with_commas_are_quoted() {
        let survey = Survey::new("Test", vec![Question::text("Name, please?")]);
        let rendered = responses_to_csv(&survey, &[]).unwrap();
        assert_eq!(rendered.lines().next().unwrap(), "Response,\"Name, please?\"");
    }
}
