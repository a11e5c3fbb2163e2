use canvass::{OptionCount, QuestionStats, Survey, SurveySummary};

/// Render a survey summary as plain text.
///
/// This is the hand-off format for natural-language summarization: a
/// header identifying the survey, then one block per question with its
/// statistics spelled out in lines a language model can consume without
/// knowing the JSON schema. Rendering is deterministic for a given
/// summary; making the external call is the caller's concern.
pub fn summary_digest(survey: &Survey, summary: &SurveySummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Survey: {}\n", survey.title));
    if !survey.description.is_empty() {
        out.push_str(&survey.description);
        out.push('\n');
    }
    out.push_str(&format!(
        "Created: {}\n",
        survey.created_at.format("%b %-d, %Y")
    ));
    out.push_str(&format!("Respondents: {}\n", summary.respondent_count));

    for question in &summary.questions {
        out.push('\n');
        out.push_str(&format!(
            "Q{}. {} ({} answered)\n",
            question.index + 1,
            question.prompt,
            question.response_count
        ));
        render_stats(&mut out, &question.stats);
    }
    out
}

fn render_stats(out: &mut String, stats: &QuestionStats) {
    match stats {
        QuestionStats::NoResponses => out.push_str("No responses yet.\n"),
        QuestionStats::Unsupported { type_name } => {
            out.push_str(&format!("Question type {type_name:?} is not supported.\n"));
        }
        QuestionStats::Text { answers } => {
            for answer in answers {
                out.push_str(&format!("- {answer}\n"));
            }
        }
        QuestionStats::Number { mean, histogram } => {
            out.push_str(&format!("Average: {mean:.2}\n"));
            for entry in histogram {
                out.push_str(&format!("- {}: {}\n", entry.value, entry.count));
            }
        }
        QuestionStats::Choice { options } => render_options(out, options),
        QuestionStats::MultipleChoice {
            options,
            total_selections,
        } => {
            out.push_str(&format!("Total selections: {total_selections}\n"));
            render_options(out, options);
        }
        QuestionStats::DiscreteScale { mean, positions } => {
            out.push_str(&format!("Average position: {mean:.2}\n"));
            for position in positions {
                out.push_str(&format!("- {}: {}\n", position.label, position.count));
            }
        }
        QuestionStats::RangedScale {
            low_mean,
            high_mean,
        } => {
            out.push_str(&format!("Average range: {low_mean:.2} to {high_mean:.2}\n"));
        }
        QuestionStats::ContinuousScale { mean, buckets } => {
            out.push_str(&format!("Average: {mean:.2}\n"));
            // only the landed-on values; 101 mostly-zero lines help nobody
            let values: Vec<String> = buckets
                .iter()
                .enumerate()
                .filter(|(_, count)| **count > 0)
                .map(|(value, count)| format!("{value} ({count})"))
                .collect();
            if !values.is_empty() {
                out.push_str(&format!("Values: {}\n", values.join(", ")));
            }
        }
    }
}

fn render_options(out: &mut String, options: &[OptionCount]) {
    for option in options {
        out.push_str(&format!(
            "- {}: {} ({:.1}%)\n",
            option.label, option.count, option.percentage
        ));
    }
}
