/// Error type for the results engine.
///
/// Both variants are index errors; everything else the engine can meet
/// (no responses, unknown question types, odd value shapes) is reported
/// inside the summary itself so one bad question never hides the rest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResultsError {
    /// The requested question index is not a valid position in the survey.
    #[error("no question at index {index} (survey has {count} questions)")]
    UnknownQuestion { index: usize, count: usize },

    /// The requested respondent index is not a valid position in the
    /// response list.
    #[error("no respondent at index {index} ({count} responses recorded)")]
    RespondentOutOfRange { index: usize, count: usize },
}
