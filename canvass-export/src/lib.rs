//! Export surfaces for canvass results.
//!
//! Three read-only renderings of the same data the results pages show:
//!
//! - [`responses_to_csv`] - raw per-respondent rows, straight from the
//!   stored responses (spreadsheet users want the data, not the stats)
//! - [`summary_to_json`] - the aggregated [`SurveySummary`] as pretty JSON
//! - [`summary_digest`] - the summary as plain text, shaped to be pasted
//!   into (or sent to) a language-model summarizer
//!
//! None of these recompute anything: the engine aggregates, these format.
//!
//! [`SurveySummary`]: canvass::SurveySummary

mod csv;
pub use self::csv::responses_to_csv;

mod digest;
pub use digest::summary_digest;

mod json;
pub use json::summary_to_json;

/// Error type for export operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// CSV writing failed.
    #[error("failed to build CSV: {0}")]
    Csv(#[from] ::csv::Error),

    /// JSON serialization failed.
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),

    /// The CSV writer produced bytes that are not UTF-8.
    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
