use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Question;

/// The top-level structure containing all questions and metadata for a survey.
///
/// The question list is ordered; a response refers to questions by their
/// position in this list, so reordering questions after responses exist
/// would silently corrupt results. The store layer refuses edits once a
/// response has been recorded for exactly this reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    /// Survey title shown to respondents.
    pub title: String,

    /// Longer description shown below the title (may be empty).
    pub description: String,

    /// All questions, in presentation order.
    pub questions: Vec<Question>,

    /// Opaque id of the authoring user.
    pub author: String,

    /// Display name of the authoring user.
    pub author_name: String,

    /// Whether the survey currently accepts responses.
    pub active: bool,

    /// When the survey was created.
    pub created_at: DateTime<Utc>,
}

impl Survey {
    /// Create a new active survey with the given title and questions.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            questions,
            author: String::new(),
            author_name: String::new(),
            active: true,
            created_at: Utc::now(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the authoring user's id and display name.
    pub fn with_author(mut self, author: impl Into<String>, author_name: impl Into<String>) -> Self {
        self.author = author.into();
        self.author_name = author_name.into();
        self
    }

    /// Override the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Mark the survey as closed to new responses.
    pub fn closed(mut self) -> Self {
        self.active = false;
        self
    }

    /// Get the question at the given index.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the survey has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
