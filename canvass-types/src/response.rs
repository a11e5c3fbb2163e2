use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::AnswerValue;

/// One respondent's full submission to a survey.
///
/// Answers are keyed by question index (the position in the survey's
/// question list). A response may answer any subset of the questions;
/// everything else counts as skipped.
///
/// On the wire a response is a flat JSON object whose keys are the
/// stringified question indices, plus an optional `_id` assigned by the
/// store on append:
///
/// ```json
/// { "_id": "5e86…", "0": "Emma", "2": ["Lecture notes"], "3": [10, 40] }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// Storage-assigned id, if the response has been persisted.
    id: Option<String>,

    /// Answer values by question index.
    answers: BTreeMap<usize, AnswerValue>,
}

impl Response {
    /// Create a new empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Record an answer for the question at the given index.
    pub fn with_answer(mut self, index: usize, value: impl Into<AnswerValue>) -> Self {
        self.answers.insert(index, value.into());
        self
    }

    /// Insert or replace the answer at the given index.
    pub fn insert(&mut self, index: usize, value: impl Into<AnswerValue>) {
        self.answers.insert(index, value.into());
    }

    /// Get the storage id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Get the answer at the given index, treating skipped questions as absent.
    ///
    /// This is the one place the missing-answer rule lives: an absent key,
    /// an explicit null, and an empty string all come back as `None`.
    /// Aggregation, playback, validation, and export all read through here
    /// so that "skipped" means the same thing everywhere.
    pub fn answer(&self, index: usize) -> Option<&AnswerValue> {
        self.answers.get(&index).filter(|value| !value.is_missing())
    }

    /// Get the raw stored value at the given index, nulls and all.
    pub fn get(&self, index: usize) -> Option<&AnswerValue> {
        self.answers.get(&index)
    }

    /// Check whether the question at the given index was answered.
    pub fn has_answer(&self, index: usize) -> bool {
        self.answer(index).is_some()
    }

    /// Iterate over all stored index/value entries, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &AnswerValue)> {
        self.answers.iter().map(|(index, value)| (*index, value))
    }

    /// Get the number of stored entries (including nulls).
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Check if no entries are stored at all.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl Serialize for Response {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = self.answers.len() + usize::from(self.id.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(id) = &self.id {
            map.serialize_entry("_id", id)?;
        }
        for (index, value) in &self.answers {
            map.serialize_entry(&index.to_string(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Response {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ResponseVisitor;

        impl<'de> Visitor<'de> for ResponseVisitor {
            type Value = Response;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of question indices to answer values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Response, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut response = Response::new();
                while let Some(key) = map.next_key::<String>()? {
                    if key == "_id" {
                        response.id = map.next_value()?;
                    } else if let Ok(index) = key.parse::<usize>() {
                        response.answers.insert(index, map.next_value()?);
                    } else {
                        // Stored documents occasionally carry stray fields;
                        // they are not answers, so they are not kept.
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(response)
            }
        }

        deserializer.deserialize_map(ResponseVisitor)
    }
}

/// The stored response collection for one survey.
///
/// Append-only: responses are never edited or removed one at a time.
/// `updated_at` tracks the last append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSet {
    /// All recorded responses, in submission order.
    pub responses: Vec<Response>,

    /// When the last response was appended (or the set was created).
    pub updated_at: DateTime<Utc>,
}

impl ResponseSet {
    /// Create an empty response set.
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Get the number of recorded responses.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Check if no responses have been recorded.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl Default for ResponseSet {
    fn default() -> Self {
        Self::new()
    }
}
