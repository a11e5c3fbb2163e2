use std::fmt;

use serde::{Deserialize, Serialize};

/// A single answer value submitted for one question.
///
/// This is the value stored in a [`Response`](crate::Response) for each
/// answered question. Responses arrive loosely typed, so the union is
/// deliberately wider than any single question type accepts; the variants
/// are untagged on the wire and recovered from the JSON shape alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// An explicit null (the respondent cleared or never touched the field).
    Null,

    /// A numeric value (number questions, scale positions, 0-100 values).
    Number(f64),

    /// A string value (text questions, single-choice and dropdown labels).
    Text(String),

    /// A low/high pair (ranged scale questions).
    Pair([f64; 2]),

    /// A list of option labels (multiple-choice questions).
    Texts(Vec<String>),
}

impl AnswerValue {
    /// Check whether this value counts as "no answer".
    ///
    /// A skipped question shows up either as an absent key, an explicit
    /// null, or an empty string; all three must be treated identically
    /// wherever an answer is read.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get this value as a list of labels.
    pub fn as_texts(&self) -> Option<&[String]> {
        match self {
            Self::Texts(labels) => Some(labels),
            _ => None,
        }
    }

    /// Try to get this value as a low/high pair.
    pub fn as_pair(&self) -> Option<[f64; 2]> {
        match self {
            Self::Pair(pair) => Some(*pair),
            _ => None,
        }
    }

    /// Get the shape name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Number(_) => "Number",
            Self::Text(_) => "Text",
            Self::Pair(_) => "Pair",
            Self::Texts(_) => "Texts",
        }
    }
}

/// Plain rendering for export cells: empty for null, `low - high` for
/// pairs, `"; "`-joined labels for lists.
impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Pair([low, high]) => write!(f, "{low} - {high}"),
            Self::Texts(labels) => f.write_str(&labels.join("; ")),
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for AnswerValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<[f64; 2]> for AnswerValue {
    fn from(pair: [f64; 2]) -> Self {
        Self::Pair(pair)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(labels: Vec<String>) -> Self {
        Self::Texts(labels)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(labels: Vec<&str>) -> Self {
        Self::Texts(labels.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_detection() {
        assert!(AnswerValue::Null.is_missing());
        assert!(AnswerValue::from("").is_missing());
        assert!(!AnswerValue::from("hi").is_missing());
        assert!(!AnswerValue::from(0.0).is_missing());
        assert!(!AnswerValue::from(Vec::<String>::new()).is_missing());
    }

    #[test]
    fn untagged_wire_shapes() {
        let cases = [
            ("null", AnswerValue::Null),
            ("42", AnswerValue::Number(42.0)),
            ("\"Emma\"", AnswerValue::from("Emma")),
            ("[10,20]", AnswerValue::Pair([10.0, 20.0])),
            ("[\"A\",\"B\"]", AnswerValue::from(vec!["A", "B"])),
        ];
        for (json, expected) in cases {
            let value: AnswerValue = serde_json::from_str(json).unwrap();
            assert_eq!(value, expected, "decoding {json}");
        }
    }

    #[test]
    fn empty_list_is_a_list() {
        let value: AnswerValue = serde_json::from_str("[]").unwrap();
        assert_eq!(value, AnswerValue::Texts(Vec::new()));
    }

    #[test]
    fn display_rendering() {
        assert_eq!(AnswerValue::Null.to_string(), "");
        assert_eq!(AnswerValue::from(10.0).to_string(), "10");
        assert_eq!(AnswerValue::from(7.5).to_string(), "7.5");
        assert_eq!(AnswerValue::Pair([20.0, 80.0]).to_string(), "20 - 80");
        assert_eq!(AnswerValue::from(vec!["A", "B"]).to_string(), "A; B");
    }
}
