use std::fmt;

use serde::{Deserialize, Serialize};

/// The type of a question, determining the answer shape it collects.
///
/// The set of supported types is closed; anything else found on the wire
/// decodes into [`QuestionType::Unsupported`] carrying the raw name, so a
/// survey with one malformed question still loads and every other question
/// keeps working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    /// Free text input.
    Text,

    /// Numeric input.
    Number,

    /// Pick exactly one of the listed options.
    SingleChoice,

    /// Pick any number of the listed options.
    MultipleChoice,

    /// Pick exactly one option from a dropdown.
    DropdownList,

    /// A scale with one labelled position per option; answers are position
    /// indices (or an index pair in ranged mode).
    DiscreteScale,

    /// A 0-100 slider between a low and a high label; answers are numbers
    /// (or a low/high pair in ranged mode).
    ///
    /// Stored surveys predating the spelling fix use `continousScale`;
    /// both names decode to this variant.
    #[serde(alias = "continousScale")]
    ContinuousScale,

    /// Any type name this version does not know. Carried verbatim so it
    /// can be reported instead of dropped.
    #[serde(untagged)]
    Unsupported(String),
}

impl QuestionType {
    /// The wire name of this type.
    pub fn name(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::SingleChoice => "singleChoice",
            Self::MultipleChoice => "multipleChoice",
            Self::DropdownList => "dropdownList",
            Self::DiscreteScale => "discreteScale",
            Self::ContinuousScale => "continuousScale",
            Self::Unsupported(name) => name,
        }
    }

    /// Check if this is one of the seven known types.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }

    /// Check if this is a scale type (the only types with a ranged mode).
    pub fn is_scale(&self) -> bool {
        matches!(self, Self::DiscreteScale | Self::ContinuousScale)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// The type of question (determines the expected answer shape).
    #[serde(rename = "type")]
    kind: QuestionType,

    /// The prompt text shown to the respondent.
    #[serde(rename = "question")]
    prompt: String,

    /// Whether submission requires an answer to this question.
    required: bool,

    /// Ranged mode: collect a low/high pair instead of a single value.
    /// Only meaningful for the scale types.
    #[serde(default)]
    range_enabled: bool,

    /// Option labels. Selectable labels for the choice types, one label
    /// per position for discrete scales, the two end labels for
    /// continuous scales; unused for text and number questions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<String>,
}

impl Question {
    /// Create a new question of the given type.
    pub fn new(kind: QuestionType, prompt: impl Into<String>) -> Self {
        Self {
            kind,
            prompt: prompt.into(),
            required: false,
            range_enabled: false,
            options: Vec::new(),
        }
    }

    /// Create a free-text question.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self::new(QuestionType::Text, prompt)
    }

    /// Create a numeric question.
    pub fn number(prompt: impl Into<String>) -> Self {
        Self::new(QuestionType::Number, prompt)
    }

    /// Create a single-choice question with the given option labels.
    pub fn single_choice<I, S>(prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(QuestionType::SingleChoice, prompt).with_options(options)
    }

    /// Create a multiple-choice question with the given option labels.
    pub fn multiple_choice<I, S>(prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(QuestionType::MultipleChoice, prompt).with_options(options)
    }

    /// Create a dropdown question with the given option labels.
    pub fn dropdown_list<I, S>(prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(QuestionType::DropdownList, prompt).with_options(options)
    }

    /// Create a discrete scale question with one label per position.
    pub fn discrete_scale<I, S>(prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(QuestionType::DiscreteScale, prompt).with_options(options)
    }

    /// Create a continuous scale question with its low and high end labels.
    pub fn continuous_scale(
        prompt: impl Into<String>,
        low: impl Into<String>,
        high: impl Into<String>,
    ) -> Self {
        Self::new(QuestionType::ContinuousScale, prompt).with_options([low.into(), high.into()])
    }

    /// Replace the option labels.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Mark this question as required.
    pub fn require(mut self) -> Self {
        self.required = true;
        self
    }

    /// Enable ranged mode (scale types only; ignored by everything else).
    pub fn ranged(mut self) -> Self {
        self.range_enabled = true;
        self
    }

    /// Get the question type.
    pub fn kind(&self) -> &QuestionType {
        &self.kind
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Whether submission requires an answer.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Whether this question collects a low/high pair.
    pub fn range_enabled(&self) -> bool {
        self.range_enabled
    }

    /// Get the option labels.
    pub fn options(&self) -> &[String] {
        &self.options
    }
}
