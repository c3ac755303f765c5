use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::bloom_level::BloomLevel;

pub const MIN_MARKS: u32 = 1;
pub const MAX_MARKS: u32 = 100;
pub const MIN_QUESTIONS: u32 = 1;
pub const MAX_QUESTIONS: u32 = 20;

/// Parameters for one question/answer generation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_content_source"))]
pub struct GenerationRequest {
    #[validate(range(min = 1, max = 100, message = "Marks per question must be between 1 and 100"))]
    pub marks_per_question: u32,
    pub bloom_level: BloomLevel,
    #[validate(range(min = 1, max = 20, message = "Number of questions must be between 1 and 20"))]
    pub number_of_questions: u32,
    pub topics: Vec<String>,
    pub syllabus_content: Option<String>,
    pub additional_guidelines: Option<String>,
    pub example_format: Option<String>,
}

impl GenerationRequest {
    pub fn new(marks_per_question: u32, bloom_level: BloomLevel, number_of_questions: u32) -> Self {
        Self {
            marks_per_question,
            bloom_level,
            number_of_questions,
            topics: Vec::new(),
            syllabus_content: None,
            additional_guidelines: None,
            example_format: None,
        }
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.topics = topics
            .into_iter()
            .flat_map(|t| split_topics(t.as_ref()))
            .collect();
        self
    }

    pub fn with_syllabus_content(mut self, content: impl Into<String>) -> Self {
        self.syllabus_content = non_blank(content.into());
        self
    }

    pub fn with_additional_guidelines(mut self, guidelines: impl Into<String>) -> Self {
        self.additional_guidelines = non_blank(guidelines.into());
        self
    }

    pub fn with_example_format(mut self, example: impl Into<String>) -> Self {
        self.example_format = non_blank(example.into());
        self
    }

    /// Syllabus text when it has any content.
    pub fn syllabus(&self) -> Option<&str> {
        self.syllabus_content
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    pub fn has_topics(&self) -> bool {
        self.topics.iter().any(|t| !t.trim().is_empty())
    }
}

/// Splits free text on commas and newlines, dropping blank entries.
pub fn split_topics(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn validate_content_source(request: &GenerationRequest) -> Result<(), ValidationError> {
    if request.has_topics() || request.syllabus().is_some() {
        return Ok(());
    }

    Err(ValidationError::new("content_source").with_message(Cow::Borrowed(
        "Please enter either topics or syllabus content",
    )))
}

/// Provider output for a request. The text is never parsed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationResult {
    pub text: String,
    pub request: GenerationRequest,
    pub generated_at: DateTime<Utc>,
}

impl GenerationResult {
    pub fn new(text: impl AsRef<str>, request: GenerationRequest) -> Self {
        Self {
            text: text.as_ref().trim().to_string(),
            request,
            generated_at: Utc::now(),
        }
    }
}
