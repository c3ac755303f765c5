use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{BloomLevel, GenerationRequest, ProviderCredential},
    views::labels::LabelVariant,
};

pub const DEFAULT_MARKS: u32 = 5;
pub const DEFAULT_QUESTION_COUNT: u32 = 5;

const MARKS_MESSAGE: &str = "Marks per question must be between 1 and 100";
const QUESTIONS_MESSAGE: &str = "Number of questions must be between 1 and 20";

fn default_marks() -> String {
    DEFAULT_MARKS.to_string()
}

fn default_question_count() -> String {
    DEFAULT_QUESTION_COUNT.to_string()
}

/// The HTML form as submitted by the browser.
///
/// Numeric fields stay as submitted so a cleared or garbled input is reported
/// on the page instead of failing extraction.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateQuestionsForm {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_marks")]
    pub marks_per_question: String,
    #[serde(default)]
    pub bloom_level: BloomLevel,
    #[serde(default = "default_question_count")]
    pub number_of_questions: String,
    #[serde(default)]
    pub topics: String,
    #[serde(default)]
    pub syllabus_content: String,
    #[serde(default)]
    pub additional_guidelines: String,
    #[serde(default)]
    pub example_format: String,
    #[serde(default)]
    pub variant: Option<LabelVariant>,
}

impl Default for GenerateQuestionsForm {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            marks_per_question: default_marks(),
            bloom_level: BloomLevel::default(),
            number_of_questions: default_question_count(),
            topics: String::new(),
            syllabus_content: String::new(),
            additional_guidelines: String::new(),
            example_format: String::new(),
            variant: None,
        }
    }
}

impl GenerateQuestionsForm {
    pub fn credential(&self) -> AppResult<ProviderCredential> {
        ProviderCredential::new(self.api_key.as_str())
    }

    pub fn to_generation_request(&self) -> AppResult<GenerationRequest> {
        let marks = parse_count(&self.marks_per_question);
        let questions = parse_count(&self.number_of_questions);

        let (marks, questions) = match (marks, questions) {
            (Some(marks), Some(questions)) => (marks, questions),
            (marks, questions) => {
                let messages: Vec<&str> = [(marks, MARKS_MESSAGE), (questions, QUESTIONS_MESSAGE)]
                    .into_iter()
                    .filter(|(value, _)| value.is_none())
                    .map(|(_, message)| message)
                    .collect();
                return Err(AppError::ValidationError(messages.join("; ")));
            }
        };

        Ok(GenerationRequest::new(marks, self.bloom_level, questions)
            .with_topics([self.topics.as_str()])
            .with_syllabus_content(self.syllabus_content.as_str())
            .with_additional_guidelines(self.additional_guidelines.as_str())
            .with_example_format(self.example_format.as_str()))
    }
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Topics as either a list or the raw comma/newline separated text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TopicsInput {
    List(Vec<String>),
    Text(String),
}

impl Default for TopicsInput {
    fn default() -> Self {
        TopicsInput::List(Vec::new())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuestionsRequestDto {
    pub marks_per_question: u32,
    pub bloom_level: BloomLevel,
    pub number_of_questions: u32,
    #[serde(default)]
    pub topics: TopicsInput,
    #[serde(default)]
    pub syllabus_content: Option<String>,
    #[serde(default)]
    pub additional_guidelines: Option<String>,
    #[serde(default)]
    pub example_format: Option<String>,
}

impl From<GenerateQuestionsRequestDto> for GenerationRequest {
    fn from(dto: GenerateQuestionsRequestDto) -> Self {
        let request = GenerationRequest::new(
            dto.marks_per_question,
            dto.bloom_level,
            dto.number_of_questions,
        );
        let request = match dto.topics {
            TopicsInput::List(topics) => request.with_topics(topics),
            TopicsInput::Text(text) => request.with_topics([text]),
        };

        request
            .with_syllabus_content(dto.syllabus_content.unwrap_or_default())
            .with_additional_guidelines(dto.additional_guidelines.unwrap_or_default())
            .with_example_format(dto.example_format.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadForm {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariantQuery {
    pub variant: Option<LabelVariant>,
}
