use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    constants::prompts::DOWNLOAD_FILE_NAME,
    models::domain::{BloomLevel, GenerationResult},
    views::page::render_result_html,
};

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponse {
    pub text: String,
    pub html: String,
    pub file_name: &'static str,
    pub bloom_level: BloomLevel,
    pub marks_per_question: u32,
    pub number_of_questions: u32,
    pub generated_at: DateTime<Utc>,
}

impl From<GenerationResult> for GenerationResponse {
    fn from(result: GenerationResult) -> Self {
        GenerationResponse {
            html: render_result_html(&result.text),
            text: result.text,
            file_name: DOWNLOAD_FILE_NAME,
            bloom_level: result.request.bloom_level,
            marks_per_question: result.request.marks_per_question,
            number_of_questions: result.request.number_of_questions,
            generated_at: result.generated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::GenerationRequest;

    #[test]
    fn test_response_carries_text_and_html() {
        let request = GenerationRequest::new(4, BloomLevel::Analyze, 2).with_topics(["Trees"]);
        let result = GenerationResult::new("Q1. Compare AVL & red-black trees.\nAnswer: ...", request);

        let dto: GenerationResponse = result.into();
        assert_eq!(dto.text, "Q1. Compare AVL & red-black trees.\nAnswer: ...");
        assert_eq!(dto.html, "Q1. Compare AVL &amp; red-black trees.<br>Answer: ...");
        assert_eq!(dto.file_name, "questions_and_answers.txt");
        assert_eq!(dto.bloom_level, BloomLevel::Analyze);
        assert_eq!(dto.number_of_questions, 2);
    }
}
