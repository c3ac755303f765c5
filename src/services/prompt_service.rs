use crate::{
    constants::prompts::GUIDELINES_PLACEHOLDER,
    models::domain::{generation::split_topics, GenerationRequest},
};

/// Canonical comma-separated form of a topic list. Idempotent.
pub fn normalize_topics(text: &str) -> String {
    split_topics(text).join(", ")
}

/// Where the question content comes from: the syllabus wins over topics.
pub fn content_source(request: &GenerationRequest) -> (&'static str, String) {
    match request.syllabus() {
        Some(syllabus) => ("Syllabus Content", syllabus.to_string()),
        None => ("Topics", normalize_topics(&request.topics.join(","))),
    }
}

pub fn build_prompt(request: &GenerationRequest) -> String {
    let (content_label, content) = content_source(request);
    let count = request.number_of_questions;
    let marks = request.marks_per_question;
    let level = request.bloom_level;
    let guidelines = request
        .additional_guidelines
        .as_deref()
        .unwrap_or(GUIDELINES_PLACEHOLDER);
    let example = request.example_format.as_deref().unwrap_or_default();

    format!(
        "
Generate {count} unique questions and answers based on the following:

- Marks per question: {marks}
- Bloom's Taxonomy Level: {level}
- {content_label}: {content}
- Additional Comments: {guidelines}

Requirements:
1. Strictly generate {count} questions.
2. Each question must carry {marks} marks.
3. Questions should align with the {level} level of Bloom's Taxonomy.
4. Follow the example format below:
{example}

Output format:
Q[number]. [Question text] ({marks} marks)
Answer: [Detailed answer]
"
    )
}
