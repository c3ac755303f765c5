use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Wording for every user-facing string on the form page.
#[derive(Debug, PartialEq, Eq)]
pub struct FormLabels {
    pub page_title: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub api_key: &'static str,
    pub marks: &'static str,
    pub topics: &'static str,
    pub topics_placeholder: &'static str,
    pub bloom_level: &'static str,
    pub question_count: &'static str,
    pub syllabus: &'static str,
    pub syllabus_placeholder: &'static str,
    pub guidelines: &'static str,
    pub guidelines_placeholder: &'static str,
    pub example_format: &'static str,
    pub example_placeholder: &'static str,
    pub submit: &'static str,
    pub success: &'static str,
    pub result_heading: &'static str,
    pub copy_heading: &'static str,
    pub download: &'static str,
    pub footer_tip: &'static str,
}

const EXAMPLE_PLACEHOLDER: &str = "Example:
Q1. What is a binary search tree? (2 marks)
Answer: A binary search tree is a node-based structure where each node has two children. The left child is smaller, and the right child is greater.

Q2. Explain the time complexity of binary search. (3 marks)
Answer: Binary search has a time complexity of O(log n)...";

static STANDARD: FormLabels = FormLabels {
    page_title: "AI Question Generator",
    heading: "AI Question & Answer Generator",
    tagline: "Generate questions and answers based on marks, topics, and Bloom's Taxonomy levels",
    api_key: "OpenAI API Key",
    marks: "Marks per Question",
    topics: "Topics (one per line or comma-separated)",
    topics_placeholder: "e.g., Data Structures, Algorithms, Database Management",
    bloom_level: "Bloom's Taxonomy Level",
    question_count: "Number of Questions",
    syllabus: "Syllabus Content (Optional)",
    syllabus_placeholder:
        "Paste your syllabus content here. If provided, this will be used instead of topics.",
    guidelines: "Additional Comments/Guidelines (Optional)",
    guidelines_placeholder:
        "e.g., Focus on practical applications, avoid theoretical questions, etc.",
    example_format: "Question & Answer Format Example",
    example_placeholder: EXAMPLE_PLACEHOLDER,
    submit: "Generate Questions & Answers",
    success: "Questions and Answers Generated Successfully!",
    result_heading: "Generated Questions & Answers",
    copy_heading: "Copy the content below:",
    download: "Download as Text",
    footer_tip: "Tip: Make sure your OpenAI API key has sufficient credits and permissions.",
};

static EXAM: FormLabels = FormLabels {
    page_title: "Exam Paper Generator",
    heading: "Exam Paper Builder",
    tagline: "Draft exam questions with model answers for any Bloom's Taxonomy level",
    api_key: "API Key",
    marks: "Marks",
    topics: "Topics",
    topics_placeholder: "One topic per line, or separate them with commas",
    bloom_level: "Cognitive Level",
    question_count: "Questions",
    syllabus: "Syllabus (optional, replaces topics)",
    syllabus_placeholder: "Paste the unit or module syllabus here.",
    guidelines: "Instructions for the examiner (optional)",
    guidelines_placeholder: "e.g., Include one numerical problem.",
    example_format: "Answer key format",
    example_placeholder: EXAMPLE_PLACEHOLDER,
    submit: "Build Exam Paper",
    success: "Exam paper ready.",
    result_heading: "Exam Paper",
    copy_heading: "Plain text:",
    download: "Download",
    footer_tip: "Your API key is used for this request only and is never stored.",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelVariant {
    #[default]
    Standard,
    Exam,
}

impl LabelVariant {
    pub fn labels(&self) -> &'static FormLabels {
        match self {
            LabelVariant::Standard => &STANDARD,
            LabelVariant::Exam => &EXAM,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelVariant::Standard => "standard",
            LabelVariant::Exam => "exam",
        }
    }
}

impl FromStr for LabelVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(LabelVariant::Standard),
            "exam" => Ok(LabelVariant::Exam),
            other => Err(format!("Unknown label variant '{}'", other)),
        }
    }
}
