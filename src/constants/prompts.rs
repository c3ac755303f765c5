pub const EDUCATOR_SYSTEM_PROMPT: &str = "You are an expert educator who creates exam questions and answers based on Bloom's Taxonomy.";

/// Stands in for empty additional comments.
pub const GUIDELINES_PLACEHOLDER: &str = "N/A";

pub const DOWNLOAD_FILE_NAME: &str = "questions_and_answers.txt";
