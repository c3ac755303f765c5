use crate::models::domain::{BloomLevel, GenerationRequest};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// The request most tests start from: 3 questions, 5 marks, Understand
    pub fn data_structures_request() -> GenerationRequest {
        GenerationRequest::new(5, BloomLevel::Understand, 3)
            .with_topics(["Data Structures", "Algorithms"])
    }

    /// Same parameters, content taken from a syllabus instead of topics
    pub fn syllabus_request(syllabus: &str) -> GenerationRequest {
        GenerationRequest::new(5, BloomLevel::Understand, 3).with_syllabus_content(syllabus)
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_fixtures_data_structures_request() {
        let request = data_structures_request();
        assert_eq!(request.topics, vec!["Data Structures", "Algorithms"]);
        assert!(request.syllabus_content.is_none());
    }

    #[test]
    fn test_fixtures_syllabus_request() {
        let request = syllabus_request("Unit 5: Tries");
        assert!(request.topics.is_empty());
        assert_eq!(request.syllabus(), Some("Unit 5: Tries"));
    }

    #[test]
    fn test_status_helpers() {
        assert_error_status(StatusCode::BAD_GATEWAY);
        assert_success_status(StatusCode::OK);
    }
}
