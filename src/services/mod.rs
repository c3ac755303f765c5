pub mod completion_provider;
pub mod generation_service;
pub mod http_helpers;
pub mod prompt_service;
