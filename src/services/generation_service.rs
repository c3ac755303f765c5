use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::prompts::EDUCATOR_SYSTEM_PROMPT,
    errors::AppResult,
    models::domain::{GenerationRequest, GenerationResult, ModelConfig, ProviderCredential},
    services::{
        completion_provider::{CompletionOptions, ProviderConnector},
        prompt_service::build_prompt,
    },
};

pub struct GenerationService {
    connector: Arc<dyn ProviderConnector>,
    model: ModelConfig,
}

impl GenerationService {
    pub fn new(connector: Arc<dyn ProviderConnector>, model: ModelConfig) -> Self {
        Self { connector, model }
    }

    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    /// Runs one completion for `request`. Nothing is retried.
    pub async fn generate(
        &self,
        request: GenerationRequest,
        credential: &ProviderCredential,
    ) -> AppResult<GenerationResult> {
        request.validate()?;

        log::info!(
            "Generating {} questions at {} marks each, level {}, from {}",
            request.number_of_questions,
            request.marks_per_question,
            request.bloom_level,
            if request.syllabus().is_some() {
                "syllabus"
            } else {
                "topics"
            }
        );

        let prompt = build_prompt(&request);
        let provider = self.connector.connect(credential, &self.model);
        let options = CompletionOptions::from(&self.model);

        let text = provider
            .complete(EDUCATOR_SYSTEM_PROMPT, &prompt, &options)
            .await
            .map_err(|e| {
                log::error!("Completion request failed: {}", e);
                e
            })?;

        log::info!("Generated {} characters with model {}", text.len(), self.model.model);

        Ok(GenerationResult::new(text, request))
    }
}
