use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        completion_provider::{OpenAiConnector, ProviderConnector},
        generation_service::GenerationService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let connector = Arc::new(OpenAiConnector::new(config.openai_api_base.clone()));
        Self::with_connector(config, connector)
    }

    pub fn with_connector(config: Config, connector: Arc<dyn ProviderConnector>) -> Self {
        let generation_service = Arc::new(GenerationService::new(connector, config.model.clone()));

        Self {
            generation_service,
            config: Arc::new(config),
        }
    }
}
