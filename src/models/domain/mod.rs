pub mod bloom_level;
pub mod credential;
pub mod generation;
pub mod model_config;
pub use bloom_level::BloomLevel;
pub use credential::ProviderCredential;
pub use generation::{GenerationRequest, GenerationResult};
pub use model_config::ModelConfig;
