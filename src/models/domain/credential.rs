use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

/// API key for the completion provider, scoped to a single request.
#[derive(Clone, Debug)]
pub struct ProviderCredential(SecretString);

impl ProviderCredential {
    /// Rejects blank keys so no provider client is ever built without one.
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Please enter your OpenAI API key".to_string(),
            ));
        }
        Ok(Self(SecretString::from(raw.trim().to_string())))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}
