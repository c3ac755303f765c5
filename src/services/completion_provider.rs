use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::automock;

use crate::models::domain::{ModelConfig, ProviderCredential};

/// Every way a completion call can fail. Callers report all of them as one kind.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("{0}")]
    Request(String),
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl From<&ModelConfig> for CompletionOptions {
    fn from(config: &ModelConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// A hosted text-completion service with its credential already bound.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextCompletionProvider: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, ProviderError>;
}

/// Builds a provider for one request's credential and model.
#[cfg_attr(test, automock)]
pub trait ProviderConnector: Send + Sync {
    fn connect(
        &self,
        credential: &ProviderCredential,
        model: &ModelConfig,
    ) -> Box<dyn TextCompletionProvider>;
}

/// A backoff that gives up after the first failed attempt.
fn single_attempt() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

pub struct OpenAiConnector {
    api_base: String,
}

impl OpenAiConnector {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

impl ProviderConnector for OpenAiConnector {
    fn connect(
        &self,
        credential: &ProviderCredential,
        model: &ModelConfig,
    ) -> Box<dyn TextCompletionProvider> {
        let config = OpenAIConfig::new()
            .with_api_base(self.api_base.clone())
            .with_api_key(credential.expose());

        Box::new(OpenAiCompletionProvider {
            client: Client::with_config(config).with_backoff(single_attempt()),
            model: model.model.clone(),
        })
    }
}

pub struct OpenAiCompletionProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionReply {
    fn into_text(self) -> Result<String, ProviderError> {
        self.choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MalformedResponse("no choices returned".to_string()))?
            .message
            .content
            .ok_or_else(|| ProviderError::MalformedResponse("choice has no content".to_string()))
    }
}

#[async_trait]
impl TextCompletionProvider for OpenAiCompletionProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, ProviderError> {
        let body = ChatCompletionBody {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let reply: ChatCompletionReply = self
            .client
            .chat()
            .create_byot(body)
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        reply.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_chat_completion_shape() {
        let body = ChatCompletionBody {
            model: "gpt-4o",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "usr",
                },
            ],
            temperature: 0.5,
            max_tokens: 2500,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "model": "gpt-4o",
                "messages": [
                    { "role": "system", "content": "sys" },
                    { "role": "user", "content": "usr" }
                ],
                "temperature": 0.5,
                "max_tokens": 2500
            })
        );
    }

    #[test]
    fn first_choice_content_is_extracted() {
        let reply: ChatCompletionReply = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Q1. Define a heap." } },
                { "index": 1, "message": { "role": "assistant", "content": "ignored" } }
            ]
        }))
        .unwrap();

        assert_eq!(reply.into_text().unwrap(), "Q1. Define a heap.");
    }

    #[test]
    fn replies_without_content_are_malformed() {
        let empty: ChatCompletionReply = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(matches!(
            empty.into_text(),
            Err(ProviderError::MalformedResponse(_))
        ));

        let null_content: ChatCompletionReply = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        }))
        .unwrap();
        assert!(matches!(
            null_content.into_text(),
            Err(ProviderError::MalformedResponse(_))
        ));
    }

    #[test]
    fn options_follow_model_config() {
        let options = CompletionOptions::from(&ModelConfig::default());
        assert_eq!(options.temperature, 0.7);
        assert_eq!(options.max_tokens, 2500);
    }

    #[test]
    fn connector_builds_provider_without_network() {
        let connector = OpenAiConnector::new("http://127.0.0.1:9/v1");
        let credential = ProviderCredential::new("sk-test").unwrap();
        let _provider = connector.connect(&credential, &ModelConfig::default());
    }

    #[test]
    fn backoff_never_schedules_a_retry() {
        use backoff::backoff::Backoff;

        let mut policy = single_attempt();
        std::thread::sleep(Duration::from_millis(1));
        assert!(policy.next_backoff().is_none());
    }

    mod over_http {
        use std::sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        };

        use tokio::{
            io::{AsyncReadExt, AsyncWriteExt},
            net::{TcpListener, TcpStream},
            time::{timeout, Duration},
        };

        use super::*;

        /// Reads one request (headers plus a Content-Length body).
        async fn read_request(stream: &mut TcpStream) {
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = stream.read(&mut chunk).await.unwrap_or(0);
                if n == 0 {
                    return;
                }
                buf.extend_from_slice(&chunk[..n]);

                let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                    continue;
                };
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    return;
                }
            }
        }

        /// Serves every connection with the same canned response and counts them.
        async fn serve(status_line: &'static str, body: &'static str) -> (String, Arc<AtomicUsize>) {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let hits = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&hits);

            tokio::spawn(async move {
                while let Ok((mut stream, _)) = listener.accept().await {
                    counter.fetch_add(1, Ordering::SeqCst);
                    read_request(&mut stream).await;
                    let response = format!(
                        "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        status_line,
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                }
            });

            (format!("http://{}/v1", addr), hits)
        }

        async fn complete_against(api_base: &str) -> Result<String, ProviderError> {
            let provider = OpenAiConnector::new(api_base).connect(
                &ProviderCredential::new("sk-test").unwrap(),
                &ModelConfig::default(),
            );
            let options = CompletionOptions::from(&ModelConfig::default());
            let result = timeout(
                Duration::from_secs(5),
                provider.complete("sys", "usr", &options),
            )
            .await
            .expect("completion should not be retried");
            result
        }

        #[tokio::test]
        async fn server_error_is_reported_after_one_attempt() {
            let (api_base, hits) = serve(
                "500 Internal Server Error",
                r#"{"error":{"message":"upstream exploded","type":"server_error"}}"#,
            )
            .await;

            let err = complete_against(&api_base).await.unwrap_err();

            assert!(matches!(err, ProviderError::Request(_)));
            assert!(err.to_string().contains("upstream exploded"));
            assert_eq!(hits.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn rate_limit_is_reported_after_one_attempt() {
            let (api_base, hits) = serve(
                "429 Too Many Requests",
                r#"{"error":{"message":"Rate limit reached","type":"requests","param":null,"code":null}}"#,
            )
            .await;

            let err = complete_against(&api_base).await.unwrap_err();

            assert!(matches!(err, ProviderError::Request(_)));
            assert_eq!(hits.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn empty_choices_are_malformed() {
            let (api_base, hits) = serve("200 OK", r#"{"id":"chatcmpl-1","choices":[]}"#).await;

            let err = complete_against(&api_base).await.unwrap_err();

            assert!(matches!(err, ProviderError::MalformedResponse(_)));
            assert_eq!(hits.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn first_choice_is_returned_over_http() {
            let (api_base, _) = serve(
                "200 OK",
                r#"{"id":"chatcmpl-1","choices":[{"index":0,"message":{"role":"assistant","content":"Q1. Define a stack."}}]}"#,
            )
            .await;

            assert_eq!(complete_against(&api_base).await.unwrap(), "Q1. Define a stack.");
        }
    }
}
