use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use crate::errors::UpstreamError;
use crate::models::chat_completion::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::repositories::CompletionClient;

/// OpenAI compatible `chat/completions` client
pub struct OpenAiCompletionRepo {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiCompletionRepo {
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionRepo {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, UpstreamError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!("Requesting completion from {} with model {}", url, self.model);

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&ChatCompletionRequest {
                model: &self.model,
                messages,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let completion: ChatCompletionResponse = serde_json::from_slice(&bytes)?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| UpstreamError::InvalidResponse(
                "completion carried no message content".to_string()
            ))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use crate::helpers::fake_upstream;
    use crate::models::chat_completion::ChatMessage;
    use super::*;

    async fn fake_completions(
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let authorized = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            == Some("Bearer sk-test");
        if !authorized {
            return (StatusCode::UNAUTHORIZED, Json(json!({ "error": { "message": "bad key" } })));
        }

        let user_message = body["messages"][1]["content"].as_str().unwrap_or_default();
        if user_message == "empty" {
            return (StatusCode::OK, Json(json!({ "choices": [] })));
        }

        (StatusCode::OK, Json(json!({
            "model": body["model"],
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": format!("{} via {}", user_message, body["model"].as_str().unwrap_or_default())
                },
                "finish_reason": "stop"
            }]
        })))
    }

    async fn repo_with_key(api_key: &str) -> OpenAiCompletionRepo {
        let base_url = fake_upstream::spawn(
            Router::new().route("/v1/chat/completions", post(fake_completions))
        ).await;

        OpenAiCompletionRepo::new(
            api_key.to_string(),
            format!("{}/v1/", base_url),
            "gpt-4o".to_string(),
            Duration::from_secs(5),
        ).unwrap()
    }

    fn conversation(user: &str) -> Vec<ChatMessage> {
        vec![ChatMessage::system("You are helpful."), ChatMessage::user(user)]
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let repo = repo_with_key("sk-test").await;

        let reply = repo.complete(&conversation("coffee spots")).await.unwrap();
        assert_eq!(reply, "coffee spots via gpt-4o");
    }

    #[tokio::test]
    async fn test_rejected_key_surfaces_status() {
        let repo = repo_with_key("sk-wrong").await;

        let err = repo.complete(&conversation("coffee spots")).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Api { status: 401, .. }));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_missing_choices_is_invalid_response() {
        let repo = repo_with_key("sk-test").await;

        let err = repo.complete(&conversation("empty")).await.unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidResponse(_)));
    }
}
