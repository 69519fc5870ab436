use crate::core::stores::{MatchNotifier, NotifyError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the push gateway
#[derive(Debug, Error)]
pub enum PushError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("gateway returned error: {0}")]
    ApiError(String),
}

/// HTTP client for the push-notification gateway.
///
/// The gateway owns device tokens and platform delivery; this client only
/// posts the notification payload. Callers treat delivery as best-effort.
pub struct PushClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl PushClient {
    /// Create a new push gateway client
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Send one push notification to a user's devices
    pub async fn send_push(
        &self,
        to_user_id: &str,
        title: &str,
        body: &str,
        data: serde_json::Value,
    ) -> Result<(), PushError> {
        let url = format!(
            "{}/v1/notifications/push",
            self.base_url.trim_end_matches('/')
        );

        let payload = serde_json::json!({
            "toUserId": to_user_id,
            "title": title,
            "body": body,
            "data": data,
        });

        let response = self
            .client
            .post(&url)
            .header("X-Api-Key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PushError::ApiError(format!(
                "push gateway returned {}",
                response.status()
            )));
        }

        tracing::debug!("Push notification delivered to {}", to_user_id);

        Ok(())
    }
}

#[async_trait]
impl MatchNotifier for PushClient {
    async fn send_match_notification(
        &self,
        to_user_id: &str,
        matched_first_name: &str,
        match_id: &str,
    ) -> Result<(), NotifyError> {
        self.send_push(
            to_user_id,
            "It's a match!",
            &format!("You have a new match with {}", matched_first_name),
            serde_json::json!({ "matchId": match_id }),
        )
        .await
        .map_err(|e| NotifyError::Delivery(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_match_notification_posts_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/notifications/push")
            .match_header("x-api-key", "test-key")
            .with_status(200)
            .create_async()
            .await;

        let client = PushClient::new(server.url(), "test-key".to_string(), 5);
        let result = client
            .send_match_notification("user-b", "Alice", "match-1")
            .await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_gateway_failure_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/notifications/push")
            .with_status(502)
            .create_async()
            .await;

        let client = PushClient::new(server.url(), "test-key".to_string(), 5);
        let result = client
            .send_match_notification("user-b", "Alice", "match-1")
            .await;

        assert!(result.is_err());
    }
}
