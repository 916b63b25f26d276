use async_trait::async_trait;
use config::ConfigError;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::FirebaseConfig;
use crate::notification::{DeliveryError, Message, MessagingProvider, Receipt};

use super::oauth::{AccessTokenSource, ServiceAccountKey};

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    message: &'a Message,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// FCM HTTP v1 `messages:send` client.
pub struct FcmClient {
    client: Client,
    tokens: AccessTokenSource,
    send_url: String,
}

impl FcmClient {
    pub fn new(config: &FirebaseConfig) -> Result<Self, ConfigError> {
        let key = ServiceAccountKey::from_json(&config.service_account)?;
        let client = Client::new();
        let send_url = format!(
            "{}/v1/projects/{}/messages:send",
            config.endpoint.trim_end_matches('/'),
            key.project_id
        );

        tracing::info!(project_id = %key.project_id, "FCM client configured");

        Ok(Self {
            tokens: AccessTokenSource::new(key, client.clone())?,
            client,
            send_url,
        })
    }
}

#[async_trait]
impl MessagingProvider for FcmClient {
    async fn send(&self, message: &Message) -> Result<Receipt, DeliveryError> {
        let access_token = self.tokens.token().await?;

        let response = self
            .client
            .post(&self.send_url)
            .bearer_auth(&access_token)
            .json(&SendRequest { message })
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(format!("Failed to connect to FCM: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                message: provider_message(&body),
            });
        }

        let sent: SendResponse = response.json().await.map_err(|e| {
            DeliveryError::Transport(format!("Failed to parse FCM response: {}", e))
        })?;

        Ok(Receipt::new(sent.name))
    }

    fn name(&self) -> &'static str {
        "fcm"
    }
}

/// The provider's own error text, or the raw body if it is not the usual envelope.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string())
}
