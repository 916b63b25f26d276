use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::config::CloudinaryConfig;

use super::{AssetStore, AssetStoreError};

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Cloudinary upload API client (`image/destroy`).
pub struct CloudinaryClient {
    client: Client,
    api_key: String,
    api_secret: String,
    destroy_url: String,
}

impl CloudinaryClient {
    pub fn new(config: &CloudinaryConfig) -> Self {
        let destroy_url = format!(
            "{}/v1_1/{}/image/destroy",
            config.endpoint.trim_end_matches('/'),
            config.cloud_name
        );

        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            destroy_url,
        }
    }

    pub fn destroy_url(&self) -> &str {
        &self.destroy_url
    }
}

/// SHA-256 request signature: sorted `key=value` pairs joined by `&`, then the secret.
pub fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl AssetStore for CloudinaryClient {
    async fn delete(&self, public_id: &str) -> Result<serde_json::Value, AssetStoreError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign_params(
            &[("public_id", public_id), ("timestamp", timestamp.as_str())],
            &self.api_secret,
        );

        let response = self
            .client
            .post(&self.destroy_url)
            .form(&[
                ("public_id", public_id),
                ("timestamp", timestamp.as_str()),
                ("api_key", self.api_key.as_str()),
                ("signature_algorithm", "sha256"),
                ("signature", signature.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                AssetStoreError::Transport(format!("Failed to connect to Cloudinary: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AssetStoreError::Transport(format!("Failed to read Cloudinary response: {}", e))
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(AssetStoreError::Rejected(message));
        }

        serde_json::from_str(&body).map_err(|e| {
            AssetStoreError::Transport(format!("Failed to parse Cloudinary response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_order_independent() {
        let a = sign_params(&[("public_id", "posts/abc"), ("timestamp", "1700000000")], "s");
        let b = sign_params(&[("timestamp", "1700000000"), ("public_id", "posts/abc")], "s");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_signature_matches_manual_digest() {
        let expected = {
            let mut hasher = Sha256::new();
            hasher.update(b"public_id=sample&timestamp=1315060510abcd");
            hex::encode(hasher.finalize())
        };
        assert_eq!(
            sign_params(&[("timestamp", "1315060510"), ("public_id", "sample")], "abcd"),
            expected
        );
    }

    #[test]
    fn test_destroy_url() {
        let client = CloudinaryClient::new(&CloudinaryConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            endpoint: "https://api.cloudinary.com/".to_string(),
        });
        assert_eq!(
            client.destroy_url(),
            "https://api.cloudinary.com/v1_1/demo/image/destroy"
        );
    }
}
