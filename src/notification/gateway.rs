use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use thiserror::Error;

use crate::metrics::DispatchMetrics;

use super::types::{Message, Receipt};

/// Delivery failure. `Display` is the provider's own description.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Provider answered and refused the message
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Provider could not be reached or answered with garbage
    #[error("{0}")]
    Transport(String),

    /// Provider credentials could not be exchanged for an access token
    #[error("{0}")]
    Authentication(String),

    #[error("Delivery timed out after {0:?}")]
    Timeout(Duration),
}

/// External push delivery capability.
#[async_trait]
pub trait MessagingProvider: Send + Sync {
    async fn send(&self, message: &Message) -> Result<Receipt, DeliveryError>;

    fn name(&self) -> &'static str;
}

/// Submits composed messages to the provider, one attempt each, bounded by a timeout.
pub struct DispatchGateway {
    provider: Arc<dyn MessagingProvider>,
    timeout: Duration,
}

impl DispatchGateway {
    pub fn new(provider: Arc<dyn MessagingProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Send `message`, recording the outcome under `label`.
    #[tracing::instrument(
        name = "gateway.dispatch",
        skip(self, message),
        fields(provider = self.provider.name(), target = message.target.kind())
    )]
    pub async fn dispatch(&self, label: &str, message: &Message) -> Result<Receipt, DeliveryError> {
        let started = Instant::now();

        let result = match tokio::time::timeout(self.timeout, self.provider.send(message)).await {
            Ok(result) => result,
            Err(_) => Err(DeliveryError::Timeout(self.timeout)),
        };

        DispatchMetrics::record(label, result.is_ok(), started.elapsed());

        match &result {
            Ok(receipt) => {
                tracing::info!(receipt = %receipt.as_str(), "Notification dispatched");
            }
            Err(e) => {
                tracing::error!(error = %e, "Notification dispatch failed");
            }
        }

        result
    }
}
