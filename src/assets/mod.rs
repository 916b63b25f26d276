//! Image asset store used by the admin panel.

mod cloudinary;

pub use cloudinary::{sign_params, CloudinaryClient};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetStoreError {
    /// Store answered with an error; message is the store's own text
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(String),
}

/// Delete-by-id capability of the external asset store.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Delete the asset and return the store's response untouched.
    async fn delete(&self, public_id: &str) -> Result<serde_json::Value, AssetStoreError>;
}
