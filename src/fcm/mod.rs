//! Firebase Cloud Messaging (HTTP v1) provider.

mod client;
mod oauth;

pub use client::FcmClient;
pub use oauth::{AccessTokenSource, ServiceAccountKey, FCM_SCOPE};
