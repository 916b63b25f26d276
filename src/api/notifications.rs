//! Push notification routes.
//!
//! Every category route runs the same pipeline: draw content, compose,
//! dispatch, map the outcome. Only the category and target differ.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::notification::{
    compose, require_token, AdHocNotification, NotificationCategory, NotificationTarget, Receipt,
};
use crate::server::AppState;

use super::body::RequestBody;

const AD_HOC_LABEL: &str = "ad-hoc";

/// Success envelope: `{success: true, message, response: <receipt>}`
#[derive(Debug, Serialize, Deserialize)]
pub struct DispatchResponse {
    pub success: bool,
    pub message: String,
    pub response: Receipt,
}

impl DispatchResponse {
    fn sent(message: &str, receipt: Receipt) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.to_string(),
            response: receipt,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TokenRequest {
    pub token: Option<String>,
}

/// Draw, compose and dispatch one category message.
async fn dispatch_category(
    state: &AppState,
    category: NotificationCategory,
    target: NotificationTarget,
    confirmation: &str,
) -> Result<Json<DispatchResponse>> {
    let content = state.content.select(category)?;
    let message = compose(category, content, target);
    let receipt = state.gateway.dispatch(category.as_str(), &message).await?;

    Ok(DispatchResponse::sent(confirmation, receipt))
}

/// Broadcast a category message to its own topic.
async fn dispatch_to_topic(
    state: &AppState,
    category: NotificationCategory,
) -> Result<Json<DispatchResponse>> {
    let profile = category.profile();
    let target = NotificationTarget::Topic(profile.topic.to_string());

    dispatch_category(state, category, target, profile.confirmation).await
}

#[tracing::instrument(name = "http.send_hukamnama", skip(state))]
pub async fn send_hukamnama(State(state): State<AppState>) -> Result<Json<DispatchResponse>> {
    dispatch_to_topic(&state, NotificationCategory::MorningScripture).await
}

#[tracing::instrument(name = "http.send_path", skip(state))]
pub async fn send_path(State(state): State<AppState>) -> Result<Json<DispatchResponse>> {
    dispatch_to_topic(&state, NotificationCategory::EveningScripture).await
}

#[tracing::instrument(name = "http.send_path_night", skip(state))]
pub async fn send_path_night(State(state): State<AppState>) -> Result<Json<DispatchResponse>> {
    dispatch_to_topic(&state, NotificationCategory::NightScripture).await
}

/// Send the morning Hukamnama to a single device
#[tracing::instrument(name = "http.send_token_with_destination", skip(state, request))]
pub async fn send_test_notification_token_with_destination(
    State(state): State<AppState>,
    RequestBody(request): RequestBody<TokenRequest>,
) -> Result<Json<DispatchResponse>> {
    let target = require_token(request.token)?;

    dispatch_category(
        &state,
        NotificationCategory::MorningScripture,
        target,
        "Hukamnama sent to device",
    )
    .await
}

/// Send caller-supplied title/body/data to a single device
#[tracing::instrument(name = "http.send_with_token", skip(state, request))]
pub async fn send_test_notification_with_token(
    State(state): State<AppState>,
    RequestBody(request): RequestBody<AdHocNotification>,
) -> Result<Json<DispatchResponse>> {
    let message = request.compose()?;
    let receipt = state.gateway.dispatch(AD_HOC_LABEL, &message).await?;

    Ok(DispatchResponse::sent("Notification sent", receipt))
}

#[tracing::instrument(name = "http.notify_admin_post", skip(state))]
pub async fn notify_admin_post(State(state): State<AppState>) -> Result<Json<DispatchResponse>> {
    dispatch_to_topic(&state, NotificationCategory::AdminPost).await
}

#[tracing::instrument(name = "http.notify_copyright_request", skip(state))]
pub async fn notify_copyright_request(
    State(state): State<AppState>,
) -> Result<Json<DispatchResponse>> {
    dispatch_to_topic(&state, NotificationCategory::AdminCopyright).await
}
