use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::error::AppError;
use crate::server::{require_bearer, AppState};

use super::assets::delete_asset;
use super::health::{health, ping_server};
use super::metrics::prometheus_metrics;
use super::notifications::{
    notify_admin_post, notify_copyright_request, send_hukamnama, send_path, send_path_night,
    send_test_notification_token_with_destination, send_test_notification_with_token,
};

pub fn api_routes(state: AppState) -> Router<AppState> {
    // Worker-triggered routes, gated by the shared bearer secret
    let protected = Router::new()
        .route("/ping-server", get(ping_server))
        .route("/send-hukamnama", post(send_hukamnama))
        .route("/send-path", post(send_path))
        .route("/send-path-night", post(send_path_night))
        .route(
            "/send-test-notification-token-with-destination",
            post(send_test_notification_token_with_destination),
        )
        .route(
            "/send-test-notification-with-token",
            post(send_test_notification_with_token),
        )
        .route_layer(middleware::from_fn_with_state(state, require_bearer));

    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Admin panel hooks
        .route("/notify-admin-post", post(notify_admin_post))
        .route("/notify-copyright-request", post(notify_copyright_request))
        .route("/delete", post(delete_asset))
        .merge(protected)
        // Only covers routes registered before this call
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
