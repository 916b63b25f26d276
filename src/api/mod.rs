//! API layer - HTTP endpoint handlers.

mod assets;
mod body;
mod health;
mod metrics;
mod notifications;
mod routes;

pub use assets::{delete_asset, DeleteAssetRequest};
pub use body::RequestBody;
pub use health::{health, ping_server, HealthResponse, PingResponse};
pub use metrics::prometheus_metrics;
pub use notifications::{
    notify_admin_post, notify_copyright_request, send_hukamnama, send_path, send_path_night,
    send_test_notification_token_with_destination, send_test_notification_with_token,
    DispatchResponse, TokenRequest,
};
pub use routes::api_routes;
