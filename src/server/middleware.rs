use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use super::AppState;
use crate::error::AppError;
use crate::metrics::AuthMetrics;

/// Bearer-secret gate for worker-triggered routes.
/// Rejected requests never reach the handler.
pub async fn require_bearer(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if let Err(e) = state.auth.authorize(req.headers()) {
        AuthMetrics::record_rejected();
        return Err(e);
    }

    Ok(next.run(req).await)
}
