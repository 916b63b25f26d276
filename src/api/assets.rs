use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::metrics::AssetMetrics;
use crate::server::AppState;

use super::body::RequestBody;

#[derive(Debug, Default, Deserialize)]
pub struct DeleteAssetRequest {
    pub public_id: Option<String>,
}

/// POST /delete - remove an uploaded image from the asset store
#[tracing::instrument(name = "http.delete_asset", skip(state, request))]
pub async fn delete_asset(
    State(state): State<AppState>,
    RequestBody(request): RequestBody<DeleteAssetRequest>,
) -> Result<Json<Value>> {
    let public_id = request
        .public_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("Missing public_id".to_string()))?;

    let result = state.asset_store.delete(&public_id).await;
    AssetMetrics::record_deletion(result.is_ok());

    let result = result?;
    tracing::info!(public_id = %public_id, result = %result, "Asset deleted");

    Ok(Json(json!({ "success": true, "result": result })))
}
