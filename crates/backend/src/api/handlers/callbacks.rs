use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use contracts::shared::callback::{CallbackRequest, CallbackResponse};

use crate::state::AppState;

/// POST /api/callback
pub async fn dispatch(
    State(state): State<AppState>,
    payload: Result<Json<CallbackRequest>, JsonRejection>,
) -> Result<Json<CallbackResponse>, StatusCode> {
    // A missing or malformed control value is bad filter input
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Callback: malformed request: {}", e);
        StatusCode::BAD_REQUEST
    })?;
    tracing::debug!("Callback: {} -> {:?}", request.control_id, request.value);

    match state.callbacks.dispatch(&state.dataset, &request) {
        Ok(updates) => {
            tracing::info!(
                "Callback: {} updated {} charts",
                request.control_id,
                updates.len()
            );
            Ok(Json(CallbackResponse { updates }))
        }
        Err(e) => {
            tracing::warn!("Callback: {} rejected: {}", request.control_id, e);
            Err(e.status_code())
        }
    }
}
