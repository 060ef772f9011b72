use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::shared::layout::{TabInfo, TabLayout};

use crate::dashboards;
use crate::state::AppState;

/// GET /api/tabs
pub async fn list() -> Json<Vec<TabInfo>> {
    Json(dashboards::tabs())
}

/// GET /api/tabs/:tab_id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(tab_id): Path<String>,
) -> Result<Json<TabLayout>, StatusCode> {
    match dashboards::render_tab(&tab_id, &state.dataset) {
        Ok(layout) => Ok(Json(layout)),
        Err(e) => {
            tracing::warn!("Tabs: {}", e);
            Err(e.status_code())
        }
    }
}
