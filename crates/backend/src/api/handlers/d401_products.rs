use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d401_products::CategoryRequest;
use contracts::shared::chart::Figure;

use crate::dashboards::d401_products::service;
use crate::state::AppState;

/// GET /api/d401/subcategories_by_gender?category=Books
pub async fn subcategories_by_gender(
    State(state): State<AppState>,
    Query(request): Query<CategoryRequest>,
) -> Json<Figure> {
    let figure = service::subcategories_by_gender_figure(&state.dataset, &request.category);
    tracing::info!(
        "D401 Dashboard: {} subcategories for category {}",
        figure.data.first().map(|t| t.len()).unwrap_or(0),
        request.category
    );
    Json(figure)
}

/// GET /api/d401/category_share
pub async fn category_share(State(state): State<AppState>) -> Json<Figure> {
    Json(service::category_share_figure(&state.dataset))
}
