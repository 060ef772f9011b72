use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d402_sales_channels::ChannelRequest;
use contracts::shared::chart::Figure;

use crate::dashboards::d402_sales_channels::service;
use crate::state::AppState;

/// GET /api/d402/weekday?channel=e-Shop
pub async fn weekday(
    State(state): State<AppState>,
    Query(request): Query<ChannelRequest>,
) -> Json<Figure> {
    tracing::info!("D402 Dashboard: Weekday sales for channel {}", request.channel);
    Json(service::weekday_figure(&state.dataset, &request.channel))
}

/// GET /api/d402/countries?channel=e-Shop
pub async fn countries(
    State(state): State<AppState>,
    Query(request): Query<ChannelRequest>,
) -> Json<Figure> {
    tracing::info!("D402 Dashboard: Country sales for channel {}", request.channel);
    Json(service::countries_figure(&state.dataset, &request.channel))
}

/// GET /api/d402/gender?channel=e-Shop
pub async fn gender(
    State(state): State<AppState>,
    Query(request): Query<ChannelRequest>,
) -> Json<Figure> {
    tracing::info!("D402 Dashboard: Gender sales for channel {}", request.channel);
    Json(service::gender_figure(&state.dataset, &request.channel))
}
