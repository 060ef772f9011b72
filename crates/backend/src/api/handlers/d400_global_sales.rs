use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d400_global_sales::DateRangeRequest;
use contracts::shared::chart::Figure;

use crate::dashboards::d400_global_sales::service;
use crate::shared::dates::DateRange;
use crate::state::AppState;

fn parse_range(request: &DateRangeRequest) -> Result<DateRange, StatusCode> {
    DateRange::parse(&request.start_date, &request.end_date).map_err(|e| {
        tracing::warn!("D400 Dashboard: {}", e);
        e.status_code()
    })
}

/// GET /api/d400/revenue_by_month?start_date=2011-01-01&end_date=2014-12-31
pub async fn revenue_by_month(
    State(state): State<AppState>,
    Query(request): Query<DateRangeRequest>,
) -> Result<Json<Figure>, StatusCode> {
    tracing::info!(
        "D400 Dashboard: Revenue by month for {}..{}",
        request.start_date,
        request.end_date
    );
    let range = parse_range(&request)?;
    Ok(Json(service::revenue_by_month_figure(&state.dataset, &range)))
}

/// GET /api/d400/revenue_by_country?start_date=2011-01-01&end_date=2014-12-31
pub async fn revenue_by_country(
    State(state): State<AppState>,
    Query(request): Query<DateRangeRequest>,
) -> Result<Json<Figure>, StatusCode> {
    tracing::info!(
        "D400 Dashboard: Revenue by country for {}..{}",
        request.start_date,
        request.end_date
    );
    let range = parse_range(&request)?;
    Ok(Json(service::revenue_by_country_figure(&state.dataset, &range)))
}
