use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;

use super::listing::ListingQuery;
use super::report::views::{DashboardView, ListingView};
use super::service::TrackerService;
use super::source::ApplicationSource;
use crate::error::AppError;

/// Raw query-string parameters of the list view. Absent parameters fall back to `all`
/// filters and newest-first ordering.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub application_type: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl ListingParams {
    pub fn into_query(self) -> Result<ListingQuery, AppError> {
        ListingQuery::from_params(
            self.status.as_deref(),
            self.application_type.as_deref(),
            self.sort.as_deref(),
        )
        .map_err(AppError::from)
    }
}

/// Router builder exposing the dashboard and list view over HTTP.
pub fn tracker_router<S>(service: Arc<TrackerService<S>>) -> Router
where
    S: ApplicationSource + 'static,
{
    Router::new()
        .route("/api/v1/dashboard", get(dashboard_handler::<S>))
        .route("/api/v1/applications", get(listing_handler::<S>))
        .with_state(service)
}

pub(crate) async fn dashboard_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
) -> Result<Json<DashboardView>, AppError>
where
    S: ApplicationSource + 'static,
{
    let dashboard = service.dashboard(&Local::now())?;
    Ok(Json(dashboard))
}

pub(crate) async fn listing_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    Query(params): Query<ListingParams>,
) -> Result<Json<ListingView>, AppError>
where
    S: ApplicationSource + 'static,
{
    let query = params.into_query()?;
    let view = service.listing(query)?;
    Ok(Json(view))
}
