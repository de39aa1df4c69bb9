use std::sync::Arc;

use axum::extract::{Path, RawQuery, State};
use axum::response::Html;
use hyper::StatusCode;

use crate::tracking::crm;

use super::{templates, AppState};

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    templates::index_page(state.repo.clone())
        .await
        .map(Html)
        .map_err(StatusCode::from)
}

pub async fn funnel(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, StatusCode> {
    log::trace!("rendering funnel page: {}", slug);

    let utm = crm::UtmParams::from_query(query.as_deref().unwrap_or(""));
    templates::funnel_page(state.repo.clone(), slug, utm)
        .await
        .map(Html)
        .map_err(StatusCode::from)
}

pub async fn confirmation(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>, StatusCode> {
    log::trace!("rendering confirmation page: {}", slug);

    templates::confirmation_page(state.repo.clone(), slug)
        .await
        .map(Html)
        .map_err(StatusCode::from)
}
