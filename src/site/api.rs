use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::domain::find_funnel;
use crate::scheduler::SessionFinder;

use super::AppState;

/// Fresh resolution of the funnel's next session, polled by the page's
/// countdown script. The RFC 3339 fields are the contract; the display
/// strings ride along so the page can re-render them after a rollover.
pub async fn next_session(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let funnel = find_funnel::execute(state.repo.clone(), find_funnel::Request { slug })
        .await
        .map_err(|err| match err {
            find_funnel::Error::NotFound => StatusCode::NOT_FOUND,
            find_funnel::Error::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        })?
        .funnel;

    let schedule = funnel.schedule();
    let session = SessionFinder::new(schedule.clone()).next_session();

    Ok(Json(json!({
        "starts_at": session.starts_at.to_rfc3339(),
        "starts_at_local": session.starts_at.with_timezone(&schedule.tz()).to_rfc3339(),
        "weekday": session.weekday.to_string(),
        "session_id": session.session_id,
        "display_date": session.display_date,
        "display_time": session.display_time,
    })))
}
