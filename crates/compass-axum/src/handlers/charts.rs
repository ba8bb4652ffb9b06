//! Standalone SVG chart handler.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum_extra::extract::CookieJar;
use compass_ui::{ChartKind, render_chart};

use crate::error::HttpError;
use crate::session;
use crate::state::AppState;

/// Serve `/charts/{slug}.svg` rendered over the session's store.
pub async fn chart(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(file): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let slug = file
        .strip_suffix(".svg")
        .ok_or_else(|| HttpError::NotFound(format!("chart not found: {file}")))?;
    let kind = ChartKind::parse(slug)?;

    let (jar, id) = session::resolve(jar);
    let svg = state
        .sessions
        .with_store(id, |store| render_chart(kind, &*store))
        .await;

    Ok((jar, [(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
