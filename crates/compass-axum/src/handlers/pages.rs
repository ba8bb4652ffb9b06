//! HTML page handlers, one per navigation mode.

use axum::Form;
use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum_extra::extract::CookieJar;
use compass_ui::{AddParams, AnalyticsTab, NavMode, SearchParams, ViewRequest, dispatch, html};
use serde::Deserialize;

use crate::error::HttpError;
use crate::session;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ExplorerQuery {
    pub cuisine: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub tab: Option<String>,
}

/// Dispatch `request` against the caller's session store and render it.
async fn render(state: &AppState, jar: CookieJar, request: ViewRequest) -> (CookieJar, Html<String>) {
    let (jar, id) = session::resolve(jar);
    let view = state
        .sessions
        .with_store(id, |store| dispatch(store, request))
        .await;
    (jar, Html(html::render_page(&view)))
}

/// The landing page is the explorer.
pub async fn index() -> Redirect {
    Redirect::to(NavMode::Explorer.path())
}

pub async fn explorer(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<ExplorerQuery>,
) -> (CookieJar, Html<String>) {
    render(&state, jar, ViewRequest::Explorer {
        cuisine: query.cuisine,
    })
    .await
}

/// Search page; repeated `difficulty` keys need the multi-value query extractor.
pub async fn search(
    State(state): State<AppState>,
    jar: CookieJar,
    axum_extra::extract::Query(params): axum_extra::extract::Query<SearchParams>,
) -> (CookieJar, Html<String>) {
    render(&state, jar, ViewRequest::Search(params.into_criteria())).await
}

pub async fn add_form(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    render(&state, jar, ViewRequest::Add { submission: None }).await
}

/// Handle an add-form post. Validation errors, including blank or
/// non-numeric number fields, render inline with a 200.
pub async fn add_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(params): Form<AddParams>,
) -> (CookieJar, Html<String>) {
    render(&state, jar, ViewRequest::Add {
        submission: Some(params),
    })
    .await
}

pub async fn analytics(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<AnalyticsQuery>,
) -> Result<(CookieJar, Html<String>), HttpError> {
    let tab = match query.tab.as_deref() {
        Some(name) => AnalyticsTab::parse(name)?,
        None => AnalyticsTab::default(),
    };
    Ok(render(&state, jar, ViewRequest::Analytics { tab }).await)
}
