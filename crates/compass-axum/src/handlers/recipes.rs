//! Recipe handlers - JSON access to the session's store.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use compass_core::{AddOutcome, Recipe, RecipeDraft, by_cuisine, search as search_store};
use compass_ui::SearchParams;

use crate::dto::{AddRecipeResponse, ListQuery, SearchResponse};
use crate::error::HttpError;
use crate::session;
use crate::state::AppState;

/// List recipes, optionally for one cuisine.
pub async fn list(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<ListQuery>,
) -> (CookieJar, Json<Vec<Recipe>>) {
    let (jar, id) = session::resolve(jar);
    let recipes = state
        .sessions
        .with_store(id, |store| match query.cuisine.as_deref() {
            Some(cuisine) => by_cuisine(store, cuisine).into_iter().cloned().collect(),
            None => store.recipes().to_vec(),
        })
        .await;
    (jar, Json(recipes))
}

/// Get a single recipe by name.
pub async fn get(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(name): Path<String>,
) -> Result<(CookieJar, Json<Recipe>), HttpError> {
    let (jar, id) = session::resolve(jar);
    let recipe = state
        .sessions
        .with_store(id, |store| store.require(&name).cloned())
        .await?;
    Ok((jar, Json(recipe)))
}

/// Add or replace a recipe. Returns 201 for a new name, 200 for a replacement.
pub async fn add(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(draft): Json<RecipeDraft>,
) -> Result<(StatusCode, CookieJar, Json<AddRecipeResponse>), HttpError> {
    let (jar, id) = session::resolve(jar);
    let result = state
        .sessions
        .with_store(id, |store| {
            let outcome = store.add(&draft)?;
            let recipe = store.require(draft.name.trim())?.clone();
            Ok::<_, compass_core::RecipeError>(AddRecipeResponse { outcome, recipe })
        })
        .await;

    let response = result.inspect_err(|e| {
        tracing::warn!(error = %e, "API recipe submission rejected");
    })?;
    tracing::info!(name = %response.recipe.name, outcome = ?response.outcome, "recipe added via API");

    let status = match response.outcome {
        AddOutcome::Inserted => StatusCode::CREATED,
        AddOutcome::Replaced => StatusCode::OK,
    };
    Ok((status, jar, Json(response)))
}

/// Run the advanced search.
pub async fn search(
    State(state): State<AppState>,
    jar: CookieJar,
    axum_extra::extract::Query(params): axum_extra::extract::Query<SearchParams>,
) -> (CookieJar, Json<SearchResponse>) {
    let (jar, id) = session::resolve(jar);
    let criteria = params.into_criteria();
    let recipes: Vec<Recipe> = state
        .sessions
        .with_store(id, |store| {
            search_store(store, &criteria).into_iter().cloned().collect()
        })
        .await;
    (
        jar,
        Json(SearchResponse {
            criteria,
            count: recipes.len(),
            recipes,
        }),
    )
}

/// Distinct cuisines, sorted.
pub async fn cuisines(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Vec<String>>) {
    let (jar, id) = session::resolve(jar);
    let cuisines = state
        .sessions
        .with_store(id, |store| {
            store.cuisines().into_iter().map(str::to_string).collect()
        })
        .await;
    (jar, Json(cuisines))
}
