use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use serde::Deserialize;

use super::state::WidgetState;
use crate::view::ViewError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub city: String,
}

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    pub city: String,
}

/// The widget page
///
/// GET /
pub async fn page(State(state): State<AppState>) -> Result<Html<String>, ViewError> {
    let widget = state.session.snapshot().await;
    Ok(Html(state.views.render_page(&widget)?))
}

/// Search form submit; the lookup finishes before redirecting back
///
/// POST /
pub async fn submit(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Redirect {
    state.session.lookup(&form.city).await;
    Redirect::to("/")
}

/// Widget state as JSON
///
/// GET /api/v1/state
pub async fn get_state(State(state): State<AppState>) -> Json<WidgetState> {
    Json(state.session.snapshot().await)
}

/// Run a lookup and return the resulting widget state
///
/// POST /api/v1/lookup
pub async fn lookup(
    State(state): State<AppState>,
    Json(request): Json<LookupRequest>,
) -> Json<WidgetState> {
    Json(state.session.lookup(&request.city).await)
}
