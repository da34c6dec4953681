// HTTP routes for the dispatch register pages

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Form, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::{AppError, AppResult};
use crate::models::DispatchFields;
use crate::services::DispatchStore;
use crate::views;

#[derive(Clone)]
pub struct AppState {
    pub store: DispatchStore,
}

pub fn create_router(store: DispatchStore) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/", get(new_form))
        .route("/submit", post(submit))
        .route("/records", get(list_records))
        .route("/edit/{rec_id}", get(edit_record))
        .route("/update/{rec_id}", post(update_record))
        .route("/record/{rec_id}", get(view_record))
        .route("/print/{rec_id}", get(view_record))
        .route(views::STYLESHEET_PATH, get(stylesheet))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn health_check() -> &'static str {
    "OK"
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], views::STYLESHEET)
}

/// Only plain digit strings are ids; anything else is treated like an id
/// with no record.
fn parse_id(raw: &str) -> AppResult<i64> {
    let not_found = || AppError::NotFound(format!("Dispatch record {} not found", raw));
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    raw.parse().map_err(|_| not_found())
}

async fn new_form() -> Html<String> {
    Html(views::render_form(None))
}

async fn submit(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<DispatchFields>,
) -> AppResult<Redirect> {
    state.store.create(&fields).await?;
    Ok(Redirect::to("/records"))
}

async fn list_records(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let records = state.store.list_all().await?;
    Ok(Html(views::render_list(&records)))
}

async fn edit_record(
    State(state): State<Arc<AppState>>,
    Path(rec_id): Path<String>,
) -> AppResult<Html<String>> {
    let record = state.store.get(parse_id(&rec_id)?).await?;
    Ok(Html(views::render_form(Some(&record))))
}

async fn update_record(
    State(state): State<Arc<AppState>>,
    Path(rec_id): Path<String>,
    Form(fields): Form<DispatchFields>,
) -> AppResult<Redirect> {
    state.store.update(parse_id(&rec_id)?, &fields).await?;
    Ok(Redirect::to("/records"))
}

async fn view_record(
    State(state): State<Arc<AppState>>,
    Path(rec_id): Path<String>,
) -> AppResult<Html<String>> {
    let record = state.store.get(parse_id(&rec_id)?).await?;
    Ok(Html(views::render_report(&record)))
}
