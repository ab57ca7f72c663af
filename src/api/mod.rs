//! HTTP surface over a shared [`PersonStore`].
//!
//! | route                 | store call        | success |
//! |-----------------------|-------------------|---------|
//! | `POST /person/`       | `create`          | 201     |
//! | `GET /person/`        | `list`            | 200     |
//! | `GET /person/{id}`    | `get`             | 200     |
//! | `PUT /person/{id}`    | `update`          | 204     |
//! | `DELETE /person/{id}` | `delete`          | 204     |
//!
//! Store calls touch the disk, so they run on tokio's blocking pool.

mod error;

pub use error::ApiError;

use crate::person::{People, Person, PersonId};
use crate::store::PersonStore;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared handler state.
pub type AppState = Arc<PersonStore>;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn create_person(
    State(store): State<AppState>,
    payload: Result<Json<Person>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(person) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    person.validate()?;
    blocking(&store, move |s| s.create(person)).await?;
    Ok(StatusCode::CREATED)
}

async fn list_people(State(store): State<AppState>) -> Result<Json<People>, ApiError> {
    let people = blocking(&store, |s| Ok(s.list())).await?;
    Ok(Json(people))
}

async fn get_person(
    State(store): State<AppState>,
    id: Result<Path<PersonId>, PathRejection>,
) -> Result<Json<Person>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let person = blocking(&store, move |s| s.get(id)).await?;
    Ok(Json(person))
}

async fn update_person(
    State(store): State<AppState>,
    id: Result<Path<PersonId>, PathRejection>,
    payload: Result<Json<Person>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let Json(person) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    if person.id != id {
        return Err(ApiError::bad_request(format!(
            "body id {} does not match path id {id}",
            person.id
        )));
    }
    person.validate()?;
    blocking(&store, move |s| s.update(person)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_person(
    State(store): State<AppState>,
    id: Result<Path<PersonId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::bad_request(e.body_text()))?;
    blocking(&store, move |s| s.delete(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn blocking<T, F>(store: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&PersonStore) -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(store);
    let res = tokio::task::spawn_blocking(move || f(&store))
        .await
        .map_err(|e| ApiError::internal(format!("store task failed: {e}")))?;
    res.map_err(ApiError::from)
}

/// Build the application router around a shared store.
pub fn router(store: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/person", get(list_people).post(create_person))
        .route("/person/", get(list_people).post(create_person))
        .route(
            "/person/:id",
            get(get_person).put(update_person).delete(delete_person),
        )
        .with_state(store)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
