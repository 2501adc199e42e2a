//! HTTP service for the `todo` table.
//!
//! Six routes over one SQLite connection. Reads answer with JSON, writes
//! and failures with plain text.

pub mod config;
pub mod error;
pub mod extract;
mod shape;
pub mod store;

use std::future::Future;

use axum::{
    extract::{Path, Request, State},
    routing::get,
    Json, Router, ServiceExt,
};
use todo_core::{NewTodo, Todo, TodoFilter, TodoPayload, TodoQuery, TodoUpdate};
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::ServerError;
pub use store::TodoStore;

use extract::{AgendaDate, ValidatedJson, ValidatedQuery};

pub type TodoApp = NormalizePath<Router>;

/// Trailing slashes are trimmed before routing, so `/todos/1/` and
/// `/agenda/?date=...` match their slash-less routes.
pub fn app(store: TodoStore) -> TodoApp {
    let router = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .route("/agenda", get(agenda))
        .layer(TraceLayer::new_for_http())
        .with_state(store);
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Serves until `shutdown` resolves.
pub async fn run(
    listener: TcpListener,
    store: TodoStore,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app(store)))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn list_todos(
    State(store): State<TodoStore>,
    ValidatedQuery(query): ValidatedQuery<TodoQuery>,
) -> Result<Json<Vec<Todo>>, ServerError> {
    let filter = TodoFilter::select(&query);
    tracing::debug!(?filter, "listing todos");
    Ok(Json(store.list(&filter).await?))
}

async fn get_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, ServerError> {
    store.find(id).await?.map(Json).ok_or(ServerError::NotFound)
}

async fn agenda(
    State(store): State<TodoStore>,
    AgendaDate(date): AgendaDate,
) -> Result<Json<Vec<Todo>>, ServerError> {
    Ok(Json(store.by_due_date(&date).await?))
}

async fn create_todo(
    State(store): State<TodoStore>,
    ValidatedJson(payload): ValidatedJson<TodoPayload>,
) -> Result<&'static str, ServerError> {
    let todo = NewTodo::try_from(payload)?;
    store.insert(&todo).await?;
    tracing::info!(id = todo.id, "todo added");
    Ok("Todo Successfully Added")
}

async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<TodoPayload>,
) -> Result<String, ServerError> {
    let update = TodoUpdate::select(&payload)?;
    if !store.update(id, &update).await? {
        return Err(ServerError::NotFound);
    }
    tracing::info!(id, field = update.label(), "todo updated");
    Ok(format!("{} Updated", update.label()))
}

async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
) -> Result<&'static str, ServerError> {
    let removed = store.delete(id).await?;
    tracing::info!(id, removed, "todo deleted");
    Ok("Todo Deleted")
}
