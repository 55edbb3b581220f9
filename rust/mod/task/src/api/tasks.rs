use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use todoweb_core::ServiceError;

use crate::model::{CreateTaskRequest, Task, TaskFilter, UpdateTaskRequest};
use crate::store::TaskStore;

type StoreState = Arc<TaskStore>;

pub fn router(store: Arc<TaskStore>) -> Router {
    Router::new()
        .route(
            "/{user}",
            post(create_task).put(update_task).get(list_tasks),
        )
        .route("/{user}/done", get(list_done))
        .route("/{user}/overdue", get(list_overdue))
        .route("/{user}/pending", get(list_pending))
        .route("/{user}/{id}", get(get_task).delete(delete_task))
        .with_state(store)
}

// ---------------------------------------------------------------------------
// POST /{user}
// ---------------------------------------------------------------------------

async fn create_task(
    State(store): State<StoreState>,
    Path(user): Path<String>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<Task>, ServiceError> {
    let task = store.create(&user, req.name, req.due_date)?;
    Ok(Json(task))
}

// ---------------------------------------------------------------------------
// PUT /{user}
// ---------------------------------------------------------------------------

async fn update_task(
    State(store): State<StoreState>,
    Path(user): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ServiceError> {
    let task = store.update(&user, req.id, req.name, req.due_date, req.done)?;
    Ok(Json(task))
}

// ---------------------------------------------------------------------------
// GET /{user} and the derived lists
// ---------------------------------------------------------------------------

async fn list_tasks(
    State(store): State<StoreState>,
    Path(user): Path<String>,
) -> Result<Json<Vec<Task>>, ServiceError> {
    list_filtered(&store, &user, TaskFilter::All)
}

async fn list_done(
    State(store): State<StoreState>,
    Path(user): Path<String>,
) -> Result<Json<Vec<Task>>, ServiceError> {
    list_filtered(&store, &user, TaskFilter::Done)
}

async fn list_overdue(
    State(store): State<StoreState>,
    Path(user): Path<String>,
) -> Result<Json<Vec<Task>>, ServiceError> {
    list_filtered(&store, &user, TaskFilter::Overdue)
}

async fn list_pending(
    State(store): State<StoreState>,
    Path(user): Path<String>,
) -> Result<Json<Vec<Task>>, ServiceError> {
    list_filtered(&store, &user, TaskFilter::Pending)
}

/// Classification is evaluated against a single `now` snapshot per
/// request and never stored on the task.
fn list_filtered(
    store: &TaskStore,
    user: &str,
    filter: TaskFilter,
) -> Result<Json<Vec<Task>>, ServiceError> {
    let now = Utc::now();
    let tasks = store.list(user)?;
    Ok(Json(
        tasks
            .into_iter()
            .filter(|t| filter.matches(t, now))
            .collect(),
    ))
}

// ---------------------------------------------------------------------------
// GET /{user}/{id}
// ---------------------------------------------------------------------------

async fn get_task(
    State(store): State<StoreState>,
    Path((user, id)): Path<(String, i64)>,
) -> Result<Json<Task>, ServiceError> {
    let task = store.get(&user, id)?;
    Ok(Json(task))
}

// ---------------------------------------------------------------------------
// DELETE /{user}/{id}
// ---------------------------------------------------------------------------

async fn delete_task(
    State(store): State<StoreState>,
    Path((user, id)): Path<(String, i64)>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    store.delete(&user, id)?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}
