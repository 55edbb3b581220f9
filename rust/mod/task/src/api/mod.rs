mod tasks;

use std::sync::Arc;

use axum::Router;

use crate::store::TaskStore;

/// Build the complete task module router.
///
/// Routes (nested under `/Tasks` by the binary):
/// - `POST   /{user}`          — create task
/// - `PUT    /{user}`          — update task
/// - `GET    /{user}`          — entire list
/// - `GET    /{user}/done`     — done list
/// - `GET    /{user}/overdue`  — overdue list
/// - `GET    /{user}/pending`  — pending list
/// - `GET    /{user}/{id}`     — get task
/// - `DELETE /{user}/{id}`     — delete task
pub fn router(store: Arc<TaskStore>) -> Router {
    tasks::router(store)
}
