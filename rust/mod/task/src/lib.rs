pub mod api;
pub mod model;
pub mod store;

use std::sync::Arc;

use axum::Router;
use todoweb_core::{Module, ServiceError};
use todoweb_kv::KVStore;

use store::TaskStore;

/// The Task module — per-user to-do task resource.
///
/// Stores tasks partitioned by an opaque user key (typically an email
/// address) and answers CRUD plus the derived done/overdue/pending
/// list queries. The module name doubles as the route prefix, so the
/// wire surface is `/Tasks/{user}/...`.
pub struct TaskModule {
    store: Arc<TaskStore>,
}

impl TaskModule {
    /// Create the task module and initialise storage.
    pub fn new(kv: Arc<dyn KVStore>) -> Result<Self, ServiceError> {
        let store = Arc::new(TaskStore::new(kv)?);
        Ok(Self { store })
    }
}

impl Module for TaskModule {
    fn name(&self) -> &str {
        "Tasks"
    }

    fn routes(&self) -> Router {
        api::router(Arc::clone(&self.store))
    }
}
