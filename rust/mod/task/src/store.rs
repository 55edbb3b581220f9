use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use todoweb_core::ServiceError;
use todoweb_kv::KVStore;

use crate::model::Task;

/// Key holding the persisted id sequence.
const SEQ_KEY: &str = "task_seq";

fn task_key(owner: &str, id: i64) -> String {
    format!("task:{owner}:{id}")
}

fn owner_prefix(owner: &str) -> String {
    format!("task:{owner}:")
}

/// Persistent storage for tasks, backed by KVStore (redb).
///
/// Tasks live under compound keys `task:{owner}:{id}`, so a lookup from
/// the wrong owner misses outright — the caller cannot tell a foreign
/// task from an absent one.
pub struct TaskStore {
    kv: Arc<dyn KVStore>,
    /// Next-id counter. The lock is held across the `task_seq` persist
    /// so sequence writes land in allocation order.
    next_id: Mutex<i64>,
}

impl TaskStore {
    /// Open the store and seed the id sequence.
    ///
    /// Seeds from `max(task_seq, max stored id)`: ids are never reused
    /// across restarts, even after deleting the newest task.
    pub fn new(kv: Arc<dyn KVStore>) -> Result<Self, ServiceError> {
        let mut seed: i64 = match kv
            .get(SEQ_KEY)
            .map_err(|e| ServiceError::Storage(e.to_string()))?
        {
            Some(raw) => serde_json::from_slice(&raw)
                .map_err(|e| ServiceError::Storage(format!("bad task_seq: {e}")))?,
            None => 0,
        };

        for (_, raw) in kv
            .scan("task:")
            .map_err(|e| ServiceError::Storage(e.to_string()))?
        {
            let task: Task = serde_json::from_slice(&raw)
                .map_err(|e| ServiceError::Storage(format!("bad task json: {e}")))?;
            seed = seed.max(task.id);
        }

        Ok(Self {
            kv,
            next_id: Mutex::new(seed),
        })
    }

    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Insert a new task under `owner`, assigning a fresh nonzero id.
    /// New tasks always start with `done = false`.
    pub fn create(
        &self,
        owner: &str,
        name: String,
        due_date: DateTime<Utc>,
    ) -> Result<Task, ServiceError> {
        let mut next = self
            .next_id
            .lock()
            .map_err(|_| ServiceError::Internal("id sequence lock poisoned".into()))?;
        *next += 1;

        let task = Task {
            id: *next,
            name,
            due_date,
            done: false,
        };

        let data =
            serde_json::to_vec(&task).map_err(|e| ServiceError::Internal(e.to_string()))?;
        self.kv
            .set(&task_key(owner, task.id), &data)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let seq =
            serde_json::to_vec(&*next).map_err(|e| ServiceError::Internal(e.to_string()))?;
        self.kv
            .set(SEQ_KEY, &seq)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        Ok(task)
    }

    /// Get a task by id within the owner's partition.
    pub fn get(&self, owner: &str, id: i64) -> Result<Task, ServiceError> {
        let raw = self
            .kv
            .get(&task_key(owner, id))
            .map_err(|e| ServiceError::Storage(e.to_string()))?
            .ok_or_else(|| ServiceError::NotFound(format!("task {id}")))?;

        serde_json::from_slice(&raw)
            .map_err(|e| ServiceError::Storage(format!("bad task json: {e}")))
    }

    /// Replace the mutable fields of an existing task.
    /// The id and owner are immutable.
    pub fn update(
        &self,
        owner: &str,
        id: i64,
        name: String,
        due_date: DateTime<Utc>,
        done: bool,
    ) -> Result<Task, ServiceError> {
        let mut task = self.get(owner, id)?;
        task.name = name;
        task.due_date = due_date;
        task.done = done;

        let data =
            serde_json::to_vec(&task).map_err(|e| ServiceError::Internal(e.to_string()))?;
        self.kv
            .set(&task_key(owner, id), &data)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        Ok(task)
    }

    /// Remove a task. Deleting an absent or foreign task is a no-op.
    pub fn delete(&self, owner: &str, id: i64) -> Result<(), ServiceError> {
        self.kv
            .delete(&task_key(owner, id))
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }

    // -----------------------------------------------------------------------
    // List
    // -----------------------------------------------------------------------

    /// Every task owned by `owner`, in key order.
    pub fn list(&self, owner: &str) -> Result<Vec<Task>, ServiceError> {
        let rows = self
            .kv
            .scan(&owner_prefix(owner))
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        rows.iter()
            .map(|(_, raw)| {
                serde_json::from_slice(raw)
                    .map_err(|e| ServiceError::Storage(format!("bad task json: {e}")))
            })
            .collect()
    }
}
