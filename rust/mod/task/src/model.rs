use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Task — the core data model
// ---------------------------------------------------------------------------

/// A single to-do item.
///
/// The owning user is never part of the payload; it is the partition
/// half of the storage key and comes from the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned id, unique across all owners, never reused.
    pub id: i64,

    /// Display label. No format constraints.
    pub name: String,

    /// When the task is due. May be in the past.
    pub due_date: DateTime<Utc>,

    /// Completion flag, set by the client via update.
    #[serde(default)]
    pub done: bool,
}

// ---------------------------------------------------------------------------
// TaskFilter — derived list classification
// ---------------------------------------------------------------------------

/// Classification predicate for the list endpoints.
///
/// `done` is the only stored state; Overdue and Pending are computed
/// against `now` at query time. An overdue task still counts as
/// pending: a task leaves the pending list only when marked done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Done,
    Overdue,
    Pending,
}

impl TaskFilter {
    /// Whether `task` belongs to the list this filter describes.
    pub fn matches(&self, task: &Task, now: DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Done => task.done,
            Self::Overdue => !task.done && task.due_date < now,
            Self::Pending => !task.done,
        }
    }
}

// ---------------------------------------------------------------------------
// API request types
// ---------------------------------------------------------------------------

/// Body for `POST /{user}` — create a new task.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub name: String,
    pub due_date: DateTime<Utc>,
}

/// Body for `PUT /{user}` — replace a task's mutable fields.
///
/// `id` locates the task within the caller's partition; the id itself
/// and the owner are immutable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub id: i64,
    pub name: String,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub done: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
