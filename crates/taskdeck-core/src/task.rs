//! Task lifecycle status and the view model the action policy reads.
//!
//! `TaskStatus` is the closed set of mutually exclusive lifecycle states a
//! task occupies at any instant. The task service owns transitions; this
//! crate treats the status strictly as input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Lifecycle status of a task.
///
/// Exactly one value is current for a task at any instant. The set is
/// closed and both policy tables match on it exhaustively, so adding a
/// variant forces a compile-time update of every table rather than a
/// silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but never queued or executed.
    NotStarted,
    /// Waiting in the execution queue.
    Pending,
    /// Actively executing.
    Running,
    /// Finished successfully.
    Completed,
    /// Finished with an error; can be corrected and re-attempted.
    Failed,
    /// Aborted by the user; can be corrected and re-attempted.
    Cancelled,
    /// Frozen, read-only terminal state.
    Archived,
    /// Execution suspended, resumable.
    Paused,
}

impl TaskStatus {
    /// Every status, for exhaustive iteration by tests and tooling.
    pub const ALL: [TaskStatus; 8] = [
        TaskStatus::NotStarted,
        TaskStatus::Pending,
        TaskStatus::Running,
        TaskStatus::Completed,
        TaskStatus::Failed,
        TaskStatus::Cancelled,
        TaskStatus::Archived,
        TaskStatus::Paused,
    ];

    /// Stable snake_case label, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "not_started",
            TaskStatus::Pending => "pending",
            TaskStatus::Running => "running",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
            TaskStatus::Cancelled => "cancelled",
            TaskStatus::Archived => "archived",
            TaskStatus::Paused => "paused",
        }
    }

    /// True only for the frozen state that exposes no mutation at all.
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Archived)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(TaskStatus::NotStarted),
            "pending" => Ok(TaskStatus::Pending),
            "running" => Ok(TaskStatus::Running),
            "completed" => Ok(TaskStatus::Completed),
            "failed" => Ok(TaskStatus::Failed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            "archived" => Ok(TaskStatus::Archived),
            "paused" => Ok(TaskStatus::Paused),
            other => Err(ParseError::UnknownTaskStatus(other.to_string())),
        }
    }
}

/// Minimal task shape the policy needs.
///
/// `has_queued_before` records whether the task has entered `Pending` at
/// least once in its history. It only disambiguates the first-run
/// affordance from a re-run affordance while the task is `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    pub status: TaskStatus,
    pub has_queued_before: bool,
}

impl TaskView {
    pub fn new(status: TaskStatus, has_queued_before: bool) -> Self {
        Self {
            status,
            has_queued_before,
        }
    }
}
