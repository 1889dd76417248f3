//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Repository interface for dated tasks
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks for `date`, oldest first
    async fn list_tasks(&self, date: &str) -> Result<Vec<Task>>;

    /// Insert an incomplete task. The title is not validated here.
    async fn create_task(&self, title: &str, date: &str) -> Result<Task>;

    /// Flip the completed flag and return its new value.
    ///
    /// Fails with `Error::NotFound` when no task has `id`.
    async fn toggle_task(&self, id: i64) -> Result<bool>;

    /// Delete a task. Fails with `Error::NotFound` when nothing was removed.
    async fn delete_task(&self, id: i64) -> Result<()>;
}
