//! Task queries

use async_trait::async_trait;
use tracing::debug;

use super::Store;
use crate::task::{Task, TaskRepository};
use crate::{Error, Result};

const SELECT_TASKS_BY_DATE: &str = "SELECT id, title, completed, date, created_at FROM tasks \
     WHERE date = ? ORDER BY created_at, id";
const INSERT_TASK: &str = "INSERT INTO tasks (title, date) VALUES (?, ?) \
     RETURNING id, title, completed, date, created_at";
const SELECT_COMPLETED: &str = "SELECT completed FROM tasks WHERE id = ?";
const UPDATE_COMPLETED: &str = "UPDATE tasks SET completed = ? WHERE id = ?";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?";

#[async_trait]
impl TaskRepository for Store {
    async fn list_tasks(&self, date: &str) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(SELECT_TASKS_BY_DATE)
            .bind(date)
            .fetch_all(self.pool())
            .await?;
        Ok(tasks)
    }

    async fn create_task(&self, title: &str, date: &str) -> Result<Task> {
        let task = sqlx::query_as::<_, Task>(INSERT_TASK)
            .bind(title)
            .bind(date)
            .fetch_one(self.pool())
            .await?;

        debug!(id = task.id, date = %task.date, "Task created");
        Ok(task)
    }

    async fn toggle_task(&self, id: i64) -> Result<bool> {
        let mut tx = self.pool().begin().await?;

        let completed: bool = sqlx::query_scalar(SELECT_COMPLETED)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Task {id}")))?;

        let completed = !completed;
        sqlx::query(UPDATE_COMPLETED)
            .bind(completed)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(completed)
    }

    async fn delete_task(&self, id: i64) -> Result<()> {
        let result = sqlx::query(DELETE_TASK)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Task {id}")));
        }
        Ok(())
    }
}
