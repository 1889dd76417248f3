//! Task model definitions

use serde::{Deserialize, Serialize};

/// A dated to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    /// Day the task belongs to, `YYYY-MM-DD`
    pub date: String,
    /// Assigned by the store on insert
    pub created_at: String,
}

/// Body of a toggle response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_serializes_snake_case_fields() {
        let task = Task {
            id: 7,
            title: "Water plants".to_string(),
            completed: false,
            date: "2024-01-01".to_string(),
            created_at: "2024-01-01 08:00:00".to_string(),
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "Water plants");
        assert_eq!(value["completed"], false);
        assert_eq!(value["date"], "2024-01-01");
        assert_eq!(value["created_at"], "2024-01-01 08:00:00");
    }

    #[test]
    fn test_toggle_outcome_shape() {
        let body = serde_json::to_string(&ToggleOutcome { completed: true }).unwrap();
        assert_eq!(body, r#"{"completed":true}"#);
    }
}
