use serde::{Deserialize, Serialize};

/// A named URL bookmark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Quicklink {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub created_at: String,
}
