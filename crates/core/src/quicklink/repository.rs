//! Quicklink repository trait

use async_trait::async_trait;

use super::model::Quicklink;
use crate::Result;

#[async_trait]
pub trait QuicklinkRepository: Send + Sync {
    /// All quicklinks, oldest first
    async fn list_quicklinks(&self) -> Result<Vec<Quicklink>>;

    async fn create_quicklink(&self, name: &str, url: &str) -> Result<Quicklink>;

    /// Delete a quicklink. Removing an unknown id is not an error.
    async fn delete_quicklink(&self, id: i64) -> Result<()>;
}
