//! Quicklink queries

use async_trait::async_trait;
use tracing::debug;

use super::Store;
use crate::quicklink::{Quicklink, QuicklinkRepository};
use crate::Result;

const SELECT_QUICKLINKS: &str =
    "SELECT id, name, url, created_at FROM quicklinks ORDER BY created_at, id";
const INSERT_QUICKLINK: &str = "INSERT INTO quicklinks (name, url) VALUES (?, ?) \
     RETURNING id, name, url, created_at";
const DELETE_QUICKLINK: &str = "DELETE FROM quicklinks WHERE id = ?";

#[async_trait]
impl QuicklinkRepository for Store {
    async fn list_quicklinks(&self) -> Result<Vec<Quicklink>> {
        let links = sqlx::query_as::<_, Quicklink>(SELECT_QUICKLINKS)
            .fetch_all(self.pool())
            .await?;
        Ok(links)
    }

    async fn create_quicklink(&self, name: &str, url: &str) -> Result<Quicklink> {
        let link = sqlx::query_as::<_, Quicklink>(INSERT_QUICKLINK)
            .bind(name)
            .bind(url)
            .fetch_one(self.pool())
            .await?;

        debug!(id = link.id, "Quicklink created");
        Ok(link)
    }

    async fn delete_quicklink(&self, id: i64) -> Result<()> {
        sqlx::query(DELETE_QUICKLINK)
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::create_test_store;

    #[tokio::test]
    async fn test_create_and_list_quicklinks() {
        let (store, _temp) = create_test_store().await;

        let docs = store
            .create_quicklink("Docs", "https://docs.rs")
            .await
            .unwrap();
        let crates = store
            .create_quicklink("Crates", "https://crates.io")
            .await
            .unwrap();

        assert!(docs.id > 0);
        assert_eq!(docs.name, "Docs");
        assert_eq!(docs.url, "https://docs.rs");

        let links = store.list_quicklinks().await.unwrap();
        assert_eq!(links, vec![docs, crates]);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (store, _temp) = create_test_store().await;
        assert!(store.list_quicklinks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_quicklink_twice_succeeds() {
        let (store, _temp) = create_test_store().await;

        let link = store
            .create_quicklink("Mail", "https://mail.example.com")
            .await
            .unwrap();

        store.delete_quicklink(link.id).await.unwrap();
        store.delete_quicklink(link.id).await.unwrap();
        assert!(store.list_quicklinks().await.unwrap().is_empty());
    }
}
