//! JSON file implementation of StyleRepository
//!
//! The whole collection lives in a single JSON array on disk. Every
//! operation is a full read-modify-write cycle against that file, so
//! two concurrent writers can race: both read the same base collection
//! and the second write silently discards the first's change. This is
//! an accepted limitation; the adapter assumes a single-writer process.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use styleguide::{DomainError, Style, StyleRepository};

/// JSON file implementation of StyleRepository
pub struct JsonStyleRepository {
    path: PathBuf,
}

impl JsonStyleRepository {
    /// Open a repository backed by `path`, creating the parent directory
    /// and an empty collection file if they do not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| DomainError::Repository(e.to_string()))?;
        }
        if !path.exists() {
            std::fs::write(&path, "[]").map_err(|e| DomainError::Repository(e.to_string()))?;
        }

        Ok(Self { path })
    }

    /// Read the full collection.
    ///
    /// An unreadable or unparsable file is logged and reported as an
    /// empty collection rather than an error.
    async fn load(&self) -> Vec<Style> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Failed to read styles from {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(styles) => styles,
            Err(e) => {
                tracing::error!("Failed to parse styles from {:?}: {}", self.path, e);
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and write it in a single call.
    async fn persist(&self, styles: &[Style]) -> Result<(), DomainError> {
        let data = serde_json::to_string_pretty(styles)
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        fs::write(&self.path, data)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }
}

/// Next id for the collection: max existing id + 1, or 1 when empty.
/// Ids below the current max are never handed out again.
fn next_id(styles: &[Style]) -> i64 {
    styles.iter().map(|s| s.id).max().map_or(1, |max| max + 1)
}

#[async_trait]
impl StyleRepository for JsonStyleRepository {
    async fn find_all(&self) -> Result<Vec<Style>, DomainError> {
        Ok(self.load().await)
    }

    async fn add(&self, name: &str, description: &str) -> Result<Style, DomainError> {
        let mut styles = self.load().await;

        let style = Style::new(next_id(&styles), name, description);
        styles.push(style.clone());
        self.persist(&styles).await?;

        Ok(style)
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> Result<Style, DomainError> {
        let mut styles = self.load().await;

        let style = styles
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| DomainError::not_found("Style", id))?;
        style.apply_update(name, description);
        let updated = style.clone();

        self.persist(&styles).await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut styles = self.load().await;

        styles.retain(|s| s.id != id);
        self.persist(&styles).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn repo_at(dir: &tempfile::TempDir) -> JsonStyleRepository {
        JsonStyleRepository::new(dir.path().join("styles.json")).unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_initialized_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("styles.json");

        let repo = JsonStyleRepository::new(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("styles.json");
        let repo = JsonStyleRepository::new(&path).unwrap();

        std::fs::write(&path, "not json at all").unwrap();

        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_assigns_sequential_ids() {
        let dir = tempdir().unwrap();
        let repo = repo_at(&dir);

        let first = repo.add("Formal", "Be concise.").await.unwrap();
        let second = repo.add("Casual", "Be relaxed.").await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_ids_not_reused_from_gaps() {
        let dir = tempdir().unwrap();
        let repo = repo_at(&dir);

        repo.add("A", "a").await.unwrap();
        repo.add("B", "b").await.unwrap();
        repo.add("C", "c").await.unwrap();
        repo.delete(2).await.unwrap();

        let next = repo.add("D", "d").await.unwrap();
        assert_eq!(next.id, 4);
    }

    #[tokio::test]
    async fn test_add_wraps_description() {
        let dir = tempdir().unwrap();
        let repo = repo_at(&dir);

        let style = repo.add("Formal", "hello").await.unwrap();

        assert_eq!(style.description, "<response-style>hello</response-style>");
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_identity() {
        let dir = tempdir().unwrap();
        let repo = repo_at(&dir);

        let created = repo.add("Formal", "a").await.unwrap();
        let updated = repo.update(created.id, "Casual", "b").await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Casual");
        assert_eq!(updated.description, "<response-style>b</response-style>");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let dir = tempdir().unwrap();
        let repo = repo_at(&dir);

        let err = repo.update(42, "Formal", "a").await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let dir = tempdir().unwrap();
        let repo = repo_at(&dir);

        repo.add("Formal", "a").await.unwrap();
        repo.delete(1).await.unwrap();
        repo.delete(1).await.unwrap();

        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_round_trip_preserves_insertion_order() {
        let dir = tempdir().unwrap();
        let repo = repo_at(&dir);

        repo.add("A", "a").await.unwrap();
        repo.add("B", "b").await.unwrap();
        repo.add("C", "c").await.unwrap();
        repo.update(2, "B2", "b2").await.unwrap();
        repo.delete(1).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["B2", "C"]);
    }

    #[tokio::test]
    async fn test_persists_pretty_printed_camel_case() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("styles.json");
        let repo = JsonStyleRepository::new(&path).unwrap();

        repo.add("Formal", "Be concise.").await.unwrap();

        let data = std::fs::read_to_string(&path).unwrap();
        assert!(data.starts_with("[\n  {"));
        assert!(data.contains("\"createdAt\""));
        assert!(data.contains("\"updatedAt\""));
    }

    #[tokio::test]
    async fn test_collection_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("styles.json");

        JsonStyleRepository::new(&path)
            .unwrap()
            .add("Formal", "a")
            .await
            .unwrap();

        let reopened = JsonStyleRepository::new(&path).unwrap();
        let styles = reopened.find_all().await.unwrap();
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0].name, "Formal");
    }

    // Documents the accepted lost-update behavior of interleaved
    // read-modify-write cycles, not a safety property.
    #[tokio::test]
    async fn test_interleaved_writers_lose_updates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("styles.json");
        let writer_a = JsonStyleRepository::new(&path).unwrap();
        let writer_b = JsonStyleRepository::new(&path).unwrap();

        // Both writers observe the same empty base collection.
        let stale = writer_b.load().await;

        writer_a.add("First", "a").await.unwrap();

        // Writer B appends to its stale snapshot and persists, discarding
        // writer A's record. Last write wins, ids collide.
        let mut styles = stale;
        styles.push(Style::new(next_id(&styles), "Second", "b"));
        writer_b.persist(&styles).await.unwrap();

        let remaining = writer_a.find_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Second");
        assert_eq!(remaining[0].id, 1);
    }
}
