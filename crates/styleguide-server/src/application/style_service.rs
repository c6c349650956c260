//! Style Application Service (Use Case)
//!
//! Holds the boundary-layer responsibilities the repository trusts its
//! callers with: trimming input, rejecting empty fields, and pre-checking
//! name uniqueness against the current collection.

use std::sync::Arc;

use styleguide::{DomainError, Style, StyleRepository};

/// Application service for style operations
pub struct StyleService<R: StyleRepository> {
    repo: Arc<R>,
}

impl<R: StyleRepository> StyleService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all styles
    pub async fn list_all(&self) -> Result<Vec<Style>, DomainError> {
        self.repo.find_all().await
    }

    /// Create a new style
    ///
    /// The repository assigns the id and wraps the description.
    pub async fn create(&self, name: &str, description: &str) -> Result<Style, DomainError> {
        let name = name.trim();
        let description = description.trim();

        if name.is_empty() || description.is_empty() {
            return Err(DomainError::Validation(
                "Name and description cannot be empty".to_string(),
            ));
        }

        let existing = self.repo.find_all().await?;
        if existing.iter().any(|s| s.name == name) {
            return Err(DomainError::Conflict(
                "A style with this name already exists".to_string(),
            ));
        }

        let saved = self.repo.add(name, description).await?;

        tracing::info!("Created style: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Update an existing style
    ///
    /// Same validation as create; the duplicate check ignores the style
    /// being updated so it can keep its own name.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> Result<Style, DomainError> {
        let name = name.trim();
        let description = description.trim();

        if name.is_empty() || description.is_empty() {
            return Err(DomainError::Validation(
                "Name and description cannot be empty".to_string(),
            ));
        }

        let existing = self.repo.find_all().await?;
        if existing.iter().any(|s| s.name == name && s.id != id) {
            return Err(DomainError::Conflict(
                "A style with this name already exists".to_string(),
            ));
        }

        let updated = self.repo.update(id, name, description).await?;

        tracing::info!("Updated style: {} ({})", updated.name, updated.id);

        Ok(updated)
    }

    /// Delete a style. Deleting a missing id succeeds.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.repo.delete(id).await?;
        tracing::info!("Deleted style: {}", id);
        Ok(())
    }
}
