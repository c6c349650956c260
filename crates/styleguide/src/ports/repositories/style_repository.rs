//! Style Repository Port
//!
//! Abstract interface for the persisted style collection.

use async_trait::async_trait;

use crate::domain::entities::Style;
use crate::domain::errors::DomainError;

/// Repository interface for the style collection
///
/// Implementations own the backing store. Callers are responsible for
/// trimming inputs and pre-checking name uniqueness; the repository
/// performs id assignment, description wrapping, and persistence.
#[async_trait]
pub trait StyleRepository: Send + Sync {
    /// Return the full collection in insertion order
    async fn find_all(&self) -> Result<Vec<Style>, DomainError>;

    /// Append a new style with a generated id and wrapped description
    async fn add(&self, name: &str, description: &str) -> Result<Style, DomainError>;

    /// Replace name and description of an existing style
    async fn update(&self, id: i64, name: &str, description: &str)
        -> Result<Style, DomainError>;

    /// Remove a style by id. Removing a missing id is not an error.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
