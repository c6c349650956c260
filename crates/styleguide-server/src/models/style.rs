//! Style DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create a new style
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStyleRequest {
    /// Unique human-readable name
    pub name: String,
    /// Description of how responses should read
    pub description: String,
}

/// Request to update an existing style
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStyleRequest {
    pub name: String,
    pub description: String,
}

/// Style response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StyleResponse {
    pub id: i64,
    pub name: String,
    /// Stored description, wrapped in the response-style tag template
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Delete confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Error body returned by failing routes
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl StyleResponse {
    pub fn from_domain(style: styleguide::Style) -> Self {
        Self {
            id: style.id,
            name: style.name,
            description: style.description,
            created_at: style.created_at,
            updated_at: style.updated_at,
        }
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
