//! Prompt DTOs

use serde::Serialize;
use utoipa::ToSchema;

/// Style-detection prompt response
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptResponse {
    pub prompt: String,
}
