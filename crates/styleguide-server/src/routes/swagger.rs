//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreateStyleRequest, DeleteResponse, ErrorResponse, PromptResponse, StyleResponse,
    UpdateStyleRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Style endpoints
        super::style::list_styles,
        super::style::create_style,
        super::style::update_style,
        super::style::delete_style,
        // Prompt endpoints
        super::prompt::detection_prompt,
    ),
    components(schemas(
        CreateStyleRequest,
        UpdateStyleRequest,
        StyleResponse,
        DeleteResponse,
        ErrorResponse,
        PromptResponse,
    )),
    tags(
        (name = "Style", description = "Response style management"),
        (name = "Prompt", description = "Style-detection prompt")
    )
)]
pub struct ApiDoc;
