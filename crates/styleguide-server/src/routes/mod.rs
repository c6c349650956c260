//! Styleguide API Routes
//!
//! - /api/styles - Style CRUD
//! - /api/prompt - Style-detection prompt
//! - /health - Liveness check

pub mod prompt;
pub mod style;
pub mod swagger;
