//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the route layer and the repository.

mod style_service;

pub use style_service::StyleService;
