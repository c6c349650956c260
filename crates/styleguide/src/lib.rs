//! Styleguide Domain Library
//!
//! Core domain types and interfaces for the styleguide response-style
//! manager.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Style)
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use styleguide::domain::Style;
//! use styleguide::ports::StyleRepository;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{wrap_description, DomainError, Style};
pub use ports::StyleRepository;
