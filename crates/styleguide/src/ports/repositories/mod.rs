//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod style_repository;

pub use style_repository::*;
