//! JSON-file persistence adapter

mod style_repository;

pub use style_repository::*;
