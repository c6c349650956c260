//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod jsonfile;

// Re-exports
pub use jsonfile::JsonStyleRepository;
