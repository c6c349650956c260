//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Style: a named response style with a wrapped description

mod style;

pub use style::*;
