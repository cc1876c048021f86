//! # clipgate-core
//!
//! Foundation crate for the ClipGate clipboard utility.
//! Defines the classification types, traits, errors, and constants
//! shared by the matcher crate and the application shell.

pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use errors::{ClipError, ClipResult};
pub use models::{Classification, Detection, JwtParts, PatternCategory, PatternKind};
