//! Utility modules shared across the front end:
//! - Error types
//! - Source location tracking
//! - Formatting helpers for emitted code and dumps

pub mod errors;
pub mod location;
pub mod pretty;

// Re-exports
pub use errors::*;
pub use location::SourceLocation;
pub use pretty::CodeFormatter;
