//! Utility modules
//!
//! Small helpers shared by the DOM layer.

pub mod latch;

// Re-export commonly used types
pub use latch::*;
