//! Gridify WASM API
//!
//! JavaScript-facing entry points.
//!
//! - `helpers`: conversion between JS values and crate types
//! - `grid`: `gridify`, `waitForImages` and the `GridHandle` they return

pub mod grid;
pub mod helpers;

pub use grid::{gridify, wait_for_images_js, GridHandle};
