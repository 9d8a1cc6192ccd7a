//! Gridify WASM Module
//!
//! Masonry ("waterfall") layout for DOM containers. Items matching a selector
//! are dropped one by one into the currently shortest column, then the
//! container is sized to the tallest column.
//!
//! The layout math lives in [`layout`] and runs against any [`GridSurface`];
//! [`dom`] provides the browser-backed surface, image waiting and resize
//! handling, and [`api`] exposes the JavaScript entry points.

pub mod api;
pub mod dom;
pub mod error;
pub mod layout;
pub mod utils;

// Re-export commonly used types
pub use error::GridError;
pub use layout::{ColumnPlan, ColumnSet, GridEngine, GridLayout, GridOptions, GridSurface, ItemStyle, Placement, Sizing};
pub use utils::CompletionLatch;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // A logger is already installed by the host page.
        return;
    }

    log::info!("Gridify WASM module initialized");
}
