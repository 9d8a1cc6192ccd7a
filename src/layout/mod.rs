//! Masonry layout computation
//!
//! - `options`: grid configuration and its JS-friendly deserialization
//! - `plan`: column count, item width and first-column offset
//! - `columns`: per-column height accumulators
//! - `engine`: the placement pass over a [`GridSurface`]

pub mod columns;
pub mod engine;
pub mod options;
pub mod plan;

pub use columns::ColumnSet;
pub use engine::{px, GridEngine, GridLayout, GridSurface, ItemStyle, Placement};
pub use options::{GridOptions, Sizing, DEFAULT_ITEM_WIDTH, DEFAULT_TRANSITION, TRANSITION_SUFFIX};
pub use plan::ColumnPlan;
