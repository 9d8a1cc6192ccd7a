//! Column planning
//!
//! Turns a container width and the sizing options into the number of
//! columns, the width every item gets, and the x offset of the first column.

use serde::{Deserialize, Serialize};

use super::options::{GridOptions, Sizing};

/// Resolved column geometry for one render pass
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ColumnPlan {
    /// Number of columns; zero only in max-width mode with no usable width
    pub column_count: usize,
    /// Width written on every item
    pub item_width: f64,
    /// Gap between items
    pub margin: f64,
    /// Offset of column 0 from the container's left edge
    pub left: f64,
}

impl ColumnPlan {
    /// Plan columns for a container `container_width` pixels wide
    pub fn compute(container_width: f64, options: &GridOptions) -> Self {
        let width = if container_width.is_finite() { container_width.max(0.0) } else { 0.0 };
        let margin = options.margin();

        match options.sizing() {
            Sizing::Fixed { item_width } => Self::fixed(width, item_width, margin),
            Sizing::MaxWidth { max_width } => Self::fit(width, max_width, margin),
        }
    }

    fn fixed(width: f64, item_width: f64, margin: f64) -> Self {
        let pitch = item_width + margin;
        let column_count = if pitch > 0.0 {
            ((width / pitch).floor() as usize).max(1)
        } else {
            1
        };

        // Center the block in whatever a partial column would have used
        let left = if column_count == 1 {
            margin / 2.0
        } else {
            (width % pitch) / 2.0
        };

        Self { column_count, item_width, margin, left }
    }

    fn fit(width: f64, max_width: f64, margin: f64) -> Self {
        let pitch = max_width + margin;
        if width <= 0.0 || pitch <= 0.0 {
            return Self {
                column_count: 0,
                item_width: 0.0,
                margin,
                left: margin / 2.0,
            };
        }

        let column_count = ((width / pitch).ceil() as usize).max(1);
        let columns = column_count as f64;
        let item_width = ((width - columns * margin - margin) / columns).max(0.0);

        Self {
            column_count,
            item_width,
            margin,
            left: margin / 2.0,
        }
    }

    /// Horizontal distance between the left edges of adjacent columns
    pub fn pitch(&self) -> f64 {
        self.item_width + self.margin
    }

    /// Left offset of `column`
    pub fn column_left(&self, column: usize) -> f64 {
        self.pitch() * column as f64 + self.left
    }
}
