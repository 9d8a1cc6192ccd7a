//! Layout Engine - greedy shortest-column placement
//!
//! The engine owns no DOM state. It reads geometry from and writes styles to
//! a [`GridSurface`], so the same pass drives a live container in the browser
//! and an in-memory double in tests.

use serde::{Deserialize, Serialize};

use super::columns::ColumnSet;
use super::options::GridOptions;
use super::plan::ColumnPlan;

/// Container being laid out
pub trait GridSurface {
    /// Make the container the positioning origin for its items
    fn establish_origin(&mut self);

    /// Current inner width of the container in pixels
    fn width(&self) -> f64;

    /// Number of matched items, in document order
    fn item_count(&self) -> usize;

    /// Apply `style` to item `index` and return its rendered height.
    /// The height is read after the style is applied because the new
    /// width can change it.
    fn place_item(&mut self, index: usize, style: &ItemStyle) -> f64;

    /// Set the container height
    fn set_height(&mut self, height: f64);
}

/// Positioning instructions for one item
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ItemStyle {
    pub width: f64,
    /// Margin on every side (half the configured gap)
    pub margin: f64,
    pub top: f64,
    pub left: f64,
    pub transition: String,
}

impl ItemStyle {
    /// Inline style text, replacing whatever the item had
    pub fn to_css(&self) -> String {
        format!(
            "width: {}; position: absolute; margin: {}; top: {}; left: {}; transition: {}",
            px(self.width),
            px(self.margin),
            px(self.top),
            px(self.left),
            self.transition
        )
    }
}

/// Format a length the way JS number-to-string would (`220px`, `72.5px`)
pub fn px(value: f64) -> String {
    // `+ 0.0` folds -0 into 0
    format!("{}px", value + 0.0)
}

/// Where one item ended up
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Item position in document order
    pub index: usize,
    pub column: usize,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    /// Measured height after placement
    pub height: f64,
}

/// Result of one render pass
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub plan: ColumnPlan,
    pub placements: Vec<Placement>,
    /// Final accumulator of each column
    pub column_heights: Vec<f64>,
    /// Height written on the container
    pub height: f64,
}

impl GridLayout {
    /// Placements assigned to `column`, top to bottom
    pub fn column(&self, column: usize) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter().filter(move |p| p.column == column)
    }
}

/// Masonry layout for one set of options
#[derive(Clone, Debug)]
pub struct GridEngine {
    options: GridOptions,
    transition: String,
}

impl GridEngine {
    pub fn new(options: GridOptions) -> Self {
        let transition = options.transition_value();
        Self { options, transition }
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Transition written on every item
    pub fn transition(&self) -> &str {
        &self.transition
    }

    /// Lay out every item of `surface`
    ///
    /// Items are visited in document order. Each goes to the column with the
    /// least accumulated height (lowest index on ties), sits `margin / 2`
    /// below that column's content, and then grows the column by its
    /// height plus `margin`. The container ends up as tall as the tallest
    /// column.
    pub fn render<S: GridSurface + ?Sized>(&self, surface: &mut S) -> GridLayout {
        surface.establish_origin();

        let plan = ColumnPlan::compute(surface.width(), &self.options);
        let half_margin = plan.margin / 2.0;
        let mut columns = ColumnSet::new(plan.column_count);

        let item_count = surface.item_count();
        let mut placements = Vec::with_capacity(item_count);

        for index in 0..item_count {
            let Some(column) = columns.shortest() else {
                // No columns: nothing can be placed
                break;
            };
            let top = columns.height(column).unwrap_or(0.0) + half_margin;
            let style = ItemStyle {
                width: plan.item_width,
                margin: half_margin,
                top,
                left: plan.column_left(column),
                transition: self.transition.clone(),
            };

            let height = surface.place_item(index, &style);
            columns.grow(column, height + plan.margin);

            placements.push(Placement {
                index,
                column,
                top,
                left: style.left,
                width: style.width,
                height,
            });
        }

        let height = columns.tallest();
        surface.set_height(height);

        log::debug!(
            "Grid pass: {} columns x {}px, {} of {} items placed, height {}",
            plan.column_count,
            plan.item_width,
            placements.len(),
            item_count,
            height
        );

        GridLayout {
            plan,
            placements,
            column_heights: columns.heights().to_vec(),
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory surface with fixed item heights
    struct Fixture {
        width: f64,
        heights: Vec<f64>,
        styles: Vec<Option<ItemStyle>>,
        height: Option<f64>,
        origin_set: bool,
    }

    impl Fixture {
        fn new(width: f64, heights: &[f64]) -> Self {
            Self {
                width,
                heights: heights.to_vec(),
                styles: vec![None; heights.len()],
                height: None,
                origin_set: false,
            }
        }
    }

    impl GridSurface for Fixture {
        fn establish_origin(&mut self) {
            self.origin_set = true;
        }

        fn width(&self) -> f64 {
            self.width
        }

        fn item_count(&self) -> usize {
            self.heights.len()
        }

        fn place_item(&mut self, index: usize, style: &ItemStyle) -> f64 {
            self.styles[index] = Some(style.clone());
            self.heights[index]
        }

        fn set_height(&mut self, height: f64) {
            self.height = Some(height);
        }
    }

    #[test]
    fn test_five_equal_items_in_four_columns() {
        let engine = GridEngine::new(GridOptions::new(".item").with_width(220.0).with_margin(10.0));
        let mut surface = Fixture::new(1000.0, &[100.0; 5]);

        let layout = engine.render(&mut surface);

        assert!(surface.origin_set);
        assert_eq!(layout.plan.column_count, 4);
        let columns: Vec<usize> = layout.placements.iter().map(|p| p.column).collect();
        assert_eq!(columns, vec![0, 1, 2, 3, 0]);
        assert_eq!(layout.column_heights, vec![220.0, 110.0, 110.0, 110.0]);
        assert_eq!(layout.height, 220.0);
        assert_eq!(surface.height, Some(220.0));

        let last = surface.styles[4].as_ref().unwrap();
        assert_eq!(last.top, 115.0);
        assert_eq!(last.left, 40.0);
        assert_eq!(last.margin, 5.0);
    }

    #[test]
    fn test_item_goes_under_shortest_column() {
        let engine = GridEngine::new(GridOptions::new(".item").with_width(100.0));
        let mut surface = Fixture::new(300.0, &[50.0, 20.0, 80.0, 10.0, 10.0]);

        let layout = engine.render(&mut surface);

        let columns: Vec<usize> = layout.placements.iter().map(|p| p.column).collect();
        // After the first row: [50, 20, 80] -> item 3 under column 1 -> [50, 30, 80]
        // -> item 4 under column 1 again
        assert_eq!(columns, vec![0, 1, 2, 1, 1]);
        assert_eq!(layout.placements[4].top, 30.0);
        assert_eq!(layout.height, 80.0);
    }

    #[test]
    fn test_no_items_gives_zero_height() {
        let engine = GridEngine::new(GridOptions::new(".missing"));
        let mut surface = Fixture::new(800.0, &[]);

        let layout = engine.render(&mut surface);

        assert!(layout.placements.is_empty());
        assert_eq!(surface.height, Some(0.0));
    }

    #[test]
    fn test_zero_columns_place_nothing() {
        let engine = GridEngine::new(GridOptions::new(".item").with_max_width(300.0).with_margin(10.0));
        let mut surface = Fixture::new(0.0, &[40.0, 40.0]);

        let layout = engine.render(&mut surface);

        assert_eq!(layout.plan.column_count, 0);
        assert!(layout.placements.is_empty());
        assert!(surface.styles.iter().all(Option::is_none));
        assert_eq!(surface.height, Some(0.0));
    }

    #[test]
    fn test_css_text() {
        let style = ItemStyle {
            width: 220.0,
            margin: 5.0,
            top: 115.0,
            left: 72.5,
            transition: "all 0.5s ease, height 0, width 0".to_string(),
        };
        assert_eq!(
            style.to_css(),
            "width: 220px; position: absolute; margin: 5px; top: 115px; left: 72.5px; \
             transition: all 0.5s ease, height 0, width 0"
        );
    }

    #[test]
    fn test_px_has_no_negative_zero() {
        assert_eq!(px(-0.0), "0px");
        assert_eq!(px(0.5), "0.5px");
    }
}
