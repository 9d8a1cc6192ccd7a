//! Running column heights for a single render pass

/// One height accumulator per column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSet {
    heights: Vec<f64>,
}

impl ColumnSet {
    /// `count` empty columns
    pub fn new(count: usize) -> Self {
        Self { heights: vec![0.0; count] }
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn height(&self, column: usize) -> Option<f64> {
        self.heights.get(column).copied()
    }

    /// Index of the shortest column; the first one wins on ties
    pub fn shortest(&self) -> Option<usize> {
        let mut lowest = None;
        for (index, &height) in self.heights.iter().enumerate() {
            match lowest {
                Some((_, best)) if height >= best => {}
                _ => lowest = Some((index, height)),
            }
        }
        lowest.map(|(index, _)| index)
    }

    /// Add `amount` to a column. Negative amounts are ignored so a column
    /// never shrinks during a pass.
    pub fn grow(&mut self, column: usize, amount: f64) {
        if let Some(height) = self.heights.get_mut(column) {
            if amount > 0.0 {
                *height += amount;
            }
        }
    }

    /// Height of the tallest column, 0 with no columns
    pub fn tallest(&self) -> f64 {
        self.heights.iter().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_columns_are_empty() {
        let columns = ColumnSet::new(3);
        assert_eq!(columns.heights(), &[0.0, 0.0, 0.0]);
        assert_eq!(columns.tallest(), 0.0);
    }

    #[test]
    fn test_shortest_prefers_lowest_index() {
        let mut columns = ColumnSet::new(3);
        assert_eq!(columns.shortest(), Some(0));

        columns.grow(0, 10.0);
        assert_eq!(columns.shortest(), Some(1));

        columns.grow(1, 5.0);
        columns.grow(2, 5.0);
        assert_eq!(columns.shortest(), Some(1));
    }

    #[test]
    fn test_no_columns() {
        let columns = ColumnSet::new(0);
        assert!(columns.is_empty());
        assert_eq!(columns.shortest(), None);
        assert_eq!(columns.tallest(), 0.0);
    }

    #[test]
    fn test_grow_is_monotonic() {
        let mut columns = ColumnSet::new(2);
        columns.grow(1, 40.0);
        columns.grow(1, -15.0);
        columns.grow(5, 99.0);
        assert_eq!(columns.heights(), &[0.0, 40.0]);
        assert_eq!(columns.tallest(), 40.0);
    }
}
