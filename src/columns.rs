//! Column layout: greedy shortest-column packing.
//!
//! Photos are scaled to a uniform column width (aspect-preserving) and
//! placed in input order, each into the column with the smallest running
//! height. This is an online bin-packing heuristic, not globally optimal —
//! the caller controls photo order and the goal is visual balance.
//!
//! # Example
//!
//! ```
//! use photogrid::{ColumnConstraint, Photo};
//!
//! let photos = [Photo::new(200.0, 200.0); 3];
//! let layout = ColumnConstraint::new(400.0, 2).compute(&photos).unwrap();
//!
//! // Three squares over two columns: the third lands back in column 0.
//! assert_eq!(layout.items[2].left, 0.0);
//! assert_eq!(layout.container_height, 400.0);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::photo::{ColumnItem, LayoutError, Photo, round_to};

/// Column layout parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColumnConstraint {
    /// Total width shared by all columns.
    pub container_width: f64,
    /// Number of columns.
    pub columns: usize,
    /// Margin applied on every side of every photo.
    pub margin: f64,
}

/// Result of packing photos into columns.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnLayout {
    /// Assigned geometry per photo, in input order.
    pub items: Vec<ColumnItem>,
    /// Height of the tallest column after packing — the overall canvas
    /// height for absolutely positioned items.
    pub container_height: f64,
}

/// Running pack state: per-column fill levels and fixed left offsets.
/// Scoped to a single [`ColumnConstraint::compute`] call.
struct ColumnState {
    tops: Vec<f64>,
    lefts: Vec<f64>,
}

impl ColumnState {
    fn new(columns: usize, col_width: f64, margin: f64) -> Self {
        Self {
            tops: vec![0.0; columns],
            lefts: (0..columns)
                .map(|i| round_to(i as f64 * (col_width + margin * 2.0), 1))
                .collect(),
        }
    }

    /// Index of the column with the smallest running height; ties go to the
    /// lowest index.
    fn shortest(&self) -> usize {
        let mut best = 0;
        for (i, &top) in self.tops.iter().enumerate().skip(1) {
            if top < self.tops[best] {
                best = i;
            }
        }
        best
    }

    fn tallest(&self) -> f64 {
        self.tops.iter().fold(0.0, |acc, &top| acc.max(top))
    }
}

impl ColumnConstraint {
    /// Create a column constraint with zero margin.
    pub fn new(container_width: f64, columns: usize) -> Self {
        Self {
            container_width,
            columns,
            margin: 0.0,
        }
    }

    /// Set the per-photo margin.
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Pack photos into columns.
    ///
    /// Fails fast on a zero column count, a non-positive or non-finite
    /// container width, or an empty photo slice — the reference behavior of
    /// producing NaN geometry for those inputs is rejected as a
    /// configuration error.
    pub fn compute(&self, photos: &[Photo]) -> Result<ColumnLayout, LayoutError> {
        if !(self.container_width.is_finite() && self.container_width > 0.0) {
            return Err(LayoutError::InvalidContainerWidth);
        }
        if self.columns == 0 {
            return Err(LayoutError::InvalidColumnCount);
        }
        if photos.is_empty() {
            return Err(LayoutError::NoPhotos);
        }

        let columns = self.columns as f64;
        let col_width = (self.container_width - self.margin * 2.0 * columns) / columns;

        let mut state = ColumnState::new(self.columns, col_width, self.margin);
        let mut items = Vec::with_capacity(photos.len());
        for photo in photos {
            let width = round_to(col_width, 1);
            let height = round_to(photo.height / photo.width * col_width, 1);
            let col = state.shortest();
            items.push(ColumnItem {
                width,
                height,
                top: state.tops[col],
                left: state.lefts[col],
            });
            state.tops[col] += height + self.margin * 2.0;
        }

        Ok(ColumnLayout {
            container_height: state.tallest(),
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squares(n: usize) -> Vec<Photo> {
        vec![Photo::new(200.0, 200.0); n]
    }

    // ── placement ───────────────────────────────────────────────────────

    #[test]
    fn alternates_columns_on_height_ties() {
        // Three equal squares over two 200px columns: 0, 1, then back to 0.
        let layout = ColumnConstraint::new(400.0, 2)
            .compute(&squares(3))
            .unwrap();
        assert_eq!(layout.items[0].left, 0.0);
        assert_eq!(layout.items[0].top, 0.0);
        assert_eq!(layout.items[1].left, 200.0);
        assert_eq!(layout.items[1].top, 0.0);
        assert_eq!(layout.items[2].left, 0.0);
        assert_eq!(layout.items[2].top, 200.0);
        // Column 0 ends taller than column 1.
        assert_eq!(layout.container_height, 400.0);
    }

    #[test]
    fn picks_the_shortest_column() {
        // A tall portrait fills column 0; the next two photos both go to
        // column 1 because it stays shorter.
        let photos = [
            Photo::new(100.0, 400.0),
            Photo::new(100.0, 100.0),
            Photo::new(100.0, 100.0),
        ];
        let layout = ColumnConstraint::new(400.0, 2).compute(&photos).unwrap();
        assert_eq!(layout.items[1].left, 200.0);
        assert_eq!(layout.items[1].top, 0.0);
        assert_eq!(layout.items[2].left, 200.0);
        assert_eq!(layout.items[2].top, 200.0);
    }

    #[test]
    fn scales_aspect_preserving() {
        // 400×200 photo in a 100px column → 100×50.
        let photos = [Photo::new(400.0, 200.0)];
        let layout = ColumnConstraint::new(400.0, 4).compute(&photos).unwrap();
        assert_eq!(layout.items[0].width, 100.0);
        assert_eq!(layout.items[0].height, 50.0);
    }

    #[test]
    fn dimensions_are_rounded_to_one_decimal() {
        // colWidth = 400 / 3 = 133.33…
        let photos = [Photo::new(300.0, 200.0)];
        let layout = ColumnConstraint::new(400.0, 3).compute(&photos).unwrap();
        assert_eq!(layout.items[0].width, 133.3);
        // 200/300 * 133.33… = 88.88… → 88.9
        assert_eq!(layout.items[0].height, 88.9);
    }

    #[test]
    fn margin_shrinks_columns_and_offsets_placement() {
        // 2 columns, margin 5: colWidth = (420 - 20) / 2 = 200,
        // column 1 starts at 200 + 10 = 210.
        let layout = ColumnConstraint::new(420.0, 2)
            .margin(5.0)
            .compute(&squares(2))
            .unwrap();
        assert_eq!(layout.items[0].left, 0.0);
        assert_eq!(layout.items[1].left, 210.0);
        // Each column grew by height + 2*margin.
        assert_eq!(layout.container_height, 210.0);
    }

    #[test]
    fn container_height_tracks_tallest_column() {
        let photos = [
            Photo::new(100.0, 300.0),
            Photo::new(100.0, 100.0),
            Photo::new(100.0, 100.0),
        ];
        let layout = ColumnConstraint::new(200.0, 2).compute(&photos).unwrap();
        // Column 0: 300; column 1: 100 + 100 = 200.
        assert_eq!(layout.container_height, 300.0);
    }

    #[test]
    fn single_column_stacks_everything() {
        let layout = ColumnConstraint::new(200.0, 1)
            .compute(&squares(3))
            .unwrap();
        assert_eq!(layout.items[0].top, 0.0);
        assert_eq!(layout.items[1].top, 200.0);
        assert_eq!(layout.items[2].top, 400.0);
        assert_eq!(layout.container_height, 600.0);
    }

    // ── validation ──────────────────────────────────────────────────────

    #[test]
    fn rejects_zero_columns() {
        let err = ColumnConstraint::new(400.0, 0).compute(&squares(1));
        assert_eq!(err, Err(LayoutError::InvalidColumnCount));
    }

    #[test]
    fn rejects_empty_photos() {
        let err = ColumnConstraint::new(400.0, 2).compute(&[]);
        assert_eq!(err, Err(LayoutError::NoPhotos));
    }

    #[test]
    fn rejects_non_positive_container_width() {
        let err = ColumnConstraint::new(0.0, 2).compute(&squares(1));
        assert_eq!(err, Err(LayoutError::InvalidContainerWidth));
        let err = ColumnConstraint::new(f64::INFINITY, 2).compute(&squares(1));
        assert_eq!(err, Err(LayoutError::InvalidContainerWidth));
    }
}
