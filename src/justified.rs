//! Justified row layout.
//!
//! Partitions an ordered photo sequence into rows that each fill the
//! container width, keeping row heights as close as possible to a target.
//! Row breaking is a shortest-path problem: nodes are the positions between
//! photos, an edge `i → j` is the candidate row `photos[i..j]`, and the edge
//! weight is the squared deviation of that row's common height from the
//! target. The solver in [`crate::solver`] finds the globally cheapest
//! partition subject to a bounded search window.
//!
//! # Example
//!
//! ```
//! use photogrid::{Photo, RowConstraint};
//!
//! let photos = [Photo::new(200.0, 200.0); 4];
//! let items = RowConstraint::new(600.0, 200.0)
//!     .search_window(4)
//!     .compute(&photos)
//!     .unwrap();
//!
//! // One row of four squares, justified to 600px at height 150.
//! assert_eq!(items.len(), 4);
//! assert_eq!(items[0].height, 150.0);
//! assert_eq!(items[0].width, 150.0);
//! ```

use alloc::vec::Vec;

use crate::photo::{LayoutError, Photo, RowItem, round, round_to};
use crate::solver::shortest_path;

/// Container width below which the search window is pinned to 2.
/// Narrow containers cannot usefully hold many photos per row.
const NARROW_CONTAINER: f64 = 450.0;

/// Aspect ratio assumed for a typical photo (3:2 landscape) when estimating
/// how many photos fit in one row at the target height.
const TYPICAL_ASPECT: f64 = 1.5;

/// Extra break-point candidates beyond the estimated per-row capacity.
const WINDOW_SLACK: usize = 8;

/// Estimate how many consecutive photos the optimizer should consider for a
/// single row.
///
/// Bounds the neighbor generator's branching factor: per-node edge
/// enumeration is O(window) instead of O(n), trading a sliver of optimality
/// for running time on long sequences. The estimate assumes a typical 3:2
/// photo and adds slack, so realistic inputs lose nothing.
pub fn ideal_search_window(container_width: f64, target_row_height: f64) -> usize {
    if container_width < NARROW_CONTAINER {
        return 2;
    }
    let per_row = container_width / target_row_height / TYPICAL_ASPECT;
    (round(per_row) as usize + WINDOW_SLACK).max(1)
}

/// The height at which `row` laid side by side exactly fills
/// `container_width`, accounting for a horizontal margin on both sides of
/// every photo.
fn common_height(row: &[Photo], container_width: f64, margin: f64) -> f64 {
    debug_assert!(!row.is_empty(), "candidate row must span at least one photo");
    let row_width = container_width - row.len() as f64 * (margin * 2.0);
    let total_aspect: f64 = row.iter().map(Photo::aspect_ratio).sum();
    row_width / total_aspect
}

/// Edge weight for breaking after `row`: squared deviation of the row's
/// common height from the target. Squaring penalizes outliers superlinearly,
/// steering the optimizer toward many mildly imperfect rows over a few very
/// bad ones.
fn row_cost(row: &[Photo], container_width: f64, target_height: f64, margin: f64) -> f64 {
    let deviation = common_height(row, container_width, margin) - target_height;
    deviation * deviation
}

/// Justified row layout parameters.
///
/// Builder-style: construct with [`new`](Self::new), adjust, then
/// [`compute`](Self::compute).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowConstraint {
    /// Width every row must fill.
    pub container_width: f64,
    /// Height each row should approximate.
    pub target_row_height: f64,
    /// Horizontal margin applied to both sides of every photo.
    pub margin: f64,
    /// Explicit search window; `None` uses [`ideal_search_window`].
    pub search_window: Option<usize>,
}

impl RowConstraint {
    /// Create a row constraint with zero margin and the ideal search window.
    pub fn new(container_width: f64, target_row_height: f64) -> Self {
        Self {
            container_width,
            target_row_height,
            margin: 0.0,
            search_window: None,
        }
    }

    /// Set the per-photo horizontal margin.
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Cap how many consecutive photos a row may hold. Values below 1 are
    /// clamped to 1.
    pub fn search_window(mut self, window: usize) -> Self {
        self.search_window = Some(window);
        self
    }

    /// Compute assigned dimensions for every photo.
    ///
    /// Output preserves input order; all photos of a row share a height, and
    /// widths are rounded to one decimal. An empty input is a zero-size
    /// layout and returns an empty vector without touching the solver.
    pub fn compute(&self, photos: &[Photo]) -> Result<Vec<RowItem>, LayoutError> {
        if !(self.container_width.is_finite() && self.container_width > 0.0) {
            return Err(LayoutError::InvalidContainerWidth);
        }
        if !(self.target_row_height.is_finite() && self.target_row_height > 0.0) {
            return Err(LayoutError::InvalidTargetHeight);
        }
        if photos.is_empty() {
            return Ok(Vec::new());
        }

        let window = self
            .search_window
            .unwrap_or_else(|| ideal_search_window(self.container_width, self.target_row_height))
            .max(1);
        let end = photos.len();

        let path = shortest_path(
            |node, edges| {
                let reach = (node + window).min(end);
                for next in node + 1..=reach {
                    edges.push((
                        next,
                        row_cost(
                            &photos[node..next],
                            self.container_width,
                            self.target_row_height,
                            self.margin,
                        ),
                    ));
                }
            },
            0,
            end,
        )?;

        let mut items = Vec::with_capacity(end);
        for pair in path.windows(2) {
            let row = &photos[pair[0]..pair[1]];
            let height = common_height(row, self.container_width, self.margin);
            for photo in row {
                items.push(RowItem {
                    width: round_to(height * photo.aspect_ratio(), 1),
                    height,
                });
            }
        }
        Ok(items)
    }
}
