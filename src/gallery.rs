//! Positioned gallery plans over row or column layout.
//!
//! The low-level entry points ([`RowConstraint`](crate::RowConstraint),
//! [`ColumnConstraint`](crate::ColumnConstraint)) emit per-photo dimensions;
//! this module turns them into absolute pixel placements and a canvas size
//! by deterministic left-to-right, top-to-bottom accumulation.
//!
//! The caller owns everything on either side of the plan: resolving photo
//! sources to intrinsic dimensions (download, decode) happens before
//! [`Gallery::plan`], and compositing placed photos onto a surface happens
//! after. The plan itself is pure geometry.
//!
//! # Example
//!
//! ```
//! use photogrid::{Gallery, Photo};
//!
//! let photos = [Photo::new(200.0, 200.0); 4];
//! let plan = Gallery::rows(600.0)
//!     .target_row_height(200.0)
//!     .plan(&photos)
//!     .unwrap();
//!
//! assert_eq!(plan.placements.len(), 4);
//! assert_eq!(plan.canvas.width, 600.0);
//! ```

use alloc::vec::Vec;

use crate::columns::ColumnConstraint;
use crate::justified::RowConstraint;
use crate::photo::{LayoutError, Photo, RowItem, Size, round};

/// Default target row height when none is specified.
const DEFAULT_TARGET_ROW_HEIGHT: f64 = 300.0;

/// Which layout algorithm a [`Gallery`] runs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GalleryMode {
    /// Justified rows approximating a target height.
    Rows {
        /// Height each row should approximate.
        target_row_height: f64,
        /// Explicit search window; `None` derives one from the container.
        search_window: Option<usize>,
    },
    /// Balanced columns.
    Columns {
        /// Number of columns.
        count: usize,
    },
}

/// One photo's absolute placement within a planned gallery.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacedPhoto {
    /// Horizontal offset from the canvas left edge.
    pub x: f64,
    /// Vertical offset from the canvas top edge.
    pub y: f64,
    /// Assigned width in pixels.
    pub width: f64,
    /// Assigned height in pixels.
    pub height: f64,
}

/// A fully positioned gallery: placements in input order plus the canvas
/// size that contains them.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryPlan {
    /// Absolute placement per photo, in input order.
    pub placements: Vec<PlacedPhoto>,
    /// Overall canvas dimensions.
    pub canvas: Size,
}

/// Gallery planning parameters for either layout mode.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gallery {
    /// Width the layout must fill.
    pub container_width: f64,
    /// Margin applied to every photo.
    pub margin: f64,
    /// Row or column layout.
    pub mode: GalleryMode,
}

impl Gallery {
    /// Justified row gallery with the default 300px target row height.
    pub fn rows(container_width: f64) -> Self {
        Self {
            container_width,
            margin: 0.0,
            mode: GalleryMode::Rows {
                target_row_height: DEFAULT_TARGET_ROW_HEIGHT,
                search_window: None,
            },
        }
    }

    /// Column gallery with the given column count.
    pub fn columns(container_width: f64, count: usize) -> Self {
        Self {
            container_width,
            margin: 0.0,
            mode: GalleryMode::Columns { count },
        }
    }

    /// Set the per-photo margin.
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the target row height. No effect in column mode.
    pub fn target_row_height(mut self, height: f64) -> Self {
        if let GalleryMode::Rows {
            target_row_height, ..
        } = &mut self.mode
        {
            *target_row_height = height;
        }
        self
    }

    /// Set an explicit search window. No effect in column mode.
    pub fn search_window(mut self, window: usize) -> Self {
        if let GalleryMode::Rows { search_window, .. } = &mut self.mode {
            *search_window = Some(window);
        }
        self
    }

    /// Compute absolute placements and the canvas size.
    ///
    /// Row mode on an empty slice yields an empty plan with a zero canvas;
    /// column mode propagates [`LayoutError::NoPhotos`].
    pub fn plan(&self, photos: &[Photo]) -> Result<GalleryPlan, LayoutError> {
        match self.mode {
            GalleryMode::Rows {
                target_row_height,
                search_window,
            } => {
                let mut constraint = RowConstraint::new(self.container_width, target_row_height)
                    .margin(self.margin);
                if let Some(window) = search_window {
                    constraint = constraint.search_window(window);
                }
                let items = constraint.compute(photos)?;
                Ok(position_rows(&items, self.container_width))
            }
            GalleryMode::Columns { count } => {
                let layout = ColumnConstraint::new(self.container_width, count)
                    .margin(self.margin)
                    .compute(photos)?;
                let placements = layout
                    .items
                    .iter()
                    .map(|item| PlacedPhoto {
                        x: item.left,
                        y: item.top,
                        width: item.width,
                        height: item.height,
                    })
                    .collect();
                Ok(GalleryPlan {
                    placements,
                    canvas: Size::new(self.container_width, layout.container_height),
                })
            }
        }
    }
}

/// Group flat row-layout output into rows and accumulate positions.
///
/// A row ends when adding the next item's width would push the accumulated
/// width past the container (compared at nearest-integer precision, since
/// item widths carry one decimal of rounding slack). X accumulates
/// left-to-right within a row; y advances by each row's shared height.
fn position_rows(items: &[RowItem], container_width: f64) -> GalleryPlan {
    let mut placements = Vec::with_capacity(items.len());
    let mut x = 0.0;
    let mut y = 0.0;
    let mut row_width = 0.0;
    let mut first_row_width = f64::NAN;
    let mut row_height = 0.0;

    for item in items {
        if round(row_width + item.width) > container_width {
            // Row break: remember the first row's exact width for the
            // canvas, then move below the finished row.
            if first_row_width.is_nan() {
                first_row_width = row_width;
            }
            y += row_height;
            x = 0.0;
            row_width = 0.0;
        }
        placements.push(PlacedPhoto {
            x,
            y,
            width: item.width,
            height: item.height,
        });
        x += item.width;
        row_width += item.width;
        row_height = item.height;
    }

    if first_row_width.is_nan() {
        first_row_width = row_width;
    }
    let canvas_height = if items.is_empty() { 0.0 } else { y + row_height };
    let canvas_width = if items.is_empty() { 0.0 } else { first_row_width };

    GalleryPlan {
        placements,
        canvas: Size::new(canvas_width, canvas_height),
    }
}
