//! Core photo geometry types, decimal rounding, and layout errors.
//!
//! A [`Photo`] carries only intrinsic dimensions — the crate never touches
//! pixel data. Layout entry points consume `&[Photo]` and produce derived
//! geometry ([`RowItem`], [`ColumnItem`]) without mutating the input.

/// Intrinsic dimensions of one photo, in source pixels.
///
/// Width and height must be positive and finite. Aspect ratio is derived,
/// never stored, and is invariant under uniform scaling.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Photo {
    /// Intrinsic width in pixels.
    pub width: f64,
    /// Intrinsic height in pixels.
    pub height: f64,
}

impl Photo {
    /// Create a photo from intrinsic dimensions.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Assigned dimensions for one photo after justified row layout.
///
/// All photos in the same row share a height; widths are rounded to one
/// decimal so that summed row widths stay within rounding slack of the
/// container width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowItem {
    /// Assigned width in pixels (one-decimal precision).
    pub width: f64,
    /// Assigned height in pixels (the row's common height).
    pub height: f64,
}

/// Assigned geometry for one photo after column layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColumnItem {
    /// Assigned width in pixels (the uniform column width).
    pub width: f64,
    /// Assigned height in pixels (aspect-preserving scale to column width).
    pub height: f64,
    /// Vertical offset from the top of the layout.
    pub top: f64,
    /// Horizontal offset from the left of the layout.
    pub left: f64,
}

/// Width × height of a computed canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Size {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Container width is zero, negative, or non-finite.
    InvalidContainerWidth,
    /// Target row height is zero, negative, or non-finite.
    InvalidTargetHeight,
    /// Column count is zero.
    InvalidColumnCount,
    /// Column packing was invoked with no photos.
    NoPhotos,
    /// No path exists between two break-point nodes. Defensive: edges
    /// always advance toward the end node, so this cannot occur for a
    /// non-empty photo sequence.
    NoRoute {
        /// Start node of the failed search.
        start: usize,
        /// End node of the failed search.
        end: usize,
    },
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidContainerWidth => write!(f, "container width must be positive and finite"),
            Self::InvalidTargetHeight => {
                write!(f, "target row height must be positive and finite")
            }
            Self::InvalidColumnCount => write!(f, "column count must be at least 1"),
            Self::NoPhotos => write!(f, "column layout requires at least one photo"),
            Self::NoRoute { start, end } => {
                write!(f, "no path from node {start} to node {end}")
            }
        }
    }
}

impl core::error::Error for LayoutError {}

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = num_traits::Float::powi(10.0_f64, decimals);
    num_traits::Float::round(value * factor) / factor
}

/// Round to the nearest integer.
pub(crate) fn round(value: f64) -> f64 {
    num_traits::Float::round(value)
}
