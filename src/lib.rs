//! Photo gallery layout computation: justified rows and balanced columns.
//!
//! Pure geometry — no pixel operations, no I/O, `no_std` compatible
//! (requires `alloc`). Callers supply intrinsic photo dimensions and get
//! back assigned sizes and positions; fetching, decoding, and compositing
//! stay on the caller's side of the boundary.
//!
//! # Modules
//!
//! - [`photo`] — Photo geometry types, decimal rounding, layout errors
//! - [`justified`] — Justified row layout via shortest-path row breaking
//! - [`columns`] — Greedy shortest-column packing
//! - [`gallery`] — Positioned plans (placements + canvas) over either mode

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod columns;
pub mod gallery;
pub mod justified;
pub mod photo;
mod solver;

// Re-exports: core types and entry points
pub use columns::{ColumnConstraint, ColumnLayout};
pub use gallery::{Gallery, GalleryMode, GalleryPlan, PlacedPhoto};
pub use justified::{RowConstraint, ideal_search_window};
pub use photo::{ColumnItem, LayoutError, Photo, RowItem, Size};
