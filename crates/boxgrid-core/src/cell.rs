#![forbid(unsafe_code)]

//! Cell/pixel metric conversion.
//!
//! A grid cell maps to a fixed pixel size plus an inter-cell gap
//! ([`CellSize::spacing`]). [`to_pixels`] converts a grid placement into its
//! rendered pixel footprint: origins scale by `cell + spacing`, while spans
//! drop the one trailing gap that falls outside the box. [`from_pixels`] is
//! the exact inverse on integer grid coordinates:
//!
//! ```
//! use boxgrid_core::{CellSize, GridPosition, from_pixels, to_pixels};
//!
//! let cell = CellSize::new(80, 40).with_spacing(8);
//! let p = GridPosition::new(2, 3, 4, 2);
//! assert_eq!(from_pixels(&to_pixels(&p, &cell), &cell), p);
//! ```
//!
//! # Invariants
//!
//! 1. `from_pixels(to_pixels(p, c), c) == p` for every integer position `p`.
//! 2. Flooring is mathematical floor (`div_euclid`), so the negative pixel
//!    offsets produced by the drag math round toward negative infinity
//!    rather than toward zero.

use serde::{Deserialize, Serialize};

use crate::geometry::GridPosition;

/// Pixel metrics of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSize {
    /// Cell width in pixels.
    pub width: i32,
    /// Cell height in pixels.
    pub height: i32,
    /// Gap between adjacent cells in pixels.
    #[serde(default)]
    pub spacing: i32,
}

impl CellSize {
    /// Create cell metrics with no inter-cell spacing.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            spacing: 0,
        }
    }

    /// Set the inter-cell spacing.
    #[inline]
    #[must_use]
    pub const fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Horizontal pitch: cell width plus one gap.
    #[inline]
    pub const fn pitch_x(&self) -> i32 {
        self.width + self.spacing
    }

    /// Vertical pitch: cell height plus one gap.
    #[inline]
    pub const fn pitch_y(&self) -> i32 {
        self.height + self.spacing
    }
}

/// A rectangle in pixel coordinates.
///
/// Doubles as an offset: the drag/resize math expresses pointer movement as a
/// `PixelRect` delta applied to a box's base placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    /// Create a new pixel rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Convert a grid placement to its pixel footprint.
///
/// Spans subtract one `spacing` so a box's rendered footprint excludes the
/// trailing gap.
#[must_use]
pub fn to_pixels(position: &GridPosition, cell: &CellSize) -> PixelRect {
    PixelRect {
        x: position.x * cell.pitch_x(),
        y: position.y * cell.pitch_y(),
        w: position.w * cell.pitch_x() - cell.spacing,
        h: position.h * cell.pitch_y() - cell.spacing,
    }
}

/// Convert a pixel rectangle back to grid cells, flooring each component.
///
/// Spans re-add one `spacing` before dividing, inverting the subtraction in
/// [`to_pixels`].
#[must_use]
pub fn from_pixels(pixels: &PixelRect, cell: &CellSize) -> GridPosition {
    GridPosition {
        x: pixels.x.div_euclid(cell.pitch_x()),
        y: pixels.y.div_euclid(cell.pitch_y()),
        w: (pixels.w + cell.spacing).div_euclid(cell.pitch_x()),
        h: (pixels.h + cell.spacing).div_euclid(cell.pitch_y()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
