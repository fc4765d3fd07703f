#![forbid(unsafe_code)]

//! Integer grid geometry.
//!
//! Coordinates are 0-indexed with the origin at the top-left. `x` grows to
//! the right and `y` grows downward; `w` and `h` are cell spans and are at
//! least 1 by construction in every layout the engine produces. Coordinates
//! are signed because the engine's upward placement probe transiently visits
//! `y == -1` before settling on a non-negative row.

use serde::{Deserialize, Serialize};

/// A box's placement on the grid, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPosition {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in cells.
    pub w: i32,
    /// Height in cells.
    pub h: i32,
}

impl GridPosition {
    /// Create a new grid position.
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Whether two positions overlap.
    ///
    /// Half-open interval semantics on both axes: positions that merely touch
    /// along an edge do not overlap. This is the sole collision primitive the
    /// layout engine builds on.
    #[inline]
    #[must_use]
    pub const fn overlaps(&self, other: &GridPosition) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }
}

/// Bounding size of a layout, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridSize {
    /// Width in cells.
    pub w: i32,
    /// Height in cells.
    pub h: i32,
}

impl GridSize {
    /// Create a new grid size.
    #[inline]
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

/// Per-box resize bounds, in cells.
///
/// Consumed by the drag/resize target math to clamp requested spans before
/// they reach the placement engine; the engine itself never reads these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeLimits {
    /// Minimum width (cells).
    #[serde(default = "default_min_span")]
    pub min_width: i32,
    /// Minimum height (cells).
    #[serde(default = "default_min_span")]
    pub min_height: i32,
    /// Maximum width (cells); `None` means unbounded.
    #[serde(default)]
    pub max_width: Option<i32>,
    /// Maximum height (cells); `None` means unbounded.
    #[serde(default)]
    pub max_height: Option<i32>,
}

fn default_min_span() -> i32 {
    1
}

impl SizeLimits {
    /// Clamp a requested width into `[min_width, max_width]`.
    #[must_use]
    pub fn clamp_w(&self, w: i32) -> i32 {
        let w = w.max(self.min_width);
        match self.max_width {
            Some(max) => w.min(max),
            None => w,
        }
    }

    /// Clamp a requested height into `[min_height, max_height]`.
    #[must_use]
    pub fn clamp_h(&self, h: i32) -> i32 {
        let h = h.max(self.min_height);
        match self.max_height {
            Some(max) => h.min(max),
            None => h,
        }
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min_width: 1,
            min_height: 1,
            max_width: None,
            max_height: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_exclusive() {
        let p = GridPosition::new(2, 3, 4, 2);
        assert_eq!(p.right(), 6);
        assert_eq!(p.bottom(), 5);
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = GridPosition::new(0, 0, 2, 2);
        let b = GridPosition::new(2, 0, 2, 2);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        let below = GridPosition::new(0, 2, 2, 2);
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn one_cell_intrusion_overlaps() {
        let a = GridPosition::new(0, 0, 2, 2);
        let b = GridPosition::new(1, 0, 2, 2);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn containment_overlaps() {
        let outer = GridPosition::new(0, 0, 10, 10);
        let inner = GridPosition::new(3, 3, 2, 2);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn disjoint_positions_do_not_overlap() {
        let a = GridPosition::new(0, 0, 2, 2);
        let b = GridPosition::new(5, 5, 3, 3);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (GridPosition::new(0, 0, 3, 3), GridPosition::new(2, 2, 3, 3)),
            (GridPosition::new(0, 0, 1, 1), GridPosition::new(0, 0, 1, 1)),
            (GridPosition::new(4, 0, 2, 6), GridPosition::new(0, 4, 6, 2)),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }

    #[test]
    fn size_limits_defaults_are_permissive() {
        let limits = SizeLimits::default();
        assert_eq!(limits.clamp_w(0), 1);
        assert_eq!(limits.clamp_w(999), 999);
        assert_eq!(limits.clamp_h(-5), 1);
    }

    #[test]
    fn size_limits_clamp_both_ends() {
        let limits = SizeLimits {
            min_width: 2,
            min_height: 1,
            max_width: Some(6),
            max_height: Some(4),
        };
        assert_eq!(limits.clamp_w(1), 2);
        assert_eq!(limits.clamp_w(4), 4);
        assert_eq!(limits.clamp_w(10), 6);
        assert_eq!(limits.clamp_h(10), 4);
    }

    #[test]
    fn size_limits_serde_defaults() {
        let limits: SizeLimits = serde_json::from_str("{}").unwrap();
        assert_eq!(limits, SizeLimits::default());

        let limits: SizeLimits = serde_json::from_str(r#"{"max_width": 8}"#).unwrap();
        assert_eq!(limits.min_width, 1);
        assert_eq!(limits.max_width, Some(8));
    }

    #[test]
    fn grid_position_serde_round_trip() {
        let p = GridPosition::new(2, 3, 4, 2);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":2,"y":3,"w":4,"h":2}"#);
        let back: GridPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
