#![forbid(unsafe_code)]

//! Pointer-to-grid target math for drag and resize gestures.
//!
//! The host's event layer owns pointer capture; what it needs from the engine
//! is arithmetic: given a gesture's pixel offset and the box's placement when
//! the gesture started, which grid position is the user asking for? The host
//! feeds the answer into [`GridLayout::update_box`](crate::GridLayout::update_box)
//! on every pointer move, relying on the engine's no-op short-circuit to keep
//! repeated identical targets cheap.
//!
//! Offsets are expressed as a [`PixelRect`] delta: dragging moves `x`/`y`,
//! resizing grows or shrinks `w`/`h` (and moves the origin for top/left
//! handles). Placement snaps to the nearest cell by adding half a cell to
//! each component before flooring.

use serde::{Deserialize, Serialize};

use boxgrid_core::cell::{CellSize, PixelRect, from_pixels};
use boxgrid_core::geometry::{GridPosition, SizeLimits};

/// The eight compass resize handles of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    T,
    Tr,
    R,
    Br,
    B,
    Bl,
    L,
    Tl,
}

impl ResizeHandle {
    /// Whether this handle moves the top edge.
    #[must_use]
    pub const fn grabs_top(self) -> bool {
        matches!(self, Self::T | Self::Tr | Self::Tl)
    }

    /// Whether this handle moves the bottom edge.
    #[must_use]
    pub const fn grabs_bottom(self) -> bool {
        matches!(self, Self::B | Self::Br | Self::Bl)
    }

    /// Whether this handle moves the left edge.
    #[must_use]
    pub const fn grabs_left(self) -> bool {
        matches!(self, Self::L | Self::Tl | Self::Bl)
    }

    /// Whether this handle moves the right edge.
    #[must_use]
    pub const fn grabs_right(self) -> bool {
        matches!(self, Self::R | Self::Tr | Self::Br)
    }
}

/// Pixel delta for a drag gesture: the whole box translates.
#[must_use]
pub const fn drag_delta(dx: i32, dy: i32) -> PixelRect {
    PixelRect::new(dx, dy, 0, 0)
}

/// Pixel delta for a resize gesture on the given handle.
///
/// Top and left handles move the origin and shrink the span by the same
/// amount, so the opposite edge stays put.
#[must_use]
pub const fn resize_delta(handle: ResizeHandle, dx: i32, dy: i32) -> PixelRect {
    let mut delta = PixelRect::new(0, 0, 0, 0);
    if handle.grabs_top() {
        delta.y = dy;
        delta.h = -dy;
    } else if handle.grabs_bottom() {
        delta.h = dy;
    }
    if handle.grabs_left() {
        delta.x = dx;
        delta.w = -dx;
    } else if handle.grabs_right() {
        delta.w = dx;
    }
    delta
}

/// Resolve a gesture into the grid position the user is asking for.
///
/// Adds half a cell to each delta component (nearest-cell snap), converts to
/// grid cells, applies the result on top of `base`, then clamps: the origin
/// to non-negative rows/columns, the span into `limits` (defaults: minimum
/// 1x1, no maximum).
#[must_use]
pub fn target_position(
    base: &GridPosition,
    delta: &PixelRect,
    cell: &CellSize,
    limits: Option<&SizeLimits>,
) -> GridPosition {
    let half_w = cell.width / 2;
    let half_h = cell.height / 2;
    let snapped = from_pixels(
        &PixelRect::new(
            delta.x + half_w,
            delta.y + half_h,
            delta.w + half_w,
            delta.h + half_h,
        ),
        cell,
    );
    let limits = limits.copied().unwrap_or_default();
    GridPosition {
        x: (snapped.x + base.x).max(0),
        y: (snapped.y + base.y).max(0),
        w: limits.clamp_w(snapped.w + base.w),
        h: limits.clamp_h(snapped.h + base.h),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: CellSize = CellSize::new(10, 10);

    fn base() -> GridPosition {
        GridPosition::new(2, 3, 2, 2)
    }

    #[test]
    fn zero_delta_targets_the_base_position() {
        let target = target_position(&base(), &drag_delta(0, 0), &CELL, None);
        assert_eq!(target, base());
    }

    #[test]
    fn drag_snaps_to_nearest_cell() {
        // Less than half a cell: stay.
        let target = target_position(&base(), &drag_delta(4, 4), &CELL, None);
        assert_eq!((target.x, target.y), (2, 3));

        // Half a cell or more: advance one column/row.
        let target = target_position(&base(), &drag_delta(5, 5), &CELL, None);
        assert_eq!((target.x, target.y), (3, 4));
    }

    #[test]
    fn drag_left_and_up_rounds_toward_previous_cell() {
        let target = target_position(&base(), &drag_delta(-6, -6), &CELL, None);
        assert_eq!((target.x, target.y), (1, 2));

        // A small negative offset stays put.
        let target = target_position(&base(), &drag_delta(-4, -4), &CELL, None);
        assert_eq!((target.x, target.y), (2, 3));
    }

    #[test]
    fn drag_clamps_origin_to_grid() {
        let target = target_position(&base(), &drag_delta(-1000, -1000), &CELL, None);
        assert_eq!((target.x, target.y), (0, 0));
        assert_eq!((target.w, target.h), (2, 2));
    }

    #[test]
    fn drag_never_changes_span() {
        let target = target_position(&base(), &drag_delta(37, -23), &CELL, None);
        assert_eq!((target.w, target.h), (2, 2));
    }

    #[test]
    fn resize_bottom_right_grows_span_only() {
        let delta = resize_delta(ResizeHandle::Br, 15, 5);
        assert_eq!(delta, PixelRect::new(0, 0, 15, 5));

        let target = target_position(&base(), &delta, &CELL, None);
        assert_eq!((target.x, target.y), (2, 3));
        assert_eq!((target.w, target.h), (4, 3));
    }

    #[test]
    fn resize_top_left_moves_origin_and_shrinks_span() {
        let delta = resize_delta(ResizeHandle::Tl, 10, 10);
        assert_eq!(delta, PixelRect::new(10, 10, -10, -10));

        let target = target_position(&base(), &delta, &CELL, None);
        assert_eq!((target.x, target.y), (3, 4));
        assert_eq!((target.w, target.h), (1, 1));
    }

    #[test]
    fn resize_single_edge_handles() {
        assert_eq!(resize_delta(ResizeHandle::T, 7, 9), PixelRect::new(0, 9, 0, -9));
        assert_eq!(resize_delta(ResizeHandle::B, 7, 9), PixelRect::new(0, 0, 0, 9));
        assert_eq!(resize_delta(ResizeHandle::L, 7, 9), PixelRect::new(7, 0, -7, 0));
        assert_eq!(resize_delta(ResizeHandle::R, 7, 9), PixelRect::new(0, 0, 7, 0));
    }

    #[test]
    fn resize_never_shrinks_below_one_cell() {
        let delta = resize_delta(ResizeHandle::Br, -1000, -1000);
        let target = target_position(&base(), &delta, &CELL, None);
        assert_eq!((target.w, target.h), (1, 1));
    }

    #[test]
    fn resize_respects_size_limits() {
        let limits = SizeLimits {
            min_width: 2,
            min_height: 2,
            max_width: Some(3),
            max_height: Some(3),
        };
        let grow = resize_delta(ResizeHandle::Br, 1000, 1000);
        let target = target_position(&base(), &grow, &CELL, Some(&limits));
        assert_eq!((target.w, target.h), (3, 3));

        let shrink = resize_delta(ResizeHandle::Br, -1000, -1000);
        let target = target_position(&base(), &shrink, &CELL, Some(&limits));
        assert_eq!((target.w, target.h), (2, 2));
    }

    #[test]
    fn spacing_uses_half_cell_not_half_pitch() {
        let cell = CellSize::new(80, 40).with_spacing(8);
        // 40px is half the 80px cell: with the snap offset this reaches the
        // next column boundary at pitch 88 only when offset + 40 >= 88.
        let target = target_position(&base(), &drag_delta(47, 0), &cell, None);
        assert_eq!(target.x, 2);
        let target = target_position(&base(), &drag_delta(48, 0), &cell, None);
        assert_eq!(target.x, 3);
    }

    #[test]
    fn handle_edge_queries() {
        assert!(ResizeHandle::Tl.grabs_top());
        assert!(ResizeHandle::Tl.grabs_left());
        assert!(!ResizeHandle::Tl.grabs_bottom());
        assert!(!ResizeHandle::Tl.grabs_right());
        assert!(ResizeHandle::Br.grabs_bottom());
        assert!(ResizeHandle::Br.grabs_right());
    }

    #[test]
    fn handle_serde_names() {
        assert_eq!(serde_json::to_string(&ResizeHandle::Br).unwrap(), r#""br""#);
        let h: ResizeHandle = serde_json::from_str(r#""tl""#).unwrap();
        assert_eq!(h, ResizeHandle::Tl);
    }
}
