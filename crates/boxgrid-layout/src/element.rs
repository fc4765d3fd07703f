#![forbid(unsafe_code)]

//! Box records and partial updates.
//!
//! A [`GridBox`] is one rectangular unit placed on the grid. Boxes are plain
//! data: the engine never mutates one in place, it derives new records via
//! [`GridBox::apply`]. The id type is generic so hosts can key boxes however
//! they like (integers, strings, UUIDs); the engine only ever compares ids
//! for equality.
//!
//! [`BoxPatch`] is the partial-update shape accepted by `update_box` and
//! `create_box`. It deliberately has no id field: a box's id can never be
//! changed by a merge.

use serde::{Deserialize, Serialize};

use boxgrid_core::geometry::{GridPosition, SizeLimits};

/// One rectangular unit placed on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridBox<I> {
    /// Host-supplied identifier. Uniqueness within a layout is assumed, not
    /// enforced; see `GridLayout::validate` for the opt-in check.
    pub id: I,
    /// Hidden boxes keep their slot in the sequence but are excluded from
    /// collision checks and bounding-size computation.
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
    /// Pinned boxes are exempt from automatic repositioning.
    #[serde(default, skip_serializing_if = "is_false")]
    pub pinned: bool,
    /// Capability flag for the host's resize affordance; not read by the
    /// placement engine.
    #[serde(default = "default_true")]
    pub resizable: bool,
    /// Capability flag for the host's drag affordance; not read by the
    /// placement engine.
    #[serde(default = "default_true")]
    pub draggable: bool,
    /// Current placement.
    pub position: GridPosition,
    /// Resize bounds consumed by the drag/resize target math.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_limits: Option<SizeLimits>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn default_true() -> bool {
    true
}

impl<I> GridBox<I> {
    /// Create a visible, unpinned 1x1 box at the origin.
    pub fn new(id: I) -> Self {
        Self {
            id,
            hidden: false,
            pinned: false,
            resizable: true,
            draggable: true,
            position: GridPosition::new(0, 0, 1, 1),
            resize_limits: None,
        }
    }

    /// Set the placement (builder pattern).
    #[must_use]
    pub fn with_position(mut self, position: GridPosition) -> Self {
        self.position = position;
        self
    }

    /// Merge a partial update into this box, returning the merged record.
    ///
    /// Top-level fields overwrite when present; the position merges
    /// key-by-key, so a patch touching only `w` leaves `x`, `y`, `h` intact.
    /// The id always survives untouched.
    #[must_use]
    pub fn apply(mut self, patch: &BoxPatch) -> Self {
        if let Some(hidden) = patch.hidden {
            self.hidden = hidden;
        }
        if let Some(pinned) = patch.pinned {
            self.pinned = pinned;
        }
        if let Some(resizable) = patch.resizable {
            self.resizable = resizable;
        }
        if let Some(draggable) = patch.draggable {
            self.draggable = draggable;
        }
        if let Some(ref position) = patch.position {
            self.position = position.merge_into(self.position);
        }
        if let Some(ref limits) = patch.resize_limits {
            self.resize_limits = Some(*limits);
        }
        self
    }
}

/// Partial update for a [`GridBox`]. Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoxPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resizable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_limits: Option<SizeLimits>,
}

impl BoxPatch {
    /// Patch that replaces the whole position.
    #[must_use]
    pub fn position(position: GridPosition) -> Self {
        Self {
            position: Some(PositionPatch::from(position)),
            ..Self::default()
        }
    }
}

/// Partial update for a [`GridPosition`]. Absent components are left
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PositionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<i32>,
}

impl PositionPatch {
    /// Apply this patch on top of a base position.
    #[must_use]
    pub fn merge_into(&self, base: GridPosition) -> GridPosition {
        GridPosition {
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            w: self.w.unwrap_or(base.w),
            h: self.h.unwrap_or(base.h),
        }
    }
}

impl From<GridPosition> for PositionPatch {
    fn from(position: GridPosition) -> Self {
        Self {
            x: Some(position.x),
            y: Some(position.y),
            w: Some(position.w),
            h: Some(position.h),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
