#![forbid(unsafe_code)]

//! The placement engine: collision-free, deterministically ordered layouts.
//!
//! A [`GridLayout`] is an ordered sequence of boxes, semantically a set keyed
//! by id. Every operation is pure: it borrows the layout and returns a new
//! one, so hosts can use value comparison (or cheap no-op short-circuits) to
//! skip redundant re-renders. The engine holds no state between calls.
//!
//! # Invariants
//!
//! 1. After any mutating operation, no two visible boxes overlap.
//! 2. Pinned boxes never move unless directly targeted by [`GridLayout::update_box`].
//! 3. [`GridLayout::sorted`] is stable and idempotent: hidden boxes after
//!    visible ones, then ascending `y`, then ascending `x`.
//! 4. [`GridLayout::fix`] is idempotent on an already sorted, bubble-stable
//!    layout.
//! 5. Operations targeting an unknown id (and inserts of a duplicate id)
//!    return the layout unchanged.
//!
//! # Failure Modes
//!
//! None. The engine defines no error path. Malformed layouts (duplicate
//! ids, non-positive spans) are not rejected here; see
//! [`GridLayout::validate`](crate::validate) for the opt-in checker.

use serde::{Deserialize, Serialize};

use crate::element::{BoxPatch, GridBox};
use boxgrid_core::geometry::{GridPosition, GridSize};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Upward-compaction policy applied after a placement change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BubbleUp {
    /// Boxes stay where collision resolution leaves them.
    #[default]
    Off,
    /// Boxes creep upward from their current row until a blocking row.
    Up,
    /// Boxes jump to the top row first, then settle downward past blockers.
    JumpOver,
}

impl BubbleUp {
    /// Whether any upward compaction is requested.
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, BubbleUp::Off)
    }
}

/// Per-call placement policy. Not persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Upward-compaction policy.
    #[serde(default)]
    pub bubble_up: BubbleUp,
}

impl LayoutOptions {
    /// No compaction; collisions still resolve downward.
    pub const NONE: Self = Self {
        bubble_up: BubbleUp::Off,
    };

    /// Creep upward after placement changes.
    pub const BUBBLE_UP: Self = Self {
        bubble_up: BubbleUp::Up,
    };

    /// Probe from the top row after placement changes.
    pub const JUMP_OVER: Self = Self {
        bubble_up: BubbleUp::JumpOver,
    };
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// An ordered collection of boxes for one grid instance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridLayout<I> {
    boxes: Vec<GridBox<I>>,
}

impl<I> GridLayout<I> {
    /// Create an empty layout.
    #[must_use]
    pub const fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Number of boxes, hidden included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the layout holds no boxes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The boxes in their current order.
    #[must_use]
    pub fn boxes(&self) -> &[GridBox<I>] {
        &self.boxes
    }

    /// Iterate the boxes in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &GridBox<I>> {
        self.boxes.iter()
    }

    /// Consume the layout, yielding its boxes.
    #[must_use]
    pub fn into_boxes(self) -> Vec<GridBox<I>> {
        self.boxes
    }

    /// Minimal bounding size covering all visible boxes.
    ///
    /// `{0, 0}` for an empty or fully hidden layout.
    #[must_use]
    pub fn size(&self) -> GridSize {
        let mut size = GridSize::default();
        for bx in self.boxes.iter().filter(|bx| !bx.hidden) {
            size.w = size.w.max(bx.position.right());
            size.h = size.h.max(bx.position.bottom());
        }
        size
    }

    /// Whether no box passing `filter` occupies any cell of `position`.
    ///
    /// Hidden boxes never collide regardless of the filter.
    #[must_use]
    pub fn is_free_where(
        &self,
        position: &GridPosition,
        filter: impl Fn(&GridBox<I>) -> bool,
    ) -> bool {
        is_free_where(&self.boxes, position, filter)
    }

    /// Whether no box occupies any cell of `position`.
    #[must_use]
    pub fn is_free(&self, position: &GridPosition) -> bool {
        self.is_free_where(position, |_| true)
    }
}

impl<I> From<Vec<GridBox<I>>> for GridLayout<I> {
    fn from(boxes: Vec<GridBox<I>>) -> Self {
        Self { boxes }
    }
}

impl<I> FromIterator<GridBox<I>> for GridLayout<I> {
    fn from_iter<T: IntoIterator<Item = GridBox<I>>>(iter: T) -> Self {
        Self {
            boxes: iter.into_iter().collect(),
        }
    }
}

impl<I: Clone + PartialEq> GridLayout<I> {
    /// The box with the given id, if present. First match wins.
    #[must_use]
    pub fn get(&self, id: &I) -> Option<&GridBox<I>> {
        self.boxes.iter().find(|bx| bx.id == *id)
    }

    fn index_of(&self, id: &I) -> Option<usize> {
        self.boxes.iter().position(|bx| bx.id == *id)
    }

    /// A new layout in canonical order.
    ///
    /// Stable sort: hidden boxes after visible ones, then ascending `y`,
    /// then ascending `x`. This is both the rendering order and the
    /// deterministic iteration order of the placement pass.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut boxes = self.boxes.clone();
        sort_boxes(&mut boxes);
        Self { boxes }
    }

    /// Move a box to the nearest free vertical slot.
    ///
    /// Pinned boxes are returned untouched. Otherwise, with bubbling enabled
    /// and the box below the top row, the position first creeps upward past
    /// free rows (jump-over probes from the top row instead); then the
    /// mandatory collision step pushes the box downward until it clears all
    /// other boxes. When no repositioning occurs the input box is returned
    /// as-is.
    #[must_use]
    pub fn move_to_free_place(&self, bx: GridBox<I>, options: LayoutOptions) -> GridBox<I> {
        move_to_free_place(&self.boxes, bx, options)
    }

    /// Normalize the layout: sort, and when bubbling, compact every box in a
    /// single forward pass.
    ///
    /// Each box in the pass sees its predecessors' already-adjusted
    /// placements, which is what makes compaction deterministic.
    #[must_use]
    pub fn fix(&self, options: LayoutOptions) -> Self {
        let mut boxes = self.boxes.clone();
        sort_boxes(&mut boxes);
        if options.bubble_up.is_enabled() {
            for index in 0..boxes.len() {
                let moved = move_to_free_place(&boxes, boxes[index].clone(), options);
                boxes[index] = moved;
            }
            sort_boxes(&mut boxes);
        }
        Self { boxes }
    }

    /// Build a box for this layout without inserting it.
    ///
    /// Starts from a default 1x1 box at the origin, applies `patch`, then
    /// moves the result to a free place against the current layout. Pair
    /// with [`GridLayout::add_box`] to insert.
    #[must_use]
    pub fn create_box(&self, id: I, patch: Option<&BoxPatch>, options: LayoutOptions) -> GridBox<I> {
        let mut bx = GridBox::new(id);
        if let Some(patch) = patch {
            bx = bx.apply(patch);
        }
        self.move_to_free_place(bx, options)
    }

    /// Insert a box, re-flowing non-pinned boxes around it.
    ///
    /// Returns the layout unchanged when a box with the same id already
    /// exists. The incoming box is first moved to a free place against the
    /// current layout, so an insert lands below existing boxes instead of
    /// displacing them.
    #[must_use]
    pub fn add_box(&self, bx: GridBox<I>, options: LayoutOptions) -> Self {
        if self.get(&bx.id).is_some() {
            return self.clone();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(boxes = self.len(), "adding box");
        let bx = self.move_to_free_place(bx, options);
        self.place_box(bx, options)
    }

    /// Merge a patch into the box with the given id and re-place it.
    ///
    /// Returns the layout unchanged when the id is absent.
    #[must_use]
    pub fn update_box(&self, id: &I, patch: &BoxPatch, options: LayoutOptions) -> Self {
        let Some(bx) = self.get(id) else {
            return self.clone();
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(boxes = self.len(), "updating box");
        self.place_box(bx.clone().apply(patch), options)
    }

    /// Remove the box with the given id and normalize the remainder.
    ///
    /// Returns the layout unchanged when the id is absent.
    #[must_use]
    pub fn remove_box(&self, id: &I, options: LayoutOptions) -> Self {
        let Some(index) = self.index_of(id) else {
            return self.clone();
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(boxes = self.len(), "removing box");
        let mut boxes = self.boxes.clone();
        boxes.remove(index);
        Self { boxes }.fix(options)
    }

    /// Shared engine for insert and update.
    ///
    /// Seeds a new layout with the *other* pinned boxes, settles the target
    /// box against them, then re-flows every other non-pinned box in
    /// canonical order against the growing layout. Re-deriving all non-pinned
    /// placements on every mutation is what keeps the whole layout
    /// collision-free, at O(n^2) worst case per call.
    fn place_box(&self, bx: GridBox<I>, options: LayoutOptions) -> Self {
        let id = bx.id.clone();
        let mut boxes: Vec<GridBox<I>> = self
            .boxes
            .iter()
            .filter(|other| other.id != id && other.pinned)
            .cloned()
            .collect();

        // The target settles against pinned boxes only, and without the
        // caller's bubble policy: compaction happens in the final fix pass.
        let bx = move_to_free_place(&boxes, bx, LayoutOptions::NONE);
        boxes.push(bx);

        let mut others = self.boxes.clone();
        sort_boxes(&mut others);
        for other in others {
            if other.id == id || other.pinned {
                continue;
            }
            let moved = move_to_free_place(&boxes, other, LayoutOptions::NONE);
            boxes.push(moved);
        }

        Self { boxes }.fix(options)
    }
}

// ---------------------------------------------------------------------------
// Placement internals
// ---------------------------------------------------------------------------

fn sort_boxes<I>(boxes: &mut [GridBox<I>]) {
    boxes.sort_by(|a, b| {
        // `false < true` puts visible boxes first.
        a.hidden
            .cmp(&b.hidden)
            .then_with(|| a.position.y.cmp(&b.position.y))
            .then_with(|| a.position.x.cmp(&b.position.x))
    });
}

fn is_free_where<I>(
    boxes: &[GridBox<I>],
    position: &GridPosition,
    filter: impl Fn(&GridBox<I>) -> bool,
) -> bool {
    boxes
        .iter()
        .filter(|bx| !bx.hidden && filter(bx))
        .all(|bx| !bx.position.overlaps(position))
}

fn move_to_free_place<I: Clone + PartialEq>(
    boxes: &[GridBox<I>],
    bx: GridBox<I>,
    options: LayoutOptions,
) -> GridBox<I> {
    if bx.pinned {
        return bx;
    }
    let mut position = bx.position;
    let initial_y = position.y;

    if options.bubble_up.is_enabled() && position.y > 0 {
        if options.bubble_up == BubbleUp::JumpOver {
            position.y = 0;
        }

        // Probe upward past free rows. The first decrement is unconditional;
        // the increment afterwards restores the topmost row that was still
        // free (or the starting row when the row above is blocked).
        loop {
            position.y -= 1;
            if position.y < 0 || !is_free_where(boxes, &position, |other| other.id != bx.id) {
                break;
            }
        }
        position.y += 1;
    }

    // Mandatory collision resolution: push downward until clear.
    while !is_free_where(boxes, &position, |other| other.id != bx.id) {
        position.y += 1;
    }

    if position.y == initial_y {
        return bx;
    }

    let mut bx = bx;
    bx.position = position;
    bx
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
