#![forbid(unsafe_code)]

//! Opt-in layout validation and deterministic state hashing.
//!
//! The engine itself is permissive: it assumes well-formed input and defines
//! no error path. Hosts that persist layouts or accept them from outside can
//! call [`GridLayout::validate`] before trusting one, and use
//! [`GridLayout::state_hash`] to diff or replay layout state cheaply.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashSet, FxHasher};

use crate::engine::GridLayout;

/// A structural defect found in a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Two boxes share an id. Reported by index into the sequence.
    DuplicateBoxId { first: usize, second: usize },
    /// A box has a non-positive width or height.
    InvalidSpan { index: usize, w: i32, h: i32 },
    /// A box sits above or left of the grid origin.
    NegativeOrigin { index: usize, x: i32, y: i32 },
    /// Two visible boxes occupy overlapping cells.
    Overlap { first: usize, second: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateBoxId { first, second } => {
                write!(f, "boxes {first} and {second} share an id")
            }
            Self::InvalidSpan { index, w, h } => {
                write!(f, "box {index} has non-positive span {w}x{h}")
            }
            Self::NegativeOrigin { index, x, y } => {
                write!(f, "box {index} sits outside the grid at ({x}, {y})")
            }
            Self::Overlap { first, second } => {
                write!(f, "visible boxes {first} and {second} overlap")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

impl<I: Clone + PartialEq + Eq + Hash> GridLayout<I> {
    /// Check structural invariants: unique ids, positive spans, non-negative
    /// origins, and no overlap between visible boxes.
    ///
    /// Returns the first defect in sequence order.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let boxes = self.boxes();

        let mut seen: FxHashSet<&I> = FxHashSet::default();
        for (index, bx) in boxes.iter().enumerate() {
            if !seen.insert(&bx.id) {
                let first = boxes
                    .iter()
                    .position(|other| other.id == bx.id)
                    .unwrap_or(index);
                return Err(LayoutError::DuplicateBoxId {
                    first,
                    second: index,
                });
            }
            if bx.position.w < 1 || bx.position.h < 1 {
                return Err(LayoutError::InvalidSpan {
                    index,
                    w: bx.position.w,
                    h: bx.position.h,
                });
            }
            if bx.position.x < 0 || bx.position.y < 0 {
                return Err(LayoutError::NegativeOrigin {
                    index,
                    x: bx.position.x,
                    y: bx.position.y,
                });
            }
        }

        for (i, a) in boxes.iter().enumerate() {
            if a.hidden {
                continue;
            }
            for (j, b) in boxes.iter().enumerate().skip(i + 1) {
                if b.hidden {
                    continue;
                }
                if a.position.overlaps(&b.position) {
                    return Err(LayoutError::Overlap { first: i, second: j });
                }
            }
        }

        Ok(())
    }

    /// Deterministic hash over the canonically sorted layout.
    ///
    /// Equal layouts (up to ordering) hash equal; useful for replay/diff
    /// diagnostics without serializing the whole sequence.
    #[must_use]
    pub fn state_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        let sorted = self.sorted();
        for bx in sorted.iter() {
            bx.id.hash(&mut hasher);
            bx.hidden.hash(&mut hasher);
            bx.pinned.hash(&mut hasher);
            bx.position.hash(&mut hasher);
        }
        hasher.finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
