#![forbid(unsafe_code)]

//! A collision-free, deterministically ordered dashboard grid layout engine.
//!
//! The engine maintains an arrangement of rectangular boxes on an integer
//! grid: insertion, removal, updates, collision resolution with optional
//! upward compaction ("bubble up"), and cell/pixel coordinate conversion for
//! drag feedback. It is pure data transformation (no rendering, no event
//! capture, no I/O), designed so a reactive host can treat every returned
//! [`GridLayout`] as its new source of truth.
//!
//! ```
//! use boxgrid_layout::{GridBox, GridLayout, GridPosition, LayoutOptions};
//!
//! let layout = GridLayout::new()
//!     .add_box(
//!         GridBox::new("chart").with_position(GridPosition::new(0, 0, 2, 2)),
//!         LayoutOptions::BUBBLE_UP,
//!     )
//!     .add_box(
//!         GridBox::new("table").with_position(GridPosition::new(0, 0, 2, 2)),
//!         LayoutOptions::BUBBLE_UP,
//!     );
//!
//! // The second box settled below the first; nothing overlaps.
//! assert_eq!(layout.get(&"table").unwrap().position.y, 2);
//! assert!(layout.validate().is_ok());
//! ```

pub mod element;
pub mod engine;
pub mod interaction;
pub mod validate;

pub use boxgrid_core::cell::{CellSize, PixelRect, from_pixels, to_pixels};
pub use boxgrid_core::geometry::{GridPosition, GridSize, SizeLimits};
pub use element::{BoxPatch, GridBox, PositionPatch};
pub use engine::{BubbleUp, GridLayout, LayoutOptions};
pub use interaction::{ResizeHandle, drag_delta, resize_delta, target_position};
pub use validate::LayoutError;
