#![forbid(unsafe_code)]

//! Framework-independent primitives for the boxgrid layout engine.
//!
//! This crate holds the geometric vocabulary shared by the layout engine and
//! its hosts: integer grid rectangles ([`geometry::GridPosition`]), bounding
//! sizes, per-box resize bounds, and the cell/pixel metric conversions
//! ([`cell::CellSize`]) used to translate grid coordinates into on-screen
//! geometry for drag feedback.

pub mod cell;
pub mod geometry;

pub use cell::{CellSize, PixelRect, from_pixels, to_pixels};
pub use geometry::{GridPosition, GridSize, SizeLimits};
