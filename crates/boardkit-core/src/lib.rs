//! # Boardkit Core
//!
//! Core types shared by every Boardkit crate:
//! - [`ShapeCommand`]: the validated description of one primitive to draw
//! - [`ShapeKind`]: the kinds of primitives a board understands
//! - Per-kind defaults and the colour palette
//! - Error types used at the drawing-surface boundary

pub mod error;
pub mod shape;

pub use error::{Error, Result, SurfaceError};
pub use shape::{
    default_size, is_palette_color, ShapeCommand, ShapeKind, DEFAULT_COLOR, PALETTE,
};
