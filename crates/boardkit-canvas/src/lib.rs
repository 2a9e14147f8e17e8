//! # Boardkit Canvas
//!
//! Realizes shape commands on a drawing surface.
//!
//! ## Core Components
//!
//! - **Surface**: the capability a whiteboard exposes ([`DrawingSurface`])
//! - **Descriptors**: the exact shape records the whiteboard expects
//! - **Materializer**: maps commands to descriptors around the viewport centre
//! - **Board**: an in-memory surface with a [`Viewport`]
//! - **Templates**: ready-made boards (flowchart, kanban, ...)
//!
//! ## Architecture
//!
//! ```text
//! Vec<ShapeCommand>
//!   └── Materializer (spacing, offsets, ids)
//!         └── ShapeDescriptor -> DrawingSurface::create_shape
//!
//! TemplateLibrary
//!   └── BoardTemplate::apply -> Materializer
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use boardkit_canvas::{Board, Materializer, Offset};
//! use boardkit_core::ShapeCommand;
//!
//! let mut board = Board::new(1200.0, 600.0);
//! let mut materializer = Materializer::new();
//! let created = materializer.materialize(
//!     &mut board,
//!     &[ShapeCommand::rectangle(10.0, -5.0, 100.0, 80.0)],
//!     Offset::default(),
//! );
//! assert_eq!(created, 1);
//! assert_eq!(board.shapes()[0].x, 620.0);
//! ```

pub mod board;
pub mod descriptor;
pub mod ids;
pub mod materializer;
pub mod surface;
pub mod templates;
pub mod viewport;

pub use board::Board;
pub use descriptor::{
    ArrowProps, Arrowhead, GeoKind, GeoProps, RichText, ShapeDescriptor, ShapeProps, TextProps,
    VecPoint,
};
pub use ids::ShapeIdSequence;
pub use materializer::{
    MaterializeError, MaterializeReport, Materializer, Offset, SPACING_MULTIPLIER,
};
pub use surface::{DrawingSurface, Point};
pub use templates::{BoardTemplate, TemplateCategory, TemplateLibrary};
pub use viewport::{Viewport, MAX_ZOOM, MIN_ZOOM};
