//! The drawing-surface capability.

use crate::descriptor::ShapeDescriptor;
use boardkit_core::SurfaceError;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A point in screen or page space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

/// A whiteboard that owns shapes and viewport geometry.
///
/// Implementations are driven sequentially: the materializer holds `&mut`
/// for the whole call and never locks anything itself.
pub trait DrawingSurface {
    /// Creates one shape from a fully-formed descriptor.
    fn create_shape(&mut self, descriptor: ShapeDescriptor) -> Result<(), SurfaceError>;

    /// Centre of the visible viewport, in screen coordinates.
    fn viewport_screen_center(&self) -> Point;
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn create_shape(&mut self, descriptor: ShapeDescriptor) -> Result<(), SurfaceError> {
        (**self).create_shape(descriptor)
    }

    fn viewport_screen_center(&self) -> Point {
        (**self).viewport_screen_center()
    }
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for Box<S> {
    fn create_shape(&mut self, descriptor: ShapeDescriptor) -> Result<(), SurfaceError> {
        (**self).create_shape(descriptor)
    }

    fn viewport_screen_center(&self) -> Point {
        (**self).viewport_screen_center()
    }
}
