//! In-memory board.
//!
//! A [`DrawingSurface`] that keeps created records in creation order, which
//! is also stacking order (later shapes draw on top).

use std::collections::HashMap;

use boardkit_core::{Result, SurfaceError};
use serde_json::{json, Value};

use crate::descriptor::ShapeDescriptor;
use crate::surface::{DrawingSurface, Point};
use crate::viewport::Viewport;

/// Whiteboard state held in memory.
#[derive(Debug, Clone, Default)]
pub struct Board {
    viewport: Viewport,
    shapes: Vec<ShapeDescriptor>,
    index: HashMap<String, usize>,
}

impl Board {
    /// Creates an empty board with a viewport of the given screen size.
    pub fn new(screen_width: f64, screen_height: f64) -> Self {
        Self::with_viewport(Viewport::new(screen_width, screen_height))
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            shapes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Shapes in creation order.
    pub fn shapes(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }

    /// Looks a shape up by id.
    pub fn shape(&self, id: &str) -> Option<&ShapeDescriptor> {
        self.index.get(id).map(|&i| &self.shapes[i])
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Removes every shape; the viewport is kept.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.index.clear();
    }

    /// Board contents as a JSON value: viewport plus shapes in order.
    ///
    /// `pageCenter` is the visible centre in page coordinates, which differs
    /// from the screen centre shapes are anchored to once the view is panned
    /// or zoomed.
    pub fn snapshot(&self) -> Result<Value> {
        let page_center = self.viewport.page_center();
        Ok(json!({
            "viewport": {
                "width": self.viewport.screen_width(),
                "height": self.viewport.screen_height(),
                "zoom": self.viewport.zoom(),
                "panX": self.viewport.pan_x(),
                "panY": self.viewport.pan_y(),
                "pageCenter": { "x": page_center.x, "y": page_center.y },
            },
            "shapes": serde_json::to_value(&self.shapes)?,
        }))
    }

    /// Pretty-printed [`Board::snapshot`].
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot()?)?)
    }
}

impl DrawingSurface for Board {
    fn create_shape(&mut self, descriptor: ShapeDescriptor) -> std::result::Result<(), SurfaceError> {
        if self.index.contains_key(&descriptor.id) {
            return Err(SurfaceError::DuplicateId { id: descriptor.id });
        }
        self.index.insert(descriptor.id.clone(), self.shapes.len());
        self.shapes.push(descriptor);
        Ok(())
    }

    fn viewport_screen_center(&self) -> Point {
        self.viewport.screen_center()
    }
}
