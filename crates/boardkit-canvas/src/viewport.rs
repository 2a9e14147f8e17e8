//! Viewport and coordinate transformation for the board.
//!
//! Converts between screen coordinates (pixels, origin at the top-left of the
//! visible area) and page coordinates (the board's own space). Both spaces
//! have +Y pointing down.

use std::fmt;

use crate::surface::Point;

/// Lower zoom bound (exclusive).
pub const MIN_ZOOM: f64 = 0.1;

/// Upper zoom bound (exclusive).
pub const MAX_ZOOM: f64 = 50.0;

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    screen_width: f64,
    screen_height: f64,
}

impl Viewport {
    /// Creates a viewport of the given screen size, unzoomed, with the page
    /// origin at the top-left corner.
    pub fn new(screen_width: f64, screen_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            screen_width,
            screen_height,
        }
    }

    /// Gets the screen width.
    pub fn screen_width(&self) -> f64 {
        self.screen_width
    }

    /// Gets the screen height.
    pub fn screen_height(&self) -> f64 {
        self.screen_height
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level; values outside `(MIN_ZOOM, MAX_ZOOM)` are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > MIN_ZOOM && zoom < MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Centre of the visible area in screen coordinates.
    pub fn screen_center(&self) -> Point {
        Point::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Converts screen coordinates to page coordinates.
    ///
    /// ```text
    /// page_x = (screen_x - pan_x) / zoom
    /// page_y = (screen_y - pan_y) / zoom
    /// ```
    pub fn screen_to_page(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan_x) / self.zoom,
            (screen.y - self.pan_y) / self.zoom,
        )
    }

    /// Centre of the visible area in page coordinates.
    pub fn page_center(&self) -> Point {
        self.screen_to_page(self.screen_center())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 600.0)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} @ {:.0}% pan ({:.1}, {:.1})",
            self.screen_width,
            self.screen_height,
            self.zoom * 100.0,
            self.pan_x,
            self.pan_y
        )
    }
}
