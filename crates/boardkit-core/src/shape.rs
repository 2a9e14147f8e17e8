//! Shape command model.
//!
//! A [`ShapeCommand`] is what the assistant hands to the canvas: a kind, a
//! relative anchor and the optional extents, text, colour and end point the
//! kind needs. Coordinates are relative to wherever the board decides to
//! place them; they are never absolute canvas positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour used when a command does not name one.
pub const DEFAULT_COLOR: &str = "black";

/// Named colours the board renders natively.
///
/// The palette is open: commands may carry other names and the board decides
/// how to render them.
pub const PALETTE: &[&str] = &[
    "black",
    "grey",
    "light-violet",
    "violet",
    "blue",
    "light-blue",
    "yellow",
    "orange",
    "green",
    "light-green",
    "light-red",
    "red",
    "white",
];

/// Returns true if `color` is one of the natively rendered [`PALETTE`] names.
pub fn is_palette_color(color: &str) -> bool {
    PALETTE.contains(&color)
}

/// Kinds of primitives a shape command can describe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Line,
    Arrow,
    Text,
    /// Any kind the board does not know how to draw. Kept so callers can see
    /// what was asked for; the materializer skips it.
    Other(String),
}

impl ShapeKind {
    /// Parse a kind name. Matching ignores surrounding whitespace and case.
    pub fn parse(s: &str) -> Self {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "rectangle" => ShapeKind::Rectangle,
            "ellipse" => ShapeKind::Ellipse,
            "line" => ShapeKind::Line,
            "arrow" => ShapeKind::Arrow,
            "text" => ShapeKind::Text,
            _ => ShapeKind::Other(name),
        }
    }

    /// Get kind as string
    pub fn as_str(&self) -> &str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Line => "line",
            ShapeKind::Arrow => "arrow",
            ShapeKind::Text => "text",
            ShapeKind::Other(name) => name,
        }
    }

    /// Lines and arrows are drawn as connectors between two points.
    pub fn is_connector(&self) -> bool {
        matches!(self, ShapeKind::Line | ShapeKind::Arrow)
    }

    /// Whether the board knows how to draw this kind.
    pub fn is_known(&self) -> bool {
        !matches!(self, ShapeKind::Other(_))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ShapeKind {
    fn from(s: String) -> Self {
        ShapeKind::parse(&s)
    }
}

impl From<ShapeKind> for String {
    fn from(kind: ShapeKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Default `(width, height)` for a kind when the command leaves them unset.
pub fn default_size(kind: &ShapeKind) -> (f64, f64) {
    match kind {
        ShapeKind::Ellipse => (80.0, 80.0),
        _ => (100.0, 80.0),
    }
}

/// One validated primitive to draw.
///
/// Serializes with the same field names the assistant asks models to emit
/// (`type`, `endX`, `endY`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeCommand {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_y: Option<f64>,
}

impl ShapeCommand {
    /// Creates a command of `kind` at `(x, y)` with the kind's defaults.
    pub fn new(kind: ShapeKind, x: f64, y: f64) -> Self {
        let (width, height) = default_size(&kind);
        Self {
            kind,
            x,
            y,
            width,
            height,
            text: String::new(),
            color: DEFAULT_COLOR.to_string(),
            end_x: None,
            end_y: None,
        }
    }

    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ShapeKind::Rectangle, x, y).with_size(width, height)
    }

    pub fn ellipse(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(ShapeKind::Ellipse, x, y).with_size(width, height)
    }

    pub fn text(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self::new(ShapeKind::Text, x, y).with_text(text)
    }

    /// Arrow from `(x, y)` to `(x + end_x, y + end_y)`.
    pub fn arrow(x: f64, y: f64, end_x: f64, end_y: f64) -> Self {
        Self::new(ShapeKind::Arrow, x, y).with_end(end_x, end_y)
    }

    /// Line from `(x, y)` to `(x + end_x, y + end_y)`.
    pub fn line(x: f64, y: f64, end_x: f64, end_y: f64) -> Self {
        Self::new(ShapeKind::Line, x, y).with_end(end_x, end_y)
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_end(mut self, end_x: f64, end_y: f64) -> Self {
        self.end_x = Some(end_x);
        self.end_y = Some(end_y);
        self
    }

    /// Connector end point relative to the anchor.
    ///
    /// Falls back to the width along X and to zero along Y, so a connector
    /// without an explicit end runs horizontally.
    pub fn connector_end(&self) -> (f64, f64) {
        (self.end_x.unwrap_or(self.width), self.end_y.unwrap_or(0.0))
    }
}
