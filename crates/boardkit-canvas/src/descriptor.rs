//! Shape descriptors in the whiteboard's record format.
//!
//! The layout (a `type` tag, a position and a nested `props` object) is fixed
//! by the whiteboard and serializes to exactly what its `createShape` call
//! takes.

use serde::{Deserialize, Serialize};

/// One shape-creation record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeDescriptor {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub props: ShapeProps,
}

impl ShapeDescriptor {
    /// The record's `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self.props {
            ShapeProps::Geo(_) => "geo",
            ShapeProps::Text(_) => "text",
            ShapeProps::Arrow(_) => "arrow",
        }
    }
}

/// Per-type properties, tagged with the record type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "props", rename_all = "lowercase")]
pub enum ShapeProps {
    Geo(GeoProps),
    Text(TextProps),
    Arrow(ArrowProps),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoKind {
    Rectangle,
    Ellipse,
}

/// Geometric primitive: outlined rectangle or ellipse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoProps {
    pub geo: GeoKind,
    pub w: f64,
    pub h: f64,
    pub color: String,
    pub fill: String,
}

impl GeoProps {
    /// Unfilled geometry of the given size.
    pub fn outline(geo: GeoKind, w: f64, h: f64, color: impl Into<String>) -> Self {
        Self {
            geo,
            w,
            h,
            color: color.into(),
            fill: "none".to_string(),
        }
    }
}

/// Auto-sized, centred text at medium scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    pub rich_text: RichText,
    pub color: String,
    pub size: String,
    pub auto_size: bool,
    pub text_align: String,
}

impl TextProps {
    pub fn new(text: &str, color: impl Into<String>) -> Self {
        Self {
            rich_text: RichText::from_plain(text),
            color: color.into(),
            size: "m".to_string(),
            auto_size: true,
            text_align: "middle".to_string(),
        }
    }
}

/// Rich-text document node: `doc` > `paragraph` > `text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl RichText {
    /// Wraps plain text in a one-paragraph document.
    pub fn from_plain(text: &str) -> Self {
        let leaf = RichText {
            node_type: "text".to_string(),
            content: Vec::new(),
            text: Some(text.to_string()),
        };
        let paragraph = RichText {
            node_type: "paragraph".to_string(),
            content: vec![leaf],
            text: None,
        };
        RichText {
            node_type: "doc".to_string(),
            content: vec![paragraph],
            text: None,
        }
    }

    /// Concatenated text of every leaf, paragraphs joined by newlines.
    pub fn plain_text(&self) -> String {
        match self.node_type.as_str() {
            "text" => self.text.clone().unwrap_or_default(),
            "doc" => self
                .content
                .iter()
                .map(RichText::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
            _ => self.content.iter().map(RichText::plain_text).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrowhead {
    None,
    Arrow,
}

/// Vector relative to the shape position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VecPoint {
    pub x: f64,
    pub y: f64,
}

/// Connector from `start` to `end`, both relative to the shape position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowProps {
    pub start: VecPoint,
    pub end: VecPoint,
    pub color: String,
    pub arrowhead_start: Arrowhead,
    pub arrowhead_end: Arrowhead,
}
