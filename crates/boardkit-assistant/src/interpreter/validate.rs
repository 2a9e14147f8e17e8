//! Entry validation and normalization.

use boardkit_core::{default_size, ShapeCommand, ShapeKind, DEFAULT_COLOR};
use serde_json::{Map, Value};
use std::fmt;

/// Why a raw entry was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry is not a JSON object
    NotAnObject,
    /// `type` is missing, empty or not a string
    MissingType,
    /// `x` is missing or not a number
    MissingX,
    /// `y` is missing or not a number
    MissingY,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "not an object"),
            Self::MissingType => write!(f, "missing type"),
            Self::MissingX => write!(f, "missing numeric x"),
            Self::MissingY => write!(f, "missing numeric y"),
        }
    }
}

/// Validates one raw entry and fills in defaults.
pub fn validate_entry(entry: &Value) -> Result<ShapeCommand, SkipReason> {
    let obj = entry.as_object().ok_or(SkipReason::NotAnObject)?;

    let kind = obj
        .get("type")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ShapeKind::parse)
        .ok_or(SkipReason::MissingType)?;
    let x = number(obj, "x").ok_or(SkipReason::MissingX)?;
    let y = number(obj, "y").ok_or(SkipReason::MissingY)?;

    let (default_width, default_height) = default_size(&kind);
    let width = extent(obj, "width").unwrap_or(default_width);
    let height = extent(obj, "height").unwrap_or(default_height);

    let text = obj
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let color = obj
        .get("color")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_COLOR)
        .to_string();

    Ok(ShapeCommand {
        kind,
        x,
        y,
        width,
        height,
        text,
        color,
        end_x: number(obj, "endX"),
        end_y: number(obj, "endY"),
    })
}

fn number(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64)
}

// Zero counts as unset, same as a missing extent.
fn extent(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    number(obj, key).filter(|v| *v != 0.0)
}
