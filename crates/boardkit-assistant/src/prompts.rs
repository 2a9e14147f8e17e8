//! Prompt text for the external text and vision models.
//!
//! Both prompts embed [`shape_schema`], the format the interpreter reads back.

use boardkit_core::PALETTE;

/// Describes the shape list format the interpreter accepts.
pub fn shape_schema() -> String {
    format!(
        r#"Respond with a JSON array of shapes and nothing else. Each shape is an object:
- "type": one of "rectangle", "ellipse", "line", "arrow", "text" (required)
- "x", "y": numbers, position relative to the drawing centre (required)
- "width", "height": numbers (optional, rectangles default to 100x80, ellipses to 80x80)
- "text": string (required for "text" shapes)
- "color": one of {} (optional, defaults to "black")
- "endX", "endY": numbers, end point relative to x/y (lines and arrows only)

Keep coordinates in a small range around 0; the board spaces them out.
Example:
[{{"type": "rectangle", "x": -60, "y": 0, "width": 100, "height": 60, "color": "blue"}},
 {{"type": "arrow", "x": -10, "y": 30, "endX": 60, "endY": 0}},
 {{"type": "text", "x": 60, "y": 30, "text": "Done"}}]"#,
        PALETTE
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(", ")
    )
}

/// Prompt asking a text model to draw `request`.
pub fn shape_prompt(request: &str) -> String {
    format!(
        "You are a whiteboard assistant that draws diagrams out of simple shapes.\n\
         Draw the following: {}\n\n{}",
        request.trim(),
        shape_schema()
    )
}

/// Prompt asking a vision model to redraw an attached sketch as clean shapes.
pub fn sketch_prompt(notes: Option<&str>) -> String {
    let notes = match notes.map(str::trim).filter(|n| !n.is_empty()) {
        Some(n) => format!("\nThe author adds: {}\n", n),
        None => String::new(),
    };
    format!(
        "You are a whiteboard assistant. The attached image is a rough hand-drawn sketch.\n\
         Identify its boxes, circles, connectors and labels and redraw it with clean shapes, \
         preserving the layout.\n{}\n{}",
        notes,
        shape_schema()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_palette() {
        let schema = shape_schema();
        assert!(schema.contains("\"light-violet\""));
        assert!(schema.contains("\"endX\""));
    }

    #[test]
    fn test_shape_prompt_embeds_request() {
        let prompt = shape_prompt("  a login flow ");
        assert!(prompt.contains("Draw the following: a login flow\n"));
        assert!(prompt.ends_with(&shape_schema()));
    }

    #[test]
    fn test_sketch_prompt_notes() {
        assert!(sketch_prompt(Some("the left box is a database")).contains("The author adds: the left box is a database"));
        assert!(!sketch_prompt(Some("   ")).contains("The author adds"));
        assert!(!sketch_prompt(None).contains("The author adds"));
    }
}
