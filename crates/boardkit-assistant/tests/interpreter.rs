// Response interpreter tests
// Completions as models actually return them: fenced, chatty, slightly broken.

use boardkit_assistant::{
    interpret, shape_schema, Diagnostic, Interpreter, SkipReason,
};
use boardkit_core::{ShapeCommand, ShapeKind};
use proptest::prelude::*;

const CLEAN: &str = r#"[
  {"type": "rectangle", "x": -60, "y": 0, "width": 120, "height": 60, "color": "blue"},
  {"type": "ellipse", "x": 40, "y": 10},
  {"type": "arrow", "x": 0, "y": 30, "endX": 40, "endY": -10},
  {"type": "text", "x": 60, "y": 30, "text": "Done"}
]"#;

#[test]
fn test_clean_array_is_returned_in_order_with_defaults() {
    let shapes = interpret(CLEAN);
    assert_eq!(shapes.len(), 4);

    assert_eq!(
        shapes[0],
        ShapeCommand::rectangle(-60.0, 0.0, 120.0, 60.0).with_color("blue")
    );
    assert_eq!(shapes[1], ShapeCommand::ellipse(40.0, 10.0, 80.0, 80.0));
    assert_eq!(
        shapes[2],
        ShapeCommand::arrow(0.0, 30.0, 40.0, -10.0).with_size(100.0, 80.0)
    );
    assert_eq!(shapes[3], ShapeCommand::text(60.0, 30.0, "Done"));
}

#[test]
fn test_fenced_and_chatty_completion() {
    let completion = format!(
        "Sure! Here is your diagram:\n\n```json\n{}\n```\n\nLet me know if you want changes.",
        CLEAN
    );
    assert_eq!(interpret(&completion), interpret(CLEAN));
}

#[test]
fn test_trailing_commas_and_single_quotes_match_clean_version() {
    let sloppy = r#"[
      {'type': 'rectangle', 'x': -60, 'y': 0, 'width': 120, 'height': 60, 'color': 'blue',},
      {'type': 'ellipse', 'x': 40, 'y': 10},
      {'type': 'arrow', 'x': 0, 'y': 30, 'endX': 40, 'endY': -10},
      {'type': 'text', 'x': 60, 'y': 30, 'text': 'Done'},
    ]"#;
    assert_eq!(interpret(sloppy), interpret(CLEAN));
}

#[test]
fn test_apostrophes_in_double_quoted_text_survive() {
    let shapes = interpret(r#"[{"type": "text", "x": 0, "y": 0, "text": "Don't forget"}]"#);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].text, "Don't forget");
}

#[test]
fn test_malformed_sibling_is_dropped_by_object_salvage() {
    let text = r#"[
      {"type": "rectangle", "x": 0, "y": 0},
      {"type": "ellipse", "x": 5 "y": }
    ]"#;
    let result = Interpreter::new().interpret_with_diagnostics(text);

    assert_eq!(result.commands, vec![ShapeCommand::rectangle(0.0, 0.0, 100.0, 80.0)]);
    assert!(matches!(
        result.diagnostics.as_slice(),
        [Diagnostic::StrategyFailed { strategy: "strict", .. }]
    ));
}

#[test]
fn test_shapes_wrapper_and_single_object() {
    let wrapped = interpret(r#"{"shapes": [{"type": "line", "x": 1, "y": 2}]}"#);
    assert_eq!(wrapped.len(), 1);
    assert_eq!(wrapped[0].kind, ShapeKind::Line);

    let single = interpret(r#"Here: {"type": "text", "x": 0, "y": 0, "text": "solo"}"#);
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].text, "solo");
}

#[test]
fn test_single_object_with_brackets_in_text() {
    let shapes = interpret(r#"{"type": "text", "x": 0, "y": 0, "text": "Step [1]"}"#);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].text, "Step [1]");

    let fenced = interpret("```json\n{'type': 'rectangle', 'x': 2, 'y': 3, 'text': '[draft]',}\n```");
    assert_eq!(fenced.len(), 1);
    assert_eq!(fenced[0].kind, ShapeKind::Rectangle);
    assert_eq!(fenced[0].text, "[draft]");
}

#[test]
fn test_trailing_comma_inside_text_survives() {
    let shapes = interpret(r#"[{"type": "text", "x": 0, "y": 0, "text": "a, ]"},]"#);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].text, "a, ]");
}

#[test]
fn test_invalid_entries_are_filtered() {
    let text = r#"[
      {"type": "rectangle", "x": 0, "y": 0},
      {"x": 1, "y": 1},
      {"type": "ellipse", "x": "10", "y": 0},
      {"type": "ellipse", "x": 10},
      42,
      {"type": "star", "x": 0, "y": 0}
    ]"#;
    let result = Interpreter::new().interpret_with_diagnostics(text);

    let kinds: Vec<_> = result.commands.iter().map(|c| c.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![ShapeKind::Rectangle, ShapeKind::Other("star".to_string())]
    );

    let skipped: Vec<_> = result
        .diagnostics
        .iter()
        .filter_map(|d| match d {
            Diagnostic::SkippedEntry { index, reason } => Some((*index, *reason)),
            _ => None,
        })
        .collect();
    assert_eq!(
        skipped,
        vec![
            (1, SkipReason::MissingType),
            (2, SkipReason::MissingX),
            (3, SkipReason::MissingY),
            (4, SkipReason::NotAnObject),
        ]
    );
}

#[test]
fn test_empty_and_non_json_inputs() {
    assert!(interpret("").is_empty());
    assert!(interpret("I can't draw that, sorry.").is_empty());
    assert!(interpret("[]").is_empty());
    assert!(interpret("[{{{").is_empty());
}

#[test]
fn test_schema_example_round_trips_through_interpreter() {
    let shapes = interpret(&shape_schema());
    let kinds: Vec<_> = shapes.iter().map(|c| c.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![ShapeKind::Rectangle, ShapeKind::Arrow, ShapeKind::Text]
    );
}

proptest! {
    #[test]
    fn prop_interpret_is_idempotent(text in ".{0,200}") {
        prop_assert_eq!(interpret(&text), interpret(&text));
    }

    #[test]
    fn prop_every_command_has_type_and_coordinates(
        text in r#"[\[\]{}",:'a-z0-9 \-.]{0,120}"#
    ) {
        for command in interpret(&text) {
            prop_assert!(!command.kind.as_str().is_empty());
            prop_assert!(command.x.is_finite());
            prop_assert!(command.y.is_finite());
        }
    }
}
