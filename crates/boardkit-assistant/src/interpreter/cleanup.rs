//! Text repairs applied before any parse attempt.
//!
//! Each step is a pure `&str -> String` transform so it can be tested on its
//! own and reused by every recovery strategy.

use regex::Regex;
use std::sync::OnceLock;

/// Runs every cleanup step in order: fences, array extraction, JSON repairs.
pub fn prepare(text: &str) -> String {
    let unfenced = strip_code_fences(text);
    let payload = extract_array(&unfenced).unwrap_or(unfenced.as_str());
    repair(payload)
}

/// Like [`prepare`] but keeps the whole unfenced text instead of the
/// bracketed span, for replies whose only brackets sit inside a string.
pub fn prepare_whole(text: &str) -> String {
    repair(&strip_code_fences(text))
}

fn repair(payload: &str) -> String {
    remove_trailing_commas(&normalize_quotes(payload))
        .trim()
        .to_string()
}

/// Removes Markdown code-fence delimiters, labeled (```` ```json ````) or not.
pub fn strip_code_fences(text: &str) -> String {
    static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex =
        FENCE_REGEX.get_or_init(|| Regex::new(r"```[A-Za-z0-9_+-]*").expect("invalid fence regex"));
    regex.replace_all(text, "").to_string()
}

/// Finds the outermost bracket-delimited span, from the first `[` to the
/// last `]`.
pub fn extract_array(text: &str) -> Option<&str> {
    static ARRAY_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = ARRAY_REGEX.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("invalid array regex"));
    regex.find(text).map(|m| m.as_str())
}

/// Drops commas that directly precede a closing `]` or `}`, along with the
/// whitespace between them.
///
/// Expects double-quoted strings (run [`normalize_quotes`] first); commas
/// inside strings are left alone.
pub fn remove_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some(&next) = chars.get(i + 1) {
                    out.push(next);
                    i += 1;
                }
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if c == ',' {
            let next = chars[i + 1..].iter().position(|c| !c.is_whitespace());
            match next.map(|offset| (i + 1 + offset, chars[i + 1 + offset])) {
                Some((close, ']' | '}')) => {
                    out.push(chars[close]);
                    i = close;
                }
                _ => out.push(c),
            }
        } else {
            out.push(c);
        }
        i += 1;
    }

    out
}

#[derive(Clone, Copy, PartialEq)]
enum QuoteState {
    Outside,
    Double,
    Single,
}

/// Rewrites single-quoted strings as double-quoted ones.
///
/// Only quotes that open or close a string outside a double-quoted string are
/// touched, so `"Don't"` survives. Double quotes inside a single-quoted string
/// are escaped.
pub fn normalize_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    let mut state = QuoteState::Outside;

    while let Some(c) = chars.next() {
        match state {
            QuoteState::Outside => match c {
                '"' => {
                    state = QuoteState::Double;
                    out.push(c);
                }
                '\'' => {
                    state = QuoteState::Single;
                    out.push('"');
                }
                _ => out.push(c),
            },
            QuoteState::Double => {
                out.push(c);
                if c == '\\' {
                    if let Some(next) = chars.next() {
                        out.push(next);
                    }
                } else if c == '"' {
                    state = QuoteState::Outside;
                }
            }
            QuoteState::Single => match c {
                '\\' => match chars.next() {
                    Some('\'') => out.push('\''),
                    Some(next) => {
                        out.push('\\');
                        out.push(next);
                    }
                    None => out.push('\\'),
                },
                '\'' => {
                    state = QuoteState::Outside;
                    out.push('"');
                }
                '"' => out.push_str("\\\""),
                _ => out.push(c),
            },
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_labeled_and_bare_fences() {
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "\n[1]\n");
        assert_eq!(strip_code_fences("```\n[1]\n```"), "\n[1]\n");
        assert_eq!(strip_code_fences("no fences"), "no fences");
    }

    #[test]
    fn test_extract_array_spans_first_to_last_bracket() {
        let text = "Here you go: [{\"a\": [1, 2]}] hope that helps";
        assert_eq!(extract_array(text), Some("[{\"a\": [1, 2]}]"));
        assert_eq!(extract_array("{\"a\": 1}"), None);
    }

    #[test]
    fn test_remove_trailing_commas() {
        assert_eq!(remove_trailing_commas("[1, 2, ]"), "[1, 2]");
        assert_eq!(remove_trailing_commas("{\"a\": 1,\n}"), "{\"a\": 1}");
        assert_eq!(remove_trailing_commas("[1, 2]"), "[1, 2]");
        assert_eq!(remove_trailing_commas("[1, 2 ,  \n]"), "[1, 2 ]");
    }

    #[test]
    fn test_trailing_comma_inside_string_is_kept() {
        assert_eq!(
            remove_trailing_commas(r#"[{"text": "a, ]", "x": 1,}]"#),
            r#"[{"text": "a, ]", "x": 1}]"#
        );
        assert_eq!(
            remove_trailing_commas(r#"["say \"hi,\" }",]"#),
            r#"["say \"hi,\" }"]"#
        );
    }

    #[test]
    fn test_normalize_quotes() {
        assert_eq!(
            normalize_quotes("{'type': 'text'}"),
            "{\"type\": \"text\"}"
        );
        assert_eq!(
            normalize_quotes("{\"text\": \"Don't panic\"}"),
            "{\"text\": \"Don't panic\"}"
        );
        assert_eq!(
            normalize_quotes("{'text': 'say \"hi\"'}"),
            "{\"text\": \"say \\\"hi\\\"\"}"
        );
        assert_eq!(normalize_quotes("{'text': 'it\\'s'}"), "{\"text\": \"it's\"}");
    }

    #[test]
    fn test_prepare_whole_keeps_text_outside_brackets() {
        let raw = "```json\n{'type': 'text', 'text': 'Step [1]',}\n```";
        assert_eq!(prepare(raw), "[1]");
        assert_eq!(
            prepare_whole(raw),
            "{\"type\": \"text\", \"text\": \"Step [1]\"}"
        );
    }

    #[test]
    fn test_prepare_pipeline() {
        let raw = "Sure!\n```json\n[{'type': 'rectangle', 'x': 1, 'y': 2,},]\n```\nEnjoy.";
        assert_eq!(
            prepare(raw),
            "[{\"type\": \"rectangle\", \"x\": 1, \"y\": 2}]"
        );
    }
}
