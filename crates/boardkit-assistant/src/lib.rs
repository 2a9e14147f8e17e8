//! # Boardkit Assistant
//!
//! The AI side of the board: prompt text going out, shape commands coming
//! back.
//!
//! ```text
//! prompts (request -> instruction text)
//!        |
//!   external model
//!        |
//! interpreter (completion text -> Vec<ShapeCommand>)
//!   ├── cleanup    (code fences, array extraction, JSON repairs)
//!   ├── recovery   (strict parse, then per-object salvage)
//!   └── validate   (type/x/y filter, defaults)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use boardkit_assistant::interpret;
//!
//! let shapes = interpret("```json\n[{'type': 'rectangle', 'x': 0, 'y': 0},]\n```");
//! assert_eq!(shapes.len(), 1);
//! assert_eq!(shapes[0].width, 100.0);
//! ```

pub mod interpreter;
pub mod prompts;

pub use interpreter::{
    interpret, Diagnostic, Interpretation, Interpreter, ObjectSalvage, RecoveryError,
    RecoveryStrategy, SkipReason, StrictParse,
};
pub use prompts::{shape_prompt, shape_schema, sketch_prompt};
