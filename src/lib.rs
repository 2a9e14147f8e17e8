//! # Boardkit
//!
//! Turns loosely formatted AI completions into whiteboard shapes.
//!
//! ## Architecture
//!
//! Boardkit is organized as a workspace with multiple crates:
//!
//! 1. **boardkit-core** - Shape commands, palette, shared error types
//! 2. **boardkit-assistant** - Completion interpreter and prompt builders
//! 3. **boardkit-canvas** - Drawing surface, materializer, board, templates
//! 4. **boardkit-settings** - JSON/TOML configuration
//! 5. **boardkit** - Command-line binary that wires the crates together
//!
//! ## Example
//!
//! ```
//! use boardkit::{board_from_config, draw_completion, Config, Materializer};
//!
//! let config = Config::default();
//! let mut board = board_from_config(&config);
//! let mut materializer = Materializer::new();
//!
//! let outcome = draw_completion(
//!     &mut materializer,
//!     &mut board,
//!     r#"[{"type": "ellipse", "x": 0, "y": 0}]"#,
//!     &config,
//! );
//! assert_eq!(outcome.created, 1);
//! assert_eq!(board.shapes()[0].id, "shape:ai_1");
//! ```

pub use boardkit_assistant as assistant;
pub use boardkit_canvas as canvas;
pub use boardkit_core as model;
pub use boardkit_settings as settings;

pub use boardkit_assistant::{
    interpret, shape_prompt, shape_schema, sketch_prompt, Diagnostic, Interpretation, Interpreter,
};
pub use boardkit_canvas::{
    Board, BoardTemplate, DrawingSurface, MaterializeReport, Materializer, Offset, Point,
    ShapeDescriptor, TemplateCategory, TemplateLibrary, Viewport,
};
pub use boardkit_core::{Error, Result, ShapeCommand, ShapeKind, SurfaceError};
pub use boardkit_settings::{Config, LogFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Result of drawing one completion onto a surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawOutcome {
    /// Shapes created on the surface
    pub created: usize,
    /// Commands the interpreter produced
    pub commands: usize,
    /// What the interpreter noticed along the way
    pub diagnostics: Vec<Diagnostic>,
}

/// Empty board sized and zoomed per `config.board`.
pub fn board_from_config(config: &Config) -> Board {
    let mut viewport = Viewport::new(config.board.width, config.board.height);
    viewport.set_zoom(config.board.zoom);
    Board::with_viewport(viewport)
}

/// Placement offset from `config.placement`.
pub fn offset_from_config(config: &Config) -> Offset {
    Offset::new(config.placement.offset_x, config.placement.offset_y)
}

/// Interprets `completion` and materializes the result on `surface`.
pub fn draw_completion<S>(
    materializer: &mut Materializer,
    surface: &mut S,
    completion: &str,
    config: &Config,
) -> DrawOutcome
where
    S: DrawingSurface + ?Sized,
{
    let Interpretation {
        commands,
        diagnostics,
    } = Interpreter::new().interpret_with_diagnostics(completion);

    let created = materializer.materialize(surface, &commands, offset_from_config(config));
    tracing::info!(
        "Drew {} of {} shape commands from completion",
        created,
        commands.len()
    );

    DrawOutcome {
        created,
        commands: commands.len(),
        diagnostics,
    }
}

/// Initialize logging
///
/// Sets up structured logging on stderr with:
/// - Pretty or JSON formatting
/// - RUST_LOG environment variable support, falling back to `level`
pub fn init_logging(format: LogFormat, level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
