//! Canvas materializer.
//!
//! Maps validated shape commands to whiteboard records and creates them one
//! at a time, anchored to the centre of the current viewport.
//!
//! Command coordinates are relative and usually small, so they are scaled by
//! [`SPACING_MULTIPLIER`] before being added to the viewport centre and the
//! caller's pixel offset:
//!
//! ```text
//! shape_x = center_x + offset_x + x * SPACING_MULTIPLIER
//! shape_y = center_y + offset_y + y * SPACING_MULTIPLIER
//! ```

use crate::descriptor::{
    ArrowProps, Arrowhead, GeoKind, GeoProps, ShapeDescriptor, ShapeProps, TextProps, VecPoint,
};
use crate::ids::ShapeIdSequence;
use crate::surface::{DrawingSurface, Point};
use boardkit_core::{ShapeCommand, ShapeKind, SurfaceError};
use thiserror::Error;

/// Scale applied to command coordinates before placement.
pub const SPACING_MULTIPLIER: f64 = 2.0;

/// Caller-supplied pixel offset added to every shape position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Outcome of a materialize call that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterializeReport {
    /// Shapes created on the surface
    pub created: usize,
    /// Commands with an unknown kind, or text commands without text
    pub skipped: usize,
}

/// Materialize errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterializeError {
    /// The surface refused a creation call; remaining commands were not tried
    #[error("Drawing surface failed after {created} shapes: {source}")]
    Surface {
        /// Shapes created before the failure.
        created: usize,
        /// The surface's error.
        source: SurfaceError,
    },
}

impl MaterializeError {
    /// Shapes that were created before the call stopped.
    pub fn created(&self) -> usize {
        match self {
            MaterializeError::Surface { created, .. } => *created,
        }
    }
}

/// Realizes shape commands on a drawing surface.
#[derive(Debug, Clone, Default)]
pub struct Materializer {
    ids: ShapeIdSequence,
}

impl Materializer {
    /// Creates a materializer with its own `shape:ai_<n>` id sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a materializer drawing ids from `ids`.
    pub fn with_ids(ids: ShapeIdSequence) -> Self {
        Self { ids }
    }

    /// The id sequence, e.g. to see how many ids were handed out.
    pub fn ids(&self) -> &ShapeIdSequence {
        &self.ids
    }

    /// Creates one shape per drawable command and returns how many were
    /// created.
    ///
    /// Unknown kinds and empty text commands are skipped. If the surface
    /// fails, the fault is logged, the remaining commands are abandoned and
    /// the count so far is returned.
    pub fn materialize<S>(
        &mut self,
        surface: &mut S,
        commands: &[ShapeCommand],
        offset: Offset,
    ) -> usize
    where
        S: DrawingSurface + ?Sized,
    {
        match self.try_materialize(surface, commands, offset) {
            Ok(report) => report.created,
            Err(e) => {
                tracing::warn!("Shape materialization stopped: {}", e);
                e.created()
            }
        }
    }

    /// Like [`Materializer::materialize`] for callers that may not have a
    /// surface yet: `None` creates nothing and returns 0.
    pub fn materialize_optional<S>(
        &mut self,
        surface: Option<&mut S>,
        commands: &[ShapeCommand],
        offset: Offset,
    ) -> usize
    where
        S: DrawingSurface + ?Sized,
    {
        match surface {
            Some(surface) => self.materialize(surface, commands, offset),
            None => {
                tracing::debug!(
                    "No drawing surface, dropping {} shape commands",
                    commands.len()
                );
                0
            }
        }
    }

    /// Creates shapes and reports the surface fault instead of logging it.
    pub fn try_materialize<S>(
        &mut self,
        surface: &mut S,
        commands: &[ShapeCommand],
        offset: Offset,
    ) -> Result<MaterializeReport, MaterializeError>
    where
        S: DrawingSurface + ?Sized,
    {
        let mut report = MaterializeReport::default();
        if commands.is_empty() {
            return Ok(report);
        }

        let center = surface.viewport_screen_center();
        let origin = center + Point::new(offset.x, offset.y);

        for command in commands {
            let Some(descriptor) = self.descriptor_for(command, origin) else {
                report.skipped += 1;
                continue;
            };

            let id = descriptor.id.clone();
            surface
                .create_shape(descriptor)
                .map_err(|source| MaterializeError::Surface {
                    created: report.created,
                    source,
                })?;
            tracing::trace!("Created {} ({})", id, command.kind);
            report.created += 1;
        }

        tracing::debug!(
            "Materialized {} of {} shape commands ({} skipped)",
            report.created,
            commands.len(),
            report.skipped
        );
        Ok(report)
    }

    /// Maps one command to its record, placed relative to `origin`.
    ///
    /// Returns `None` for commands that draw nothing; no id is consumed for
    /// them.
    pub fn descriptor_for(
        &mut self,
        command: &ShapeCommand,
        origin: Point,
    ) -> Option<ShapeDescriptor> {
        let props = match &command.kind {
            ShapeKind::Rectangle => ShapeProps::Geo(GeoProps::outline(
                GeoKind::Rectangle,
                command.width,
                command.height,
                command.color.as_str(),
            )),
            ShapeKind::Ellipse => ShapeProps::Geo(GeoProps::outline(
                GeoKind::Ellipse,
                command.width,
                command.height,
                command.color.as_str(),
            )),
            ShapeKind::Text => {
                if command.text.is_empty() {
                    return None;
                }
                ShapeProps::Text(TextProps::new(&command.text, command.color.as_str()))
            }
            ShapeKind::Arrow | ShapeKind::Line => {
                let (end_x, end_y) = command.connector_end();
                let arrowhead_end = if command.kind == ShapeKind::Arrow {
                    Arrowhead::Arrow
                } else {
                    Arrowhead::None
                };
                ShapeProps::Arrow(ArrowProps {
                    start: VecPoint { x: 0.0, y: 0.0 },
                    end: VecPoint { x: end_x, y: end_y },
                    color: command.color.clone(),
                    arrowhead_start: Arrowhead::None,
                    arrowhead_end,
                })
            }
            ShapeKind::Other(_) => return None,
        };

        Some(ShapeDescriptor {
            id: self.ids.next_id(),
            x: origin.x + command.x * SPACING_MULTIPLIER,
            y: origin.y + command.y * SPACING_MULTIPLIER,
            props,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_position_is_scaled() {
        let mut materializer = Materializer::new();
        let descriptor = materializer
            .descriptor_for(
                &ShapeCommand::rectangle(10.0, -5.0, 100.0, 80.0),
                Point::new(600.0, 300.0),
            )
            .unwrap();
        assert_eq!((descriptor.x, descriptor.y), (620.0, 290.0));
        assert_eq!(descriptor.id, "shape:ai_1");
    }

    #[test]
    fn test_skipped_commands_do_not_consume_ids() {
        let mut materializer = Materializer::new();
        let origin = Point::default();
        assert!(materializer
            .descriptor_for(&ShapeCommand::text(0.0, 0.0, ""), origin)
            .is_none());
        assert!(materializer
            .descriptor_for(
                &ShapeCommand::new(ShapeKind::Other("star".to_string()), 0.0, 0.0),
                origin
            )
            .is_none());
        assert_eq!(materializer.ids().last(), 0);
    }

    #[test]
    fn test_line_and_arrow_heads() {
        let mut materializer = Materializer::new();
        let origin = Point::default();

        let arrow = materializer
            .descriptor_for(&ShapeCommand::new(ShapeKind::Arrow, 0.0, 0.0), origin)
            .unwrap();
        let ShapeProps::Arrow(props) = arrow.props else {
            panic!("expected arrow props");
        };
        assert_eq!(props.arrowhead_end, Arrowhead::Arrow);
        assert_eq!(props.end, VecPoint { x: 100.0, y: 0.0 });

        let line = materializer
            .descriptor_for(&ShapeCommand::line(0.0, 0.0, 30.0, 40.0), origin)
            .unwrap();
        assert_eq!(line.type_name(), "arrow");
        let ShapeProps::Arrow(props) = line.props else {
            panic!("expected arrow props");
        };
        assert_eq!(props.arrowhead_end, Arrowhead::None);
        assert_eq!(props.end, VecPoint { x: 30.0, y: 40.0 });
    }

    #[test]
    fn test_error_display() {
        let err = MaterializeError::Surface {
            created: 2,
            source: SurfaceError::rejected("full"),
        };
        assert_eq!(
            err.to_string(),
            "Drawing surface failed after 2 shapes: Shape rejected: full"
        );
        assert_eq!(err.created(), 2);
    }
}
