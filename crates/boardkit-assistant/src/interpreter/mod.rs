//! Response interpreter.
//!
//! Best-effort extraction of shape commands from model completions. The
//! completion may be wrapped in prose or code fences and may contain small
//! JSON defects. Interpretation never fails: anything unusable resolves to an
//! empty list, with the detail going to the log and, on request, to a
//! diagnostics list.

pub mod cleanup;
pub mod recovery;
pub mod validate;

pub use recovery::{ObjectSalvage, RecoveryError, RecoveryStrategy, StrictParse};
pub use validate::SkipReason;

use boardkit_core::ShapeCommand;
use serde_json::Value;
use std::fmt;

/// Something the interpreter noticed while working through a completion.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The completion was empty after cleanup
    NoPayload,
    /// A recovery strategy gave up
    StrategyFailed {
        strategy: &'static str,
        reason: String,
    },
    /// No strategy produced any entries
    NothingRecovered,
    /// A raw entry was dropped during validation
    SkippedEntry { index: usize, reason: SkipReason },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPayload => write!(f, "completion is empty"),
            Self::StrategyFailed { strategy, reason } => {
                write!(f, "{} parse failed: {}", strategy, reason)
            }
            Self::NothingRecovered => write!(f, "no shape entries could be recovered"),
            Self::SkippedEntry { index, reason } => {
                write!(f, "entry {} skipped: {}", index, reason)
            }
        }
    }
}

/// Commands plus what was noticed producing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interpretation {
    pub commands: Vec<ShapeCommand>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Completion-text interpreter with an ordered recovery chain.
pub struct Interpreter {
    strategies: Vec<Box<dyn RecoveryStrategy>>,
}

impl Interpreter {
    /// Creates an interpreter that tries a strict parse, then per-object
    /// salvage.
    pub fn new() -> Self {
        Self::with_strategies(vec![Box::new(StrictParse), Box::new(ObjectSalvage)])
    }

    /// Creates an interpreter with a custom recovery chain, tried in order.
    pub fn with_strategies(strategies: Vec<Box<dyn RecoveryStrategy>>) -> Self {
        Self { strategies }
    }

    /// Names of the strategies in the order they are tried.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Interprets a completion into validated commands, in input order.
    pub fn interpret(&self, text: &str) -> Vec<ShapeCommand> {
        self.interpret_with_diagnostics(text).commands
    }

    /// Same as [`Interpreter::interpret`], also reporting skip reasons.
    ///
    /// The bracketed span of the completion is tried first. If it yields no
    /// commands, the whole completion is tried again, so a single object
    /// whose text contains brackets is not lost to the span inside it.
    pub fn interpret_with_diagnostics(&self, text: &str) -> Interpretation {
        let cleaned = cleanup::prepare(text);
        if cleaned.is_empty() {
            tracing::debug!("Completion is empty, nothing to interpret");
            return Interpretation {
                commands: Vec::new(),
                diagnostics: vec![Diagnostic::NoPayload],
            };
        }

        let first = self.interpret_payload(&cleaned);
        if !first.commands.is_empty() {
            return first;
        }

        let whole = cleanup::prepare_whole(text);
        if whole == cleaned {
            return first;
        }

        tracing::debug!("Bracketed span gave no shapes, retrying on the whole completion");
        let retry = self.interpret_payload(&whole);
        if retry.commands.is_empty() {
            first
        } else {
            retry
        }
    }

    fn interpret_payload(&self, cleaned: &str) -> Interpretation {
        let mut result = Interpretation::default();

        let Some(entries) = self.recover(cleaned, &mut result.diagnostics) else {
            tracing::warn!(
                "Could not recover shapes from completion ({} bytes)",
                cleaned.len()
            );
            result.diagnostics.push(Diagnostic::NothingRecovered);
            return result;
        };

        let total = entries.len();
        for (index, entry) in entries.iter().enumerate() {
            match validate::validate_entry(entry) {
                Ok(command) => result.commands.push(command),
                Err(reason) => result
                    .diagnostics
                    .push(Diagnostic::SkippedEntry { index, reason }),
            }
        }

        tracing::debug!(
            "Interpreted {} of {} entries as shape commands",
            result.commands.len(),
            total
        );
        result
    }

    fn recover(&self, cleaned: &str, diagnostics: &mut Vec<Diagnostic>) -> Option<Vec<Value>> {
        self.strategies
            .iter()
            .find_map(|strategy| match strategy.attempt(cleaned) {
                Ok(entries) => {
                    tracing::debug!(
                        "Recovered {} entries with {} strategy",
                        entries.len(),
                        strategy.name()
                    );
                    Some(entries)
                }
                Err(e) => {
                    tracing::debug!("{} strategy failed: {}", strategy.name(), e);
                    diagnostics.push(Diagnostic::StrategyFailed {
                        strategy: strategy.name(),
                        reason: e.to_string(),
                    });
                    None
                }
            })
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

/// Interprets a completion with the default recovery chain.
pub fn interpret(text: &str) -> Vec<ShapeCommand> {
    Interpreter::new().interpret(text)
}
