//! Locally-unique shape identifiers.

/// Monotonic id source owned by one materializer.
///
/// Ids look like `shape:ai_<n>`. The counter is incremented before use, so
/// the first id is `_1` and an id is never handed out twice.
#[derive(Debug, Clone)]
pub struct ShapeIdSequence {
    prefix: String,
    last: u64,
}

impl ShapeIdSequence {
    /// Create a new sequence with the `ai` prefix
    pub fn new() -> Self {
        Self::with_prefix("ai")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            last: 0,
        }
    }

    /// Continue numbering after `last`, e.g. when reopening a board.
    pub fn starting_after(mut self, last: u64) -> Self {
        self.last = last;
        self
    }

    /// Get the next id
    pub fn next_id(&mut self) -> String {
        self.last += 1;
        format!("shape:{}_{}", self.prefix, self.last)
    }

    /// Number of the most recently issued id (0 if none yet)
    pub fn last(&self) -> u64 {
        self.last
    }
}

impl Default for ShapeIdSequence {
    fn default() -> Self {
        Self::new()
    }
}
