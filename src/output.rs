//! Output sink for engine-produced text
//!
//! Every operation the engine performs writes human-readable progress text
//! into a shared sink. The sink is append-only and cumulative: it is never
//! reset between operations, and a snapshot returns everything recorded so
//! far in order. Callers read it through `PackageManager::output()` after a
//! verb completes.

use std::cell::RefCell;

/// Accumulating buffer for engine output.
///
/// Single-threaded by design: the facade and its commands run blocking and
/// synchronous, so interior mutability is a plain `RefCell`. Shared between
/// the facade, the engine, and the mutating commands via `Rc`.
#[derive(Debug, Default)]
pub struct OutputSink {
    chunks: RefCell<Vec<String>>,
}

impl OutputSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one chunk of text
    pub fn record(&self, chunk: impl Into<String>) {
        self.chunks.borrow_mut().push(chunk.into());
    }

    /// Concatenation of every chunk recorded so far, in record order
    pub fn snapshot(&self) -> String {
        self.chunks.borrow().concat()
    }

    /// Number of chunks recorded so far
    pub fn chunk_count(&self) -> usize {
        self.chunks.borrow().len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.chunks.borrow().is_empty()
    }
}
