//! Ready-made trace sinks.

use std::sync::Mutex;

use gridoku_core::{FixReason, Position, TraceSink, ValueSet};

/// A sink that forwards fixations to the [`log`] facade.
///
/// Fixations go to `debug`, branch points to `trace`. Wire up a logger
/// implementation (the command line tools use `env_logger`) to see them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn record_fix(&self, position: Position, value: u8, reason: FixReason<'_>) {
        log::debug!("{position} set to {value}, {reason}");
    }

    fn record_branch(&self, position: Position, candidates: ValueSet) {
        log::trace!("branching at {position} over {candidates:?}");
    }
}

/// A sink that collects the solve narration as text, one line per
/// fixation.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the narration lines recorded so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }
}

impl TraceSink for RecordingSink {
    fn record_fix(&self, position: Position, value: u8, reason: FixReason<'_>) {
        let line = format!("{position} set to {value}, {reason}");
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(line);
    }
}
