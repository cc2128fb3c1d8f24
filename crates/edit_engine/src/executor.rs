//! Command execution engine

use crate::{EditorState, Outcome, Result, TemplateCommand};
use doc_model::{Clock, SystemClock};
use std::sync::Arc;

/// Owns the editor state and applies commands to it one at a time.
///
/// A command either replaces the whole state or, on error, leaves it
/// untouched; no command is ever partially applied.
pub struct EditingEngine {
    /// Current state
    state: EditorState,
    /// Time source for `updatedAt` / `createdAt`
    clock: Arc<dyn Clock>,
    /// Number of applied commands, for change detection
    revision: u64,
}

impl EditingEngine {
    /// Create an engine with a fresh untitled template and the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an engine with a fresh untitled template and a custom clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let state = EditorState::new(clock.now());
        Self {
            state,
            clock,
            revision: 0,
        }
    }

    /// Create an engine over an existing state
    pub fn with_state(state: EditorState, clock: Arc<dyn Clock>) -> Self {
        Self {
            state,
            clock,
            revision: 0,
        }
    }

    /// Get the current state
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Consume the engine, returning its state
    pub fn into_state(self) -> EditorState {
        self.state
    }

    /// Number of commands applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Execute a command
    pub fn execute(&mut self, command: TemplateCommand) -> Result<Outcome> {
        let result = command.apply(&self.state, self.clock.as_ref())?;

        match result.outcome {
            Outcome::Applied => {
                self.state = result.state;
                self.revision += 1;
            }
            Outcome::NoOp => {
                tracing::debug!("{} had no effect", command.display_name());
            }
        }

        Ok(result.outcome)
    }
}

impl Default for EditingEngine {
    fn default() -> Self {
        Self::new()
    }
}
