//! Greet-form view state shared between host tests and the wasm app.
//!
//! Keeping this out of the wasm-only `web` module allows us to unit-test the
//! submit cycle on the host; the wasm app wraps it in a reactive signal.

use crate::error::CallError;
use crate::flow::SubmitView;

/// The form's lifecycle: Idle → Pending → Idle, on both outcome branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Pending,
}

impl SubmitPhase {
    pub fn is_busy(self) -> bool {
        matches!(self, SubmitPhase::Pending)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetViewState {
    pub phase: SubmitPhase,
    /// The last resolved greeting; survives a later failed call.
    pub greeting: Option<String>,
    /// The last failed call, rendered; cleared when a new attempt starts.
    pub error: Option<String>,
}

impl GreetViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }
}

impl SubmitView for GreetViewState {
    fn set_busy(&mut self, busy: bool) {
        self.phase = if busy {
            SubmitPhase::Pending
        } else {
            SubmitPhase::Idle
        };
        if busy {
            // A fresh attempt clears the previous failure, not the greeting.
            self.error = None;
        }
    }

    fn show_greeting(&mut self, text: &str) {
        self.greeting = Some(text.to_string());
        self.error = None;
    }

    fn show_error(&mut self, err: &CallError) {
        self.error = Some(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_toggles_drive_the_phase() {
        let mut state = GreetViewState::new();
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert!(!state.is_busy());

        state.set_busy(true);
        assert_eq!(state.phase, SubmitPhase::Pending);
        assert!(state.is_busy());

        state.set_busy(false);
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn a_new_attempt_clears_the_error_but_not_the_greeting() {
        let mut state = GreetViewState::new();
        state.show_greeting("Hello, Ada!");
        state.show_error(&CallError::AgentMissing);

        state.set_busy(true);
        assert_eq!(state.error, None);
        assert_eq!(state.greeting.as_deref(), Some("Hello, Ada!"));
    }

    #[test]
    fn a_greeting_replaces_a_stale_error() {
        let mut state = GreetViewState::new();
        state.show_error(&CallError::Rejected("boom".to_string()));

        state.show_greeting("Hello, Grace!");
        assert_eq!(state.error, None);
        assert_eq!(state.greeting.as_deref(), Some("Hello, Grace!"));
    }

    #[test]
    fn an_error_leaves_the_greeting_in_place() {
        let mut state = GreetViewState::new();
        state.show_greeting("Hello, Ada!");

        state.show_error(&CallError::Rejected("boom".to_string()));
        assert_eq!(state.greeting.as_deref(), Some("Hello, Ada!"));
        assert_eq!(state.error.as_deref(), Some("call rejected: boom"));
    }
}
