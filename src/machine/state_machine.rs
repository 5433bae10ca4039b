//! Configuration-driven state machine with undo/redo.

use crate::core::{MachineConfig, StateHistory};
use crate::machine::error::FsmError;
use tracing::debug;

/// State machine that tracks a current state and its visit history.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::MachineConfigBuilder;
/// use waypoint::machine::StateMachine;
///
/// let config = MachineConfigBuilder::new()
///     .initial("A")
///     .transition("A", "jump", "B")
///     .transition("B", "back", "A")
///     .build()
///     .unwrap();
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("jump").unwrap();
/// assert_eq!(machine.state(), "B");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "A");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "B");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    history: StateHistory,
}

impl StateMachine {
    /// Create a machine positioned at the configured initial state.
    ///
    /// Neither the initial state nor transition targets are validated here.
    pub fn new(config: MachineConfig) -> Self {
        let history = StateHistory::new(config.initial.clone());
        Self { config, history }
    }

    /// Create a machine from a configuration that may be absent.
    pub fn try_new(config: Option<MachineConfig>) -> Result<Self, FsmError> {
        config.map(Self::new).ok_or_else(|| {
            FsmError::Configuration("no configuration supplied".to_string())
        })
    }

    /// Create a machine that resumes from a previously saved history.
    ///
    /// Fails with [`FsmError::History`] if the history is not rooted at the
    /// configured initial state.
    pub fn with_history(config: MachineConfig, history: StateHistory) -> Result<Self, FsmError> {
        if history.root() != config.initial {
            return Err(FsmError::History(format!(
                "history is rooted at '{}' but the initial state is '{}'",
                history.root(),
                config.initial
            )));
        }

        debug!(depth = history.len(), current = %history.current(), "with_history");
        Ok(Self { config, history })
    }

    /// Create a machine from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        MachineConfig::from_json(json).map(Self::new)
    }

    /// Current state (pure)
    pub fn state(&self) -> &str {
        self.history.current()
    }

    /// Configuration the machine was built with (pure)
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Visit history (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Configured states, or only those that handle `event` when given.
    ///
    /// An event no state handles yields an empty list.
    pub fn list_states(&self, event: Option<&str>) -> Vec<&str> {
        self.config.state_ids(event)
    }

    /// Move unconditionally to `target`.
    ///
    /// Fails with [`FsmError::InvalidState`] if `target` is not configured.
    /// Moving to the current state still counts as a transition and
    /// discards the redo buffer.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.config.has_state(target) {
            return Err(FsmError::InvalidState {
                state: target.to_string(),
            });
        }

        debug!(from = %self.state(), to = %target, "change_state");
        self.history.push(target);
        Ok(())
    }

    /// Follow the transition for `event` from the current state.
    ///
    /// Fails with [`FsmError::NoTransition`] when the current state does not
    /// handle `event`, including when the current state has no definition.
    /// The destination is not checked against the configured states.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let from = self.state();
        let Some(to) = self.config.transition(from, event) else {
            return Err(FsmError::NoTransition {
                state: from.to_string(),
                event: event.to_string(),
            });
        };

        debug!(%from, %to, %event, "trigger");
        let to = to.to_string();
        self.history.push(to);
        Ok(())
    }

    /// Return to the initial state as a regular forward transition.
    pub fn reset(&mut self) -> Result<(), FsmError> {
        let initial = self.config.initial.clone();
        self.change_state(&initial)
    }

    /// Step back to the previous state.
    /// Returns `false` if nothing but the initial state is left.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo();
        if undone {
            debug!(to = %self.state(), "undo");
        }
        undone
    }

    /// Re-apply the most recently undone state.
    /// Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo();
        if redone {
            debug!(to = %self.state(), "redo");
        }
        redone
    }

    /// Forget all transitions, returning to the initial state.
    /// The redo buffer is discarded too.
    pub fn clear_history(&mut self) {
        debug!(depth = self.history.len(), "clear_history");
        self.history.clear();
    }

    /// Check whether `undo` would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check whether `redo` would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
