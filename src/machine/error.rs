//! Errors raised by state machine operations.

use thiserror::Error;

/// Errors that can occur while constructing or driving a state machine.
///
/// Every variant is a programming or configuration mistake; none is
/// transient. A failed call leaves the machine untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    /// No usable configuration was supplied
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Explicit transition to a state that is not configured
    #[error("State '{state}' is not defined in the configuration")]
    InvalidState { state: String },

    /// Event raised in a state that has no transition for it
    #[error("No transition for event '{event}' from state '{state}'")]
    NoTransition { state: String, event: String },

    /// A restored history does not fit the machine it is attached to
    #[error("Invalid history: {0}")]
    History(String),
}
