//! The state machine engine.
//!
//! The engine owns a read-only [`MachineConfig`](crate::core::MachineConfig)
//! and a [`StateHistory`](crate::core::StateHistory). Transitions are
//! validated against the configuration before anything is recorded.
//!
//! Invalid transitions and unknown events are errors. Undo and redo
//! report availability as a plain `bool`, since running out of history is
//! an expected outcome.

mod error;
mod state_machine;

pub use error::FsmError;
pub use state_machine::StateMachine;
