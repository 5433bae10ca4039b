//! Core data model of the state machine.
//!
//! This module contains the plain data the engine operates on:
//! - The declarative configuration of states and transitions
//! - The undo/redo history of visited states
//!
//! Nothing here logs or fails except configuration parsing.

mod config;
mod history;

pub use config::{MachineConfig, StateDefinition};
pub use history::StateHistory;
