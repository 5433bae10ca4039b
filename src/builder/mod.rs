//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders for assembling a
//! [`MachineConfig`] in code instead of deserializing one.

pub mod config;
pub mod error;
pub mod state;

pub use config::MachineConfigBuilder;
pub use error::BuildError;
pub use state::StateBuilder;

use crate::core::MachineConfig;

/// Create a configuration from `(from, event, to)` triples.
///
/// Every source state is defined; destinations are left as given.
///
/// # Example
///
/// ```
/// use waypoint::builder::from_transitions;
///
/// let config = from_transitions("A", &[("A", "next", "B"), ("B", "next", "A")]);
/// assert_eq!(config.transition("B", "next"), Some("A"));
/// ```
pub fn from_transitions(initial: &str, transitions: &[(&str, &str, &str)]) -> MachineConfig {
    let mut config = MachineConfig::new(initial);
    for (from, event, to) in transitions {
        config
            .states
            .entry((*from).to_string())
            .or_default()
            .transitions
            .insert((*event).to_string(), (*to).to_string());
    }
    config
}
