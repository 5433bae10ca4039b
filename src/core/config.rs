//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the
//! events it reacts to and where each event leads. It is read-only once
//! handed to a [`StateMachine`](crate::machine::StateMachine).

use crate::machine::FsmError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Transitions available from a single state.
///
/// Destinations are plain identifiers and are not checked against the
/// configured states.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event identifier -> destination state identifier
    #[serde(default)]
    pub transitions: BTreeMap<String, String>,
}

impl StateDefinition {
    /// Create a definition with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination for `event`, if this state defines it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether this state reacts to `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Complete machine configuration.
///
/// # Example
///
/// ```rust
/// use waypoint::core::MachineConfig;
///
/// let config = MachineConfig::from_json(
///     r#"{
///         "initial": "idle",
///         "states": {
///             "idle": { "transitions": { "start": "running" } },
///             "running": {}
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.transition("idle", "start"), Some("running"));
/// assert!(config.state("running").unwrap().transitions.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Identifier of the starting state
    pub initial: String,
    /// State identifier -> definition
    #[serde(default)]
    pub states: BTreeMap<String, StateDefinition>,
}

impl MachineConfig {
    /// Create a configuration with no states yet.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: BTreeMap::new(),
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// A `null` document counts as a missing configuration. Both that and
    /// malformed input fail with [`FsmError::Configuration`].
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        let parsed: Option<Self> = serde_json::from_str(json)
            .map_err(|e| FsmError::Configuration(e.to_string()))?;
        parsed.ok_or_else(|| FsmError::Configuration("no configuration supplied".to_string()))
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, FsmError> {
        serde_json::to_string_pretty(self).map_err(|e| FsmError::Configuration(e.to_string()))
    }

    /// Check whether `state` is a configured state key.
    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Look up the definition of `state`.
    pub fn state(&self, state: &str) -> Option<&StateDefinition> {
        self.states.get(state)
    }

    /// Destination of `event` raised in `state`.
    ///
    /// `None` when the state has no definition or does not handle the event.
    pub fn transition(&self, state: &str, event: &str) -> Option<&str> {
        self.state(state).and_then(|def| def.target(event))
    }

    /// Configured state identifiers, optionally filtered to those handling `event`.
    pub fn state_ids(&self, event: Option<&str>) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, def)| event.is_none_or(|e| def.handles(e)))
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MachineConfig {
        let mut config = MachineConfig::new("A");
        let mut a = StateDefinition::new();
        a.transitions.insert("x".into(), "B".into());
        let mut c = StateDefinition::new();
        c.transitions.insert("x".into(), "A".into());
        config.states.insert("A".into(), a);
        config.states.insert("B".into(), StateDefinition::new());
        config.states.insert("C".into(), c);
        config
    }

    #[test]
    fn transition_lookup_finds_destination() {
        let config = sample();
        assert_eq!(config.transition("A", "x"), Some("B"));
        assert_eq!(config.transition("B", "x"), None);
        assert_eq!(config.transition("missing", "x"), None);
    }

    #[test]
    fn state_ids_filters_by_event() {
        let config = sample();
        assert_eq!(config.state_ids(None), vec!["A", "B", "C"]);
        assert_eq!(config.state_ids(Some("x")), vec!["A", "C"]);
        assert!(config.state_ids(Some("y")).is_empty());
    }

    #[test]
    fn missing_transitions_default_to_empty() {
        let config = MachineConfig::from_json(r#"{"initial":"A","states":{"A":{}}}"#).unwrap();
        assert!(config.state("A").unwrap().transitions.is_empty());
    }

    #[test]
    fn null_document_is_a_configuration_error() {
        let err = MachineConfig::from_json("null").unwrap_err();
        assert!(matches!(err, FsmError::Configuration(_)));
    }

    #[test]
    fn malformed_document_is_a_configuration_error() {
        let err = MachineConfig::from_json("{\"states\":").unwrap_err();
        assert!(matches!(err, FsmError::Configuration(_)));
    }

    #[test]
    fn config_serializes_correctly() {
        let config = sample();
        let json = config.to_json().unwrap();
        let deserialized = MachineConfig::from_json(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
