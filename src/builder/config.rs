//! Builder for complete machine configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{MachineConfig, StateDefinition};
use std::collections::BTreeMap;

/// Builder for constructing a [`MachineConfig`] with a fluent API.
///
/// Transition targets are not validated, matching the engine's lenient
/// handling of destinations.
#[derive(Clone, Debug, Default)]
pub struct MachineConfigBuilder {
    initial: Option<String>,
    states: BTreeMap<String, StateDefinition>,
}

impl MachineConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Define a state using a builder, replacing any earlier definition.
    pub fn state(mut self, id: impl Into<String>, builder: StateBuilder) -> Self {
        self.states.insert(id.into(), builder.build());
        self
    }

    /// Declare a state with no outgoing transitions.
    pub fn terminal(mut self, id: impl Into<String>) -> Self {
        self.states.entry(id.into()).or_default();
        self
    }

    /// Add a single transition, creating `from` if it is not defined yet.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}
