//! Builder for a single state's transitions.

use crate::core::StateDefinition;

/// Fluent builder for a [`StateDefinition`].
///
/// # Example
///
/// ```
/// use waypoint::builder::StateBuilder;
///
/// let idle = StateBuilder::new().on("start", "running").on("stop", "idle").build();
/// assert_eq!(idle.target("start"), Some("running"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateBuilder {
    definition: StateDefinition,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `event` to destination `to`. A repeated event replaces the
    /// earlier destination.
    pub fn on(mut self, event: impl Into<String>, to: impl Into<String>) -> Self {
        self.definition.transitions.insert(event.into(), to.into());
        self
    }

    pub fn build(self) -> StateDefinition {
        self.definition
    }
}
