//! Build errors for configuration builders.

use thiserror::Error;

/// Errors that can occur when building a machine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}
