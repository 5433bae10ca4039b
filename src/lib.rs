//! Waypoint: a small configuration-driven finite state machine
//!
//! A machine is described declaratively: an initial state plus, for each
//! state, the events it reacts to and where they lead. The engine tracks
//! the current state, validates transitions against the configuration and
//! keeps a linear undo/redo history.
//!
//! # Core Concepts
//!
//! - **Configuration**: `MachineConfig`, read-only once the machine exists
//! - **History**: the visited path plus a redo buffer
//! - **Machine**: `StateMachine`, applying explicit and event transitions
//!
//! # Example
//!
//! ```rust
//! use waypoint::{MachineConfig, StateMachine};
//!
//! let config = MachineConfig::from_json(
//!     r#"{
//!         "initial": "A",
//!         "states": {
//!             "A": { "transitions": { "jump": "B" } },
//!             "B": { "transitions": {} }
//!         }
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("jump").unwrap();
//! assert_eq!(machine.state(), "B");
//! assert!(machine.trigger("jump").is_err());
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "A");
//! assert!(!machine.undo());
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, MachineConfigBuilder, StateBuilder};
pub use self::core::{MachineConfig, StateDefinition, StateHistory};
pub use machine::{FsmError, StateMachine};
