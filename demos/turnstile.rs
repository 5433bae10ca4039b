//! Turnstile
//!
//! A coin-operated turnstile driven by events, with undo and redo.
//!
//! Run with: RUST_LOG=debug cargo run --example turnstile

use tracing_subscriber::EnvFilter;
use waypoint::{FsmError, MachineConfigBuilder, StateBuilder, StateMachine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Turnstile Example ===\n");

    let config = MachineConfigBuilder::new()
        .initial("locked")
        .state("locked", StateBuilder::new().on("coin", "unlocked"))
        .state(
            "unlocked",
            StateBuilder::new().on("push", "locked").on("coin", "unlocked"),
        )
        .terminal("broken")
        .build()?;

    let mut turnstile = StateMachine::new(config);
    println!("Initial state: {}", turnstile.state());
    println!("States accepting coins: {:?}", turnstile.list_states(Some("coin")));

    for event in ["coin", "push", "push"] {
        match turnstile.trigger(event) {
            Ok(()) => println!("{event:>5} -> {}", turnstile.state()),
            Err(FsmError::NoTransition { state, .. }) => {
                println!("{event:>5} ignored while {state}")
            }
            Err(e) => return Err(e.into()),
        }
    }

    turnstile.undo();
    println!("\nAfter undo: {}", turnstile.state());
    turnstile.redo();
    println!("After redo: {}", turnstile.state());

    turnstile.change_state("broken")?;
    println!("Vandalised: {}", turnstile.state());
    turnstile.reset()?;
    println!("Repaired: {}", turnstile.state());

    println!("\nPath: {:?}", turnstile.history().path());

    println!("\n=== Example Complete ===");
    Ok(())
}
