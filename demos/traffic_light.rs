//! Traffic Light State Machine
//!
//! This demo drives a cyclic machine and walks its history back and forth.
//!
//! Key concepts:
//! - Event-driven transitions from a table
//! - Unconditional jumps with `change_state`
//! - Undo/redo over the recorded path
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use rewind::{transition_table, MachineConfig, StateMachine};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut machine = StateMachine::new(MachineConfig::new(
        "red",
        transition_table! {
            "red" => { "timer" => "green" },
            "green" => { "timer" => "yellow" },
            "yellow" => { "timer" => "red" },
            "flashing" => { "repair" => "red" },
        },
    ));

    println!("Initial state: {}", machine.state());

    for _ in 0..3 {
        if let Err(e) = machine.trigger("timer") {
            println!("  error: {e}");
            return;
        }
        println!("  timer -> {}", machine.state());
    }

    if let Err(e) = machine.trigger("repair") {
        println!("  refused: {e}");
    }

    if let Err(e) = machine.change_state("flashing") {
        println!("  error: {e}");
        return;
    }
    println!("  outage -> {}", machine.state());

    println!("\nWalking back:");
    while machine.undo() {
        println!("  undo -> {}", machine.state());
    }

    println!("\nWalking forward:");
    while machine.redo() {
        println!("  redo -> {}", machine.state());
    }

    println!("\nStates reacting to 'timer': {:?}", machine.states(Some("timer")));

    println!("\n=== Demo Complete ===");
}
