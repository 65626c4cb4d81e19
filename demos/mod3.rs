//! Modulo-Three Counter
//!
//! This example computes the remainder of a binary number divided by three
//! by walking a three-state machine over its digits.
//!
//! Key concepts:
//! - Defining a machine from literal sets and a transition table
//! - The final state is the answer
//! - `process_and_reset` for stateless queries over one cursor
//! - Verbose processing logs each step through `tracing`
//!
//! Run with: RUST_LOG=dfsm=debug cargo run --example mod3

use dfsm::{id_set, transition_table, Machine};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Modulo-Three Counter ===\n");

    let mut machine = Machine::new(
        id_set!["0", "1", "2"],
        "0",
        id_set!["0", "1"],
        transition_table! {
            "0" => { "0" => "0", "1" => "1" },
            "1" => { "0" => "2", "1" => "0" },
            "2" => { "0" => "1", "1" => "2" },
        },
        id_set!["0", "1", "2"],
    )
    .unwrap();

    for binary in ["1101", "1110", "1111", "10110101"] {
        let remainder = machine.process_and_reset(binary).unwrap();
        let value = u32::from_str_radix(binary, 2).unwrap();
        println!("  {binary:>10} ({value:>3}) mod 3 = {remainder}");
    }

    println!("\nStep by step (set RUST_LOG=dfsm=debug to see each transition):");
    let remainder = machine.process_and_reset_verbose("1101").unwrap();
    println!("  1101 mod 3 = {remainder}");

    println!("\nInvalid input is rejected before any step is applied:");
    match machine.process(&["1", "0", "3"]) {
        Ok(state) => println!("  unexpectedly reached {state}"),
        Err(error) => println!("  {} ({})", error, error.code()),
    }
    println!("  cursor still at {}", machine.current_state());

    println!("\n=== Example Complete ===");
}
