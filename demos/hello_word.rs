//! Word Recognizer
//!
//! This example builds a machine that accepts exactly the word "hello"
//! over the lowercase alphabet.
//!
//! Key concepts:
//! - Generating a complete table from a function with `table::from_fn`
//! - A sink "error" state absorbs every wrong letter
//! - Acceptance is membership of the final state
//! - Recording a run with `StepHistory`
//!
//! Run with: cargo run --example hello_word

use dfsm::builder::{alphabet, table, MachineBuilder};
use dfsm::core::{StateSet, StepHistory};
use dfsm::id_set;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Word Recognizer ===\n");

    let states: StateSet = id_set!["Empty String", "H", "E", "L1", "L2", "O", "Error State"];
    let letters = alphabet::lowercase_letters();
    let transitions = table::from_fn(&states, &letters, |state, letter| {
        match (state.as_str(), letter.as_str()) {
            ("Empty String", "h") => "H",
            ("H", "e") => "E",
            ("E", "l") => "L1",
            ("L1", "l") => "L2",
            ("L2", "o") => "O",
            _ => "Error State",
        }
    });

    let mut machine = MachineBuilder::new()
        .states(states)
        .initial("Empty String")
        .alphabet(letters)
        .table(transitions)
        .accepting(["O"])
        .build_machine()
        .unwrap();

    for word in ["hello", "here", "hellothere", "help"] {
        machine.process(word).unwrap();
        let verdict = if machine.is_accepting() { "accepted" } else { "rejected" };
        println!("  {word:<12} -> {:<12} {verdict}", machine.current_state().as_str());
        machine.reset();
    }

    println!("\nPath taken for \"hello\":");
    let mut history = StepHistory::new();
    machine.process_traced("hello", &mut history).unwrap();
    let path: Vec<&str> = history.get_path().into_iter().map(|s| s.as_str()).collect();
    println!("  {}", path.join(" -> "));

    println!("\nUppercase letters are outside the alphabet:");
    if let Err(error) = machine.process("Hello") {
        println!("  {error}");
    }

    println!("\n=== Example Complete ===");
}
