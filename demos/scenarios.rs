//! Simulation Scenarios
//!
//! This example runs one epsilon-NFA over several strings and prints the
//! step-by-step trace of each run.
//!
//! Key concepts:
//! - Building an automaton with the fluent builder
//! - Epsilon closure taken after every consumed symbol
//! - Accepting, rejecting and dead-end runs
//!
//! Run with: cargo run --example scenarios

use nfa_trace::builder::AutomatonBuilder;
use nfa_trace::core::simulate;
use nfa_trace::report::SimulationReport;

fn main() {
    println!("=== Simulation Scenarios ===\n");

    // Strings over {a, b} that contain "ab", with an epsilon shortcut
    // from the accepting state back to the start.
    let nfa = AutomatonBuilder::new()
        .states(["q0", "q1", "q2"])
        .alphabet("ab")
        .transition("q0", 'a', "q0")
        .transition("q0", 'a', "q1")
        .transition("q0", 'b', "q0")
        .transition("q1", 'b', "q2")
        .epsilon("q2", "q0")
        .start("q0")
        .final_state("q2")
        .build()
        .unwrap();

    for input in ["aab", "aa", "abba", ""] {
        println!("Input: {input:?}");
        let report = SimulationReport::new(&nfa, &simulate(&nfa, input));
        println!("{report}\n");
    }

    let strict = AutomatonBuilder::new()
        .states(["q0", "q1"])
        .alphabet("ab")
        .transition("q0", 'a', "q1")
        .start("q0")
        .final_state("q1")
        .build()
        .unwrap();

    println!("Input: \"b\" (no transition from q0 on 'b')");
    println!("{}", SimulationReport::new(&strict, &simulate(&strict, "b")));

    println!("\n=== Example Complete ===");
}
