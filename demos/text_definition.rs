//! Text Definitions
//!
//! This example loads automata from the line-oriented text format,
//! shows how every invalid field is reported at once, and prints the
//! JSON report of a valid run.
//!
//! Run with: cargo run --example text_definition

use nfa_trace::definition::{load, Limits};

const VALID: &str = "\
# a then any number of b, via an epsilon hop
states: s0 s1 s2
alphabet: a b
transition: s0 a s1
transition: s1 e s2
transition: s2 b s2
start: s0
final: s2
input: abbb
";

const INVALID: &str = "\
states: s0 s1
alphabet: a e
transition: s0 c s9
start: s5
final: s1
input: abz
";

fn main() {
    println!("=== Text Definition Example ===\n");

    match load(VALID, &Limits::default()) {
        Ok(problem) => {
            let report = problem.report();
            println!("{report}\n");
            match report.to_json() {
                Ok(json) => println!("{json}\n"),
                Err(err) => println!("Could not serialize report: {err}\n"),
            }
        }
        Err(err) => println!("Unexpected error: {err}\n"),
    }

    println!("Loading a definition with several mistakes:");
    match load(INVALID, &Limits::default()) {
        Ok(_) => println!("  unexpectedly valid"),
        Err(err) => {
            for error in err.definition_errors() {
                println!("  - {error}");
            }
        }
    }

    println!("\n=== Example Complete ===");
}
