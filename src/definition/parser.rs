//! Line-oriented text format for definitions.
//!
//! ```text
//! # comment
//! states: q0 q1 q2
//! alphabet: a b
//! transition: q0 a q1
//! transition: q1 e q2
//! start: q0
//! final: q2
//! input: ab
//! ```
//!
//! List keys accumulate across repeated lines; `start` and `input` keep
//! the last value. The parser only checks syntax.

use super::error::{ParseError, ParseErrorKind};
use super::{AutomatonDefinition, TransitionDefinition};

/// Parse a text definition.
pub fn parse(text: &str) -> Result<AutomatonDefinition, ParseError> {
    let mut definition = AutomatonDefinition::default();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let (key, value) = content.split_once(':').ok_or(ParseError {
            line,
            kind: ParseErrorKind::MissingColon,
        })?;
        let value = value.trim();

        match key.trim() {
            "states" | "state" => definition.states.extend(words(value)),
            "alphabet" | "symbol" => definition.alphabet.extend(words(value)),
            "transition" => {
                let parts: Vec<&str> = value.split_whitespace().collect();
                let [from, symbol, to] = parts.as_slice() else {
                    return Err(ParseError {
                        line,
                        kind: ParseErrorKind::MalformedTransition { found: parts.len() },
                    });
                };
                definition
                    .transitions
                    .push(TransitionDefinition::new(*from, *symbol, *to));
            }
            "start" => definition.start = value.to_string(),
            "final" | "finals" => definition.finals.extend(words(value)),
            "input" => definition.input = value.to_string(),
            other => {
                return Err(ParseError {
                    line,
                    kind: ParseErrorKind::UnknownKey(other.to_string()),
                })
            }
        }
    }

    Ok(definition)
}

fn words(value: &str) -> impl Iterator<Item = String> + '_ {
    value.split_whitespace().map(str::to_string)
}
