//! Definition error types.

use crate::core::AutomatonError;
use std::fmt;
use thiserror::Error;

/// Part of a definition that failed validation.
///
/// Indexed variants are 0-based; they display 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    States,
    State(usize),
    Alphabet,
    Symbol(usize),
    Transitions,
    Transition(usize),
    Start,
    Finals,
    Final(usize),
    Input,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::States => write!(f, "states"),
            Self::State(i) => write!(f, "state {}", i + 1),
            Self::Alphabet => write!(f, "alphabet"),
            Self::Symbol(i) => write!(f, "symbol {}", i + 1),
            Self::Transitions => write!(f, "transitions"),
            Self::Transition(i) => write!(f, "transition {}", i + 1),
            Self::Start => write!(f, "start state"),
            Self::Finals => write!(f, "final states"),
            Self::Final(i) => write!(f, "final state {}", i + 1),
            Self::Input => write!(f, "input"),
        }
    }
}

/// A single validation failure, naming the field it concerns.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid {field}: {reason}")]
pub struct DefinitionError {
    pub field: Field,
    pub reason: String,
}

impl DefinitionError {
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl From<AutomatonError> for DefinitionError {
    fn from(err: AutomatonError) -> Self {
        let field = match err {
            AutomatonError::DuplicateState { .. } => Field::States,
            AutomatonError::InvalidReference { .. } | AutomatonError::InvalidSymbol { .. } => {
                Field::Transitions
            }
            AutomatonError::InvalidStart { .. } => Field::Start,
            AutomatonError::InvalidFinal { .. } => Field::Finals,
        };
        Self::new(field, err.to_string())
    }
}

/// What went wrong on a line of a text definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected 'key: value'")]
    MissingColon,

    #[error("unknown key '{0}'")]
    UnknownKey(String),

    #[error("transition needs 'from symbol to', found {found} field(s)")]
    MalformedTransition { found: usize },
}

/// Syntax error in a text definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Errors that can occur while loading a definition end to end.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Malformed JSON definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Definition rejected: {}", join(.0))]
    Invalid(Vec<DefinitionError>),
}

impl LoadError {
    /// Validation failures, if that is why loading failed.
    pub fn definition_errors(&self) -> &[DefinitionError] {
        match self {
            Self::Invalid(errors) => errors,
            Self::Parse(_) | Self::Json(_) => &[],
        }
    }
}

fn join(errors: &[DefinitionError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
