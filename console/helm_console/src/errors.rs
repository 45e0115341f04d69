//! Error types for registration and evaluation.
//!
//! Registration errors are caller mistakes and carry the offending name.
//! Evaluation errors are data errors: they are always recoverable, produce
//! no result, and leave no side effects beyond stack pops that had already
//! completed.

use std::fmt;

use helm_parse::{BindError, ExpandError, MAX_LINE_LEN};
use helm_value::ValueType;

/// Registration failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterError {
    /// The name is already bound to a command.
    DuplicateName { name: String },
    /// Unregistering a name that was never registered.
    NotRegistered { name: String },
    /// The empty string is not a command name.
    EmptyName,
    /// A parameter count exceeded the 16-bit cap.
    TooManyParameters { count: usize },
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::DuplicateName { name } => {
                write!(f, "can't register command: [{name}] is already registered")
            }
            RegisterError::NotRegistered { name } => {
                write!(f, "can't unregister command: [{name}] is not registered")
            }
            RegisterError::EmptyName => write!(f, "command name must not be empty"),
            RegisterError::TooManyParameters { count } => {
                write!(f, "parameter count {count} exceeds {}", u16::MAX)
            }
        }
    }
}

impl std::error::Error for RegisterError {}

/// Evaluation or execution failure.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalError {
    /// The line was blank after expansion.
    EmptyLine,
    /// The line exceeded the length cap.
    LineTooLong { limit: usize },
    /// The command name is not registered.
    Unregistered { name: String },
    /// Fewer arguments than the command requires.
    TooFewArguments {
        name: String,
        required: usize,
        optional: usize,
        found: usize,
    },
    /// More arguments than the command accepts (typed-argument path only;
    /// the binder stops consuming at the maximum instead).
    TooManyArguments {
        name: String,
        max: usize,
        found: usize,
    },
    /// A typed argument's tag does not match the declared parameter type.
    TypeMismatch {
        name: String,
        index: usize,
        expected: ValueType,
        found: ValueType,
    },
    /// Token scanning or conversion failed.
    Parse { name: String, error: BindError },
    /// A pop marker was reached with an empty result stack.
    StackEmpty,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::EmptyLine => write!(f, "can't evaluate an empty command line"),
            EvalError::LineTooLong { limit } => {
                write!(f, "command line exceeds {limit} characters")
            }
            EvalError::Unregistered { name } => {
                write!(f, "[{name}] is not a registered command")
            }
            EvalError::TooFewArguments {
                name,
                required,
                optional,
                found,
            } => write!(
                f,
                "can't run command [{name}]: expected {required}[+{optional}] arguments, found {found}"
            ),
            EvalError::TooManyArguments { name, max, found } => write!(
                f,
                "can't run command [{name}]: expected at most {max} arguments, found {found}"
            ),
            EvalError::TypeMismatch {
                name,
                index,
                expected,
                found,
            } => write!(
                f,
                "can't run command [{name}]: argument #{index} is {found}, expected {expected}"
            ),
            EvalError::Parse { name, error } => {
                write!(f, "can't evaluate command [{name}]: {error}")
            }
            EvalError::StackEmpty => write!(f, "pop marker with empty result stack"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvalError::Parse { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ExpandError> for EvalError {
    fn from(error: ExpandError) -> Self {
        match error {
            ExpandError::StackEmpty => EvalError::StackEmpty,
            ExpandError::LineTooLong { .. } => EvalError::LineTooLong {
                limit: MAX_LINE_LEN,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn register_error_messages() {
        let err = RegisterError::DuplicateName { name: "say".into() };
        assert_eq!(
            err.to_string(),
            "can't register command: [say] is already registered"
        );
    }

    #[test]
    fn eval_error_messages() {
        let err = EvalError::TypeMismatch {
            name: "add".into(),
            index: 1,
            expected: ValueType::Float,
            found: ValueType::Str,
        };
        assert_eq!(
            err.to_string(),
            "can't run command [add]: argument #1 is string, expected float"
        );

        let err = EvalError::Unregistered {
            name: "frobnicate".into(),
        };
        assert_eq!(err.to_string(), "[frobnicate] is not a registered command");
    }

    #[test]
    fn expand_errors_map_into_eval_errors() {
        assert_eq!(EvalError::from(ExpandError::StackEmpty), EvalError::StackEmpty);
        assert_eq!(
            EvalError::from(ExpandError::LineTooLong { limit: MAX_LINE_LEN }),
            EvalError::LineTooLong {
                limit: MAX_LINE_LEN
            }
        );
    }
}
