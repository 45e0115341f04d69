//! The console context: registry + result stack + the two dispatch paths.

use helm_parse::{bind_args, split_name, BindError, MAX_LINE_LEN};
use helm_value::Value;

use crate::errors::{EvalError, RegisterError};
use crate::registry::Registry;
use crate::signature::{CommandFn, CommandSignature, ParamSpec};
use crate::stack::ResultStack;

/// A command console: registered signatures, a result stack, and the
/// evaluate/execute dispatch paths.
///
/// All mutable state lives here — there are no module-level globals, so two
/// consoles never interfere and teardown is just `Drop`. The console is not
/// internally synchronized; callers on multiple threads must serialize
/// access themselves.
#[derive(Debug, Default)]
pub struct Console {
    registry: Registry,
    pub(crate) stack: ResultStack,
}

impl Console {
    /// Create a console with no registered commands and an empty stack.
    pub fn new() -> Self {
        Console {
            registry: Registry::new(),
            stack: ResultStack::new(),
        }
    }

    // === Registration ===

    /// Register a command. See [`Registry::register`].
    pub fn register(
        &mut self,
        name: &str,
        handler: CommandFn,
        required_params: Vec<ParamSpec>,
        optional_params: Vec<ParamSpec>,
        result: ParamSpec,
    ) -> Result<(), RegisterError> {
        self.registry
            .register(name, handler, required_params, optional_params, result)
    }

    /// Unregister a command. See [`Registry::unregister`].
    pub fn unregister(&mut self, name: &str) -> Result<(), RegisterError> {
        self.registry.unregister(name)
    }

    /// Whether `name` is registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.registry.is_registered(name)
    }

    /// The signature table.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // === Result stack ===

    /// The result stack.
    pub fn stack(&self) -> &ResultStack {
        &self.stack
    }

    /// Mutable access to the result stack, for callers that seed or drain
    /// it directly.
    pub fn stack_mut(&mut self) -> &mut ResultStack {
        &mut self.stack
    }

    // === Dispatch ===

    /// Evaluate a command line: parse, bind signature-directed, invoke.
    ///
    /// Parsed text is never trusted, so binding enforces every declared
    /// type. Trailing text past the last accepted argument is ignored
    /// (logged at debug level).
    pub fn evaluate(&mut self, line: &str) -> Result<Value, EvalError> {
        if line.len() > MAX_LINE_LEN {
            return Err(EvalError::LineTooLong {
                limit: MAX_LINE_LEN,
            });
        }
        let Some((name, rest)) = split_name(line) else {
            return Err(EvalError::EmptyLine);
        };
        let Some(signature) = self.registry.lookup(name) else {
            tracing::debug!(command = name, "can't evaluate line: unknown command");
            return Err(EvalError::Unregistered {
                name: name.to_owned(),
            });
        };

        let (args, remainder) =
            bind_args(rest, signature.param_types(), signature.required()).map_err(|error| {
                tracing::warn!(command = name, %error, "can't evaluate command line");
                lift_bind_error(name, error)
            })?;
        if !remainder.is_empty() {
            tracing::debug!(command = name, remainder, "ignoring trailing text");
        }

        Ok(signature.invoke(&args))
    }

    /// Execute a command with pre-typed arguments, checking count and tags.
    pub fn execute(&mut self, name: &str, args: &[Value]) -> Result<Value, EvalError> {
        let signature = self.lookup_for_execute(name)?;

        if args.len() < signature.required() {
            return Err(EvalError::TooFewArguments {
                name: name.to_owned(),
                required: signature.required(),
                optional: signature.optional(),
                found: args.len(),
            });
        }
        if args.len() > signature.max_args() {
            return Err(EvalError::TooManyArguments {
                name: name.to_owned(),
                max: signature.max_args(),
                found: args.len(),
            });
        }
        for (index, (arg, &expected)) in args.iter().zip(signature.param_types()).enumerate() {
            let found = arg.value_type();
            if found != expected {
                tracing::warn!(
                    command = name,
                    index,
                    %expected,
                    %found,
                    "can't execute command: invalid argument type"
                );
                return Err(EvalError::TypeMismatch {
                    name: name.to_owned(),
                    index,
                    expected,
                    found,
                });
            }
        }

        Ok(signature.invoke(args))
    }

    /// Execute a command without per-argument type checks.
    ///
    /// For callers whose arguments are correct by construction (composing
    /// commands programmatically from other signatures). The argument count
    /// is still enforced against the signature's bounds — handlers index
    /// their required arguments, so an under-count slice can never reach
    /// them — but tags are the caller's responsibility.
    pub fn execute_unchecked(&mut self, name: &str, args: &[Value]) -> Result<Value, EvalError> {
        let signature = self.lookup_for_execute(name)?;
        if args.len() < signature.required() {
            return Err(EvalError::TooFewArguments {
                name: name.to_owned(),
                required: signature.required(),
                optional: signature.optional(),
                found: args.len(),
            });
        }
        if args.len() > signature.max_args() {
            return Err(EvalError::TooManyArguments {
                name: name.to_owned(),
                max: signature.max_args(),
                found: args.len(),
            });
        }
        Ok(signature.invoke(args))
    }

    fn lookup_for_execute(&self, name: &str) -> Result<&CommandSignature, EvalError> {
        self.registry.lookup(name).ok_or_else(|| {
            tracing::debug!(command = name, "can't execute: unknown command");
            EvalError::Unregistered {
                name: name.to_owned(),
            }
        })
    }
}

/// Attach the command name to a binder error, normalizing the
/// argument-count case onto the dispatcher's own variant.
fn lift_bind_error(name: &str, error: BindError) -> EvalError {
    match error {
        BindError::TooFewArguments {
            required,
            optional,
            found,
        } => EvalError::TooFewArguments {
            name: name.to_owned(),
            required,
            optional,
            found,
        },
        other => EvalError::Parse {
            name: name.to_owned(),
            error: other,
        },
    }
}
