//! Command signatures: a name, a callable, and typed parameter metadata.

use std::fmt;

use smallvec::SmallVec;

use helm_parse::MAX_ARGS_INLINE;
use helm_value::{Value, ValueType};

/// The callable behind a registered command.
///
/// One uniform contract for native closures and scripted front-ends alike:
/// the handler receives the bound arguments (count already validated
/// against the signature) and returns the result value. The returned tag
/// must equal the signature's declared result type; the dispatcher
/// debug-asserts it.
pub type CommandFn = Box<dyn Fn(&[Value]) -> Value>;

/// A named, typed parameter (or result) declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub ty: ValueType,
}

impl ParamSpec {
    /// Declare a parameter.
    pub fn new(name: impl Into<String>, ty: ValueType) -> Self {
        ParamSpec {
            name: name.into(),
            ty,
        }
    }
}

/// A registered command: callable identity plus parameter and result specs.
///
/// Invariant: `required + optional == params.len()`, and the required
/// parameters form the prefix of `params`. Both counts fit in 16 bits,
/// enforced at registration.
pub struct CommandSignature {
    name: String,
    handler: CommandFn,
    result: ParamSpec,
    params: Vec<ParamSpec>,
    /// Parameter tags in declaration order, cached for the binder.
    types: SmallVec<[ValueType; MAX_ARGS_INLINE]>,
    required: u16,
}

impl CommandSignature {
    pub(crate) fn new(
        name: String,
        handler: CommandFn,
        params: Vec<ParamSpec>,
        required: u16,
        result: ParamSpec,
    ) -> Self {
        debug_assert!(usize::from(required) <= params.len());
        let types = params.iter().map(|p| p.ty).collect();
        CommandSignature {
            name,
            handler,
            result,
            params,
            types,
            required,
        }
    }

    /// The command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared result.
    pub fn result(&self) -> &ParamSpec {
        &self.result
    }

    /// All parameters, required prefix first.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Parameter tags in declaration order.
    pub fn param_types(&self) -> &[ValueType] {
        &self.types
    }

    /// Number of required parameters.
    pub fn required(&self) -> usize {
        usize::from(self.required)
    }

    /// Number of optional parameters.
    pub fn optional(&self) -> usize {
        self.params.len() - self.required()
    }

    /// Maximum accepted argument count.
    pub fn max_args(&self) -> usize {
        self.params.len()
    }

    /// Invoke the handler.
    ///
    /// The caller has already validated the argument count (and, on checked
    /// paths, the tags).
    pub(crate) fn invoke(&self, args: &[Value]) -> Value {
        let result = (self.handler)(args);
        debug_assert_eq!(
            result.value_type(),
            self.result.ty,
            "handler for [{}] changed the declared result tag",
            self.name
        );
        result
    }
}

impl fmt::Debug for CommandSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSignature")
            .field("name", &self.name)
            .field("result", &self.result)
            .field("params", &self.params)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sig() -> CommandSignature {
        CommandSignature::new(
            "add".into(),
            Box::new(|args| {
                let a = args[0].as_float().unwrap_or(0.0);
                let b = args[1].as_float().unwrap_or(0.0);
                Value::Float(a + b)
            }),
            vec![
                ParamSpec::new("a", ValueType::Float),
                ParamSpec::new("b", ValueType::Float),
                ParamSpec::new("c", ValueType::Float),
            ],
            2,
            ParamSpec::new("sum", ValueType::Float),
        )
    }

    #[test]
    fn counts_split_required_and_optional() {
        let sig = sig();
        assert_eq!(sig.required(), 2);
        assert_eq!(sig.optional(), 1);
        assert_eq!(sig.max_args(), 3);
    }

    #[test]
    fn param_types_follow_declaration_order() {
        let sig = sig();
        assert_eq!(
            sig.param_types(),
            &[ValueType::Float, ValueType::Float, ValueType::Float]
        );
    }

    #[test]
    fn invoke_runs_the_handler() {
        let sig = sig();
        let result = sig.invoke(&[Value::Float(1.0), Value::Float(2.5)]);
        assert_eq!(result, Value::Float(3.5));
    }
}
