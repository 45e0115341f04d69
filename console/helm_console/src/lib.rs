//! Runtime command console: registry, dispatcher, and result stack.
//!
//! External code registers named, strongly-typed commands on a [`Console`]
//! and invokes them either with pre-typed arguments ([`Console::execute`])
//! or by evaluating a line of text ([`Console::evaluate`]). Trigger
//! payloads ([`Console::on_trigger`]) additionally compose commands through
//! the result stack: `>` markers push a line's serialized result, `<`
//! markers pop entries into later lines, `^` expands to the sender
//! identity.
//!
//! ```
//! use helm_console::{Console, ParamSpec};
//! use helm_value::{Value, ValueType};
//!
//! let mut console = Console::new();
//! console
//!     .register(
//!         "Add",
//!         Box::new(|args| {
//!             let sum: f32 = args.iter().filter_map(Value::as_float).sum();
//!             Value::Float(sum)
//!         }),
//!         vec![
//!             ParamSpec::new("a", ValueType::Float),
//!             ParamSpec::new("b", ValueType::Float),
//!         ],
//!         vec![],
//!         ParamSpec::new("sum", ValueType::Float),
//!     )
//!     .unwrap();
//!
//! assert_eq!(console.evaluate("Add 1 2"), Ok(Value::Float(3.0)));
//! ```

mod console;
mod errors;
mod registry;
mod signature;
mod stack;
mod trigger;

pub use console::Console;
pub use errors::{EvalError, RegisterError};
pub use registry::Registry;
pub use signature::{CommandFn, CommandSignature, ParamSpec};
pub use stack::ResultStack;
pub use trigger::sender_literal;

// Re-export the value types: every registration and handler needs them.
pub use helm_value::{Value, ValueType, Vector3};
