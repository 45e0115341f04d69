//! Text front-end for the Helm console: marker expansion and
//! signature-directed argument binding.
//!
//! A trigger line goes through two passes before dispatch:
//!
//! 1. [`expand`] rewrites the raw payload — it counts leading push markers
//!    (`>`), substitutes the sender identity for `^`, and splices popped
//!    result-stack entries in place of `<`.
//! 2. [`split_name`] and [`bind_args`] tokenize the expanded line. Binding
//!    is signature-directed: the declared parameter type selects the scan
//!    rule before the token is read, so `"a b"` is one string argument to a
//!    string parameter and a conversion error for a float one.
//!
//! Tokens are scanned non-destructively and bound into owned
//! [`Value`](helm_value::Value)s; nothing aliases the input line.

mod bind;
mod cursor;
mod errors;
mod expand;

pub use bind::{bind_args, split_name, ArgList, MAX_ARGS_INLINE};
pub use cursor::Cursor;
pub use errors::{BindError, ExpandError};
pub use expand::{expand, Expanded, ID_MARKER, MAX_LINE_LEN, POP_MARKER, PUSH_MARKER};
