//! Typed values exchanged between the console tokenizer, dispatcher, and
//! result stack.
//!
//! The value set is closed: eight tags, no user-defined types. Each tag has
//! a literal grammar (see [`literal`]) used both when binding text arguments
//! and when serializing results onto the result stack. The two directions
//! round-trip: formatting a value and re-parsing it with the same declared
//! type yields an equal value.
//!
//! String payloads are owned. The console never hands out references into a
//! shared parse buffer, so values stay valid across later evaluations.

mod literal;
mod value;
mod vector;

pub use literal::{parse_bool, parse_float, parse_s32, parse_s64, parse_u32, parse_u64, parse_vector};
pub use value::{Value, ValueType};
pub use vector::Vector3;
