//! Signature-directed tokenization and binding.
//!
//! The binder never guesses a token's type from its shape: the command's
//! registered parameter list is consulted *before* each token is scanned,
//! and the declared [`ValueType`] selects the scan rule. This is what lets
//! a string parameter swallow `"two words"` as one argument while a float
//! parameter rejects it.
//!
//! Binding consumes at most `params.len()` tokens and stops early at end of
//! input or on the first conversion failure. Surplus text is not an error
//! at this layer; it is handed back to the caller untouched.

use smallvec::SmallVec;

use helm_value::{
    parse_bool, parse_float, parse_s32, parse_s64, parse_u32, parse_u64, parse_vector, Value,
    ValueType,
};

use crate::cursor::Cursor;
use crate::errors::BindError;

/// Inline capacity for bound argument lists.
///
/// Commands rarely declare more than a handful of parameters; the list
/// spills to the heap past this.
pub const MAX_ARGS_INLINE: usize = 8;

/// A bound argument sequence.
pub type ArgList = SmallVec<[Value; MAX_ARGS_INLINE]>;

/// Split a line into its command name and the argument remainder.
///
/// The name is the maximal run of non-whitespace, non-line-ending
/// characters at the first non-whitespace position. Returns `None` for a
/// blank line.
pub fn split_name(line: &str) -> Option<(&str, &str)> {
    let mut cursor = Cursor::new(line);
    cursor.eat_blanks();
    if cursor.is_eof() {
        return None;
    }
    let start = cursor.pos();
    cursor.eat_token();
    Some((cursor.slice_from(start), cursor.remainder()))
}

/// Bind the argument remainder of a line against a parameter list.
///
/// `required` is the length of the required prefix of `params`. On success
/// returns the bound values (between `required` and `params.len()` of them)
/// and the unconsumed remainder of the line.
pub fn bind_args<'a>(
    rest: &'a str,
    params: &[ValueType],
    required: usize,
) -> Result<(ArgList, &'a str), BindError> {
    debug_assert!(required <= params.len());

    let mut cursor = Cursor::new(rest);
    let mut args = ArgList::new();

    for (index, &ty) in params.iter().enumerate() {
        cursor.eat_whitespace();
        if cursor.at_line_end() {
            break;
        }
        let value = match ty {
            ValueType::Str => scan_string(&mut cursor, index)?,
            ValueType::Vector => scan_vector(&mut cursor, index)?,
            _ => scan_scalar(&mut cursor, ty, index)?,
        };
        args.push(value);
    }

    if args.len() < required {
        return Err(BindError::TooFewArguments {
            required,
            optional: params.len() - required,
            found: args.len(),
        });
    }

    cursor.eat_whitespace();
    Ok((args, cursor.remainder()))
}

/// Scan one string token.
///
/// Unquoted tokens run to the next whitespace. A token opening with `"`
/// runs to the matching quote; a doubled `""` inside is an escaped literal
/// quote and is collapsed during the scan.
fn scan_string(cursor: &mut Cursor<'_>, index: usize) -> Result<Value, BindError> {
    if cursor.current() != b'"' {
        let start = cursor.pos();
        cursor.eat_token();
        return Ok(Value::str(cursor.slice_from(start)));
    }

    cursor.advance();
    let mut text = String::new();
    loop {
        let chunk_start = cursor.pos();
        if !cursor.skip_to(b'"') {
            return Err(BindError::UnterminatedQuote { index });
        }
        text.push_str(cursor.slice(chunk_start, cursor.pos()));
        if cursor.peek() == b'"' {
            // Doubled quote: one literal quote character.
            text.push('"');
            cursor.advance_n(2);
        } else {
            cursor.advance();
            return Ok(Value::Str(text));
        }
    }
}

/// Scan one vector token: an opening bracket through its matching close.
///
/// Whitespace inside the brackets is allowed, so the token is delimited by
/// the bracket pair rather than by whitespace.
fn scan_vector(cursor: &mut Cursor<'_>, index: usize) -> Result<Value, BindError> {
    let close = match cursor.current() {
        b'(' => b')',
        b'{' => b'}',
        _ => {
            // Not a bracketed token; consume to whitespace so the
            // diagnostic names what was actually seen.
            let start = cursor.pos();
            cursor.eat_token();
            return Err(conversion(cursor.slice_from(start), index));
        }
    };

    let start = cursor.pos();
    cursor.advance();
    if !cursor.skip_to(close) {
        return Err(conversion(cursor.slice_from(start), index));
    }
    cursor.advance();
    let token = cursor.slice_from(start);
    parse_vector(token)
        .map(Value::Vector)
        .ok_or_else(|| conversion(token, index))
}

/// Scan one whitespace-delimited token and convert it to a scalar type.
fn scan_scalar(cursor: &mut Cursor<'_>, ty: ValueType, index: usize) -> Result<Value, BindError> {
    let start = cursor.pos();
    cursor.eat_token();
    let token = cursor.slice_from(start);
    let value = match ty {
        ValueType::Float => parse_float(token).map(Value::Float),
        ValueType::S32 => parse_s32(token).map(Value::S32),
        ValueType::U32 => parse_u32(token).map(Value::U32),
        ValueType::S64 => parse_s64(token).map(Value::S64),
        ValueType::U64 => parse_u64(token).map(Value::U64),
        ValueType::Bool => parse_bool(token).map(Value::Bool),
        ValueType::Str | ValueType::Vector => None,
    };
    value.ok_or_else(|| conversion(token, index))
}

fn conversion(token: &str, index: usize) -> BindError {
    BindError::Conversion {
        index,
        token: token.to_owned(),
    }
}
