//! Marker expansion: the pass that runs before tokenization.
//!
//! A trigger payload may open with push markers and contain identity and
//! pop markers anywhere in its body:
//!
//! ```text
//! > > SetTarget ^ <
//! ```
//!
//! Here two pushes are requested, `^` becomes the sender identity, and `<`
//! becomes the most recent result-stack entry (consumed). Markers have no
//! escape; a literal `<` or `^` cannot appear in a trigger body.

use crate::errors::ExpandError;

/// Requests one result push when leading a payload.
pub const PUSH_MARKER: char = '>';
/// Splices the most recent result-stack entry, consuming it.
pub const POP_MARKER: char = '<';
/// Splices the sender identity.
pub const ID_MARKER: char = '^';

/// Maximum expanded line length, in bytes.
///
/// Exceeding it fails with [`ExpandError::LineTooLong`] rather than
/// truncating.
pub const MAX_LINE_LEN: usize = 4096;

/// The result of marker expansion: a command line ready for tokenization
/// plus the number of result pushes requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expanded {
    /// Number of leading push markers counted.
    pub pushes: u32,
    /// The fully expanded command line.
    pub line: String,
}

/// Expand a raw trigger payload.
///
/// `pop` supplies result-stack entries for pop markers, most recent first;
/// it returns `None` when the stack is empty, which aborts the expansion
/// with [`ExpandError::StackEmpty`]. Entries consumed before the failure
/// stay consumed — mirroring that only already-completed pops are side
/// effects of a failed line.
pub fn expand(
    payload: &str,
    sender_id: &str,
    mut pop: impl FnMut() -> Option<String>,
) -> Result<Expanded, ExpandError> {
    let mut pushes = 0u32;
    let mut rest = payload;

    // Leading push markers, interleaved with whitespace.
    let mut chars = payload.char_indices();
    for (at, c) in &mut chars {
        match c {
            PUSH_MARKER => pushes += 1,
            ' ' | '\t' => {}
            _ => {
                rest = &payload[at..];
                break;
            }
        }
        rest = "";
    }

    let mut line = String::with_capacity(rest.len());
    for c in rest.chars() {
        match c {
            ID_MARKER => line.push_str(sender_id),
            POP_MARKER => {
                let entry = pop().ok_or(ExpandError::StackEmpty)?;
                line.push_str(&entry);
            }
            _ => line.push(c),
        }
        if line.len() > MAX_LINE_LEN {
            return Err(ExpandError::LineTooLong {
                limit: MAX_LINE_LEN,
            });
        }
    }

    Ok(Expanded { pushes, line })
}
