//! The result stack: serialized values passed between evaluations.
//!
//! A trigger line prefixed with `>` pushes its serialized result here; a
//! later line's `<` marker pops the most recent entry into an argument
//! slot. Entries are plain text in the literal format of
//! [`Value`](helm_value::Value)'s `Display`.
//!
//! Underflow is not fatal: popping an empty stack returns `None` and the
//! console surfaces it as a recoverable evaluation error.

/// LIFO stack of serialized result values.
#[derive(Clone, Debug, Default)]
pub struct ResultStack {
    entries: Vec<String>,
}

impl ResultStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        ResultStack {
            entries: Vec::new(),
        }
    }

    /// Push a serialized value.
    pub fn push(&mut self, value: String) {
        self.entries.push(value);
    }

    /// Pop the most recent entry, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pops_in_lifo_order() {
        let mut stack = ResultStack::new();
        stack.push("first".into());
        stack.push("second".into());

        assert_eq!(stack.pop(), Some("second".into()));
        assert_eq!(stack.pop(), Some("first".into()));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut stack = ResultStack::new();
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn len_tracks_pushes_and_pops() {
        let mut stack = ResultStack::new();
        assert!(stack.is_empty());
        stack.push("42".into());
        assert_eq!(stack.len(), 1);
        stack.pop();
        assert!(stack.is_empty());
    }

    #[test]
    fn clear_drops_residual_entries() {
        let mut stack = ResultStack::new();
        stack.push("a".into());
        stack.push("b".into());
        stack.clear();
        assert!(stack.is_empty());
    }
}
