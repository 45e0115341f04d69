//! Trigger bridge: externally delivered command payloads.
//!
//! A trigger carries a sender identity and an event text. The bridge
//! expands the text's markers against the console's own result stack,
//! evaluates the expanded line, and performs the requested result pushes.

use helm_parse::expand;
use helm_value::Value;

use crate::console::Console;
use crate::errors::EvalError;

/// Literal form of a sender identity: fixed-width hex, the same rendering
/// a `u64` result value gets. An expanded `^` therefore parses cleanly as
/// a `u64` argument.
pub fn sender_literal(sender_id: u64) -> String {
    format!("0x{sender_id:016X}")
}

impl Console {
    /// Process one trigger payload.
    ///
    /// Leading `>` markers request one result push each; `^` expands to the
    /// sender identity and `<` pops the most recent stack entry in place.
    /// On success the serialized result is pushed once per requested push
    /// and returned. On failure nothing is pushed; pops that completed
    /// before the failure stay consumed.
    pub fn on_trigger(&mut self, sender_id: u64, event: &str) -> Result<Value, EvalError> {
        let sender = sender_literal(sender_id);
        let stack = &mut self.stack;
        let expanded = expand(event, &sender, || stack.pop())?;

        let result = self.evaluate(&expanded.line)?;
        for _ in 0..expanded.pushes {
            self.stack.push(result.to_string());
        }
        Ok(result)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::signature::ParamSpec;
    use helm_value::ValueType;
    use pretty_assertions::assert_eq;

    fn console_with_echo_u64() -> Console {
        let mut console = Console::new();
        console
            .register(
                "EchoId",
                Box::new(|args| args[0].clone()),
                vec![ParamSpec::new("id", ValueType::U64)],
                vec![],
                ParamSpec::new("id", ValueType::U64),
            )
            .unwrap();
        console
    }

    #[test]
    fn sender_literal_is_fixed_width_hex() {
        assert_eq!(sender_literal(0x1234), "0x0000000000001234");
        assert_eq!(sender_literal(u64::MAX), "0xFFFFFFFFFFFFFFFF");
    }

    #[test]
    fn identity_marker_round_trips_through_u64_param() {
        let mut console = console_with_echo_u64();
        let result = console.on_trigger(0xDEAD_BEEF, "EchoId ^").unwrap();
        assert_eq!(result, Value::U64(0xDEAD_BEEF));
    }

    #[test]
    fn push_markers_push_serialized_result() {
        let mut console = console_with_echo_u64();
        console.on_trigger(7, ">> EchoId ^").unwrap();

        assert_eq!(console.stack().len(), 2);
        assert_eq!(console.stack_mut().pop().as_deref(), Some("0x0000000000000007"));
        assert_eq!(console.stack_mut().pop().as_deref(), Some("0x0000000000000007"));
    }

    #[test]
    fn failed_evaluation_pushes_nothing() {
        let mut console = console_with_echo_u64();
        let err = console.on_trigger(7, "> EchoId notanid").unwrap_err();
        assert!(matches!(err, EvalError::Parse { .. }));
        assert!(console.stack().is_empty());
    }

    #[test]
    fn pop_marker_on_empty_stack_is_recoverable() {
        let mut console = console_with_echo_u64();
        let err = console.on_trigger(7, "EchoId <").unwrap_err();
        assert_eq!(err, EvalError::StackEmpty);
        // Console still works afterwards.
        assert!(console.on_trigger(7, "EchoId ^").is_ok());
    }
}
