//! Literal conversion routines, one per value tag.
//!
//! Each routine converts a whole token: trailing garbage is a failure, not
//! a shorter match. Integer literals auto-detect their base from a `0x`
//! (hex) or `0b` (binary) prefix and default to decimal. Signed types
//! additionally accept a leading `-` or `+`.
//!
//! All routines return `Option` — the binder turns `None` into a
//! conversion error naming the offending argument.

use crate::vector::Vector3;

/// Split an optional leading sign off a token.
///
/// Returns `(negative, rest)`.
fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

/// Split a base prefix off a token.
///
/// Returns `(digits, radix)`: 16 for `0x`/`0X`, 2 for `0b`/`0B`,
/// 10 otherwise.
fn split_radix(s: &str) -> (&str, u32) {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        (bin, 2)
    } else {
        (s, 10)
    }
}

/// Parse a signed integer within `[min, max]`, any supported base.
fn parse_signed(s: &str, min: i128, max: i128) -> Option<i128> {
    let (negative, rest) = split_sign(s);
    let (digits, radix) = split_radix(rest);
    if digits.is_empty() {
        return None;
    }
    let magnitude = i128::from(u64::from_str_radix(digits, radix).ok()?);
    let value = if negative { -magnitude } else { magnitude };
    (min..=max).contains(&value).then_some(value)
}

/// Parse a whole token as an `f32`.
pub fn parse_float(s: &str) -> Option<f32> {
    if s.is_empty() {
        return None;
    }
    s.parse::<f32>().ok()
}

/// Parse a whole token as an `i32` (decimal, `0x` hex, or `0b` binary).
#[allow(
    clippy::cast_possible_truncation,
    reason = "parse_signed bounds the value to the i32 range"
)]
pub fn parse_s32(s: &str) -> Option<i32> {
    parse_signed(s, i128::from(i32::MIN), i128::from(i32::MAX)).map(|v| v as i32)
}

/// Parse a whole token as an `i64` (decimal, `0x` hex, or `0b` binary).
#[allow(
    clippy::cast_possible_truncation,
    reason = "parse_signed bounds the value to the i64 range"
)]
pub fn parse_s64(s: &str) -> Option<i64> {
    parse_signed(s, i128::from(i64::MIN), i128::from(i64::MAX)).map(|v| v as i64)
}

/// Parse a whole token as a `u32` (decimal, `0x` hex, or `0b` binary).
///
/// No sign is accepted, not even `+`.
pub fn parse_u32(s: &str) -> Option<u32> {
    let (digits, radix) = split_radix(s);
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}

/// Parse a whole token as a `u64` (decimal, `0x` hex, or `0b` binary).
///
/// This is the routine that reads back serialized sender identities
/// (`0x%016X` form).
pub fn parse_u64(s: &str) -> Option<u64> {
    let (digits, radix) = split_radix(s);
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

/// Parse a whole token as a `bool`.
///
/// Accepts `true`/`false` case-insensitively, or any unsigned integer
/// literal (non-zero reads as `true`).
pub fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        parse_u64(s).map(|v| v != 0)
    }
}

/// Parse a whole token as a [`Vector3`].
///
/// Grammar: `(x, y, z)` or `{x, y, z}` — exactly three comma-separated
/// float components, whitespace around components insignificant. Bracket
/// styles must not be mixed.
pub fn parse_vector(s: &str) -> Option<Vector3> {
    let s = s.trim();
    let inner = s
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .or_else(|| s.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')))?;

    let mut components = inner.split(',');
    let x = parse_float(components.next()?.trim())?;
    let y = parse_float(components.next()?.trim())?;
    let z = parse_float(components.next()?.trim())?;
    if components.next().is_some() {
        return None;
    }
    Some(Vector3::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn float_accepts_plain_and_signed() {
        assert_eq!(parse_float("1.5"), Some(1.5));
        assert_eq!(parse_float("-0.25"), Some(-0.25));
        assert_eq!(parse_float("3"), Some(3.0));
    }

    #[test]
    fn float_rejects_trailing_garbage() {
        assert_eq!(parse_float("1.5abc"), None);
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("notanumber"), None);
    }

    #[test]
    fn s32_decimal_and_bounds() {
        assert_eq!(parse_s32("42"), Some(42));
        assert_eq!(parse_s32("-42"), Some(-42));
        assert_eq!(parse_s32("+7"), Some(7));
        assert_eq!(parse_s32("2147483647"), Some(i32::MAX));
        assert_eq!(parse_s32("-2147483648"), Some(i32::MIN));
        assert_eq!(parse_s32("2147483648"), None);
    }

    #[test]
    fn s32_base_prefixes() {
        assert_eq!(parse_s32("0x10"), Some(16));
        assert_eq!(parse_s32("0X10"), Some(16));
        assert_eq!(parse_s32("-0x10"), Some(-16));
        assert_eq!(parse_s32("0b101"), Some(5));
    }

    #[test]
    fn s64_bounds() {
        assert_eq!(parse_s64("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_s64("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_s64("9223372036854775808"), None);
    }

    #[test]
    fn u32_rejects_sign() {
        assert_eq!(parse_u32("42"), Some(42));
        assert_eq!(parse_u32("-1"), None);
        assert_eq!(parse_u32("+1"), None);
        assert_eq!(parse_u32("4294967295"), Some(u32::MAX));
        assert_eq!(parse_u32("4294967296"), None);
    }

    #[test]
    fn u64_reads_fixed_width_hex() {
        assert_eq!(parse_u64("0x0000000000001234"), Some(0x1234));
        assert_eq!(parse_u64("0xFFFFFFFFFFFFFFFF"), Some(u64::MAX));
        assert_eq!(parse_u64("18446744073709551615"), Some(u64::MAX));
    }

    #[test]
    fn empty_prefix_is_not_a_number() {
        assert_eq!(parse_u32("0x"), None);
        assert_eq!(parse_s32("0b"), None);
        assert_eq!(parse_s32("-"), None);
    }

    #[test]
    fn bool_literals_case_insensitive() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("False"), Some(false));
    }

    #[test]
    fn bool_from_integer() {
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("0x10"), Some(true));
        assert_eq!(parse_bool("yes"), None);
    }

    #[test]
    fn vector_paren_form() {
        assert_eq!(
            parse_vector("(1, 2.5, -3)"),
            Some(Vector3::new(1.0, 2.5, -3.0))
        );
        assert_eq!(parse_vector("(1,2,3)"), Some(Vector3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn vector_brace_form() {
        assert_eq!(
            parse_vector("{0.5, 0, 1}"),
            Some(Vector3::new(0.5, 0.0, 1.0))
        );
    }

    #[test]
    fn vector_rejects_malformed() {
        assert_eq!(parse_vector("(1, 2)"), None);
        assert_eq!(parse_vector("(1, 2, 3, 4)"), None);
        assert_eq!(parse_vector("(1, 2, 3"), None);
        assert_eq!(parse_vector("(1, 2, x)"), None);
        assert_eq!(parse_vector("{1, 2, 3)"), None);
        assert_eq!(parse_vector("1, 2, 3"), None);
    }

    // === Format/parse round-trips ===

    mod roundtrip {
        use super::*;
        use crate::value::Value;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn s32_roundtrip(v in any::<i32>()) {
                let text = Value::S32(v).to_string();
                prop_assert_eq!(parse_s32(&text), Some(v));
            }

            #[test]
            fn u32_roundtrip(v in any::<u32>()) {
                let text = Value::U32(v).to_string();
                prop_assert_eq!(parse_u32(&text), Some(v));
            }

            #[test]
            fn s64_roundtrip(v in any::<i64>()) {
                let text = Value::S64(v).to_string();
                prop_assert_eq!(parse_s64(&text), Some(v));
            }

            #[test]
            fn u64_roundtrip_through_hex(v in any::<u64>()) {
                let text = Value::U64(v).to_string();
                prop_assert_eq!(parse_u64(&text), Some(v));
            }

            #[test]
            fn float_roundtrip(v in proptest::num::f32::NORMAL | proptest::num::f32::ZERO) {
                let text = Value::Float(v).to_string();
                prop_assert_eq!(parse_float(&text), Some(v));
            }

            #[test]
            fn vector_roundtrip(
                x in proptest::num::f32::NORMAL | proptest::num::f32::ZERO,
                y in proptest::num::f32::NORMAL | proptest::num::f32::ZERO,
                z in proptest::num::f32::NORMAL | proptest::num::f32::ZERO,
            ) {
                let v = Vector3::new(x, y, z);
                let text = Value::Vector(v).to_string();
                prop_assert_eq!(parse_vector(&text), Some(v));
            }
        }
    }
}
