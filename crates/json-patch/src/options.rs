use serde::{Deserialize, Serialize};
use serde_json::Number;

/// How two JSON numbers are compared.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberMode {
    /// Numbers are equal when they denote the same value: `1`, `1.0` and `1e0` match.
    #[default]
    Lenient,
    /// Integers and floats never match each other, even when numerically equal.
    Strict,
}

impl NumberMode {
    pub(crate) fn equal(self, a: &Number, b: &Number) -> bool {
        match self {
            NumberMode::Strict => a == b,
            NumberMode::Lenient => {
                if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                    return a == b;
                }
                if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                    return a == b;
                }
                match (a.as_f64(), b.as_f64()) {
                    (Some(x), Some(y)) if a.is_f64() && b.is_f64() => x == y,
                    (Some(x), _) if a.is_f64() => float_equals_integer(x, b),
                    (_, Some(y)) if b.is_f64() => float_equals_integer(y, a),
                    // a negative integer against one above i64::MAX
                    _ => false,
                }
            }
        }
    }
}

/// Exact comparison; the integer is never rounded through `f64`.
fn float_equals_integer(float: f64, integer: &Number) -> bool {
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
    const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

    if float.fract() != 0.0 {
        return false;
    }
    if let Some(integer) = integer.as_i64() {
        return (-TWO_POW_63..TWO_POW_63).contains(&float) && float as i64 == integer;
    }
    if let Some(integer) = integer.as_u64() {
        return (0.0..TWO_POW_64).contains(&float) && float as u64 == integer;
    }
    false
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    pub numbers: NumberMode,
}

impl DiffOptions {
    #[must_use]
    pub fn numbers(self, numbers: NumberMode) -> Self {
        Self { numbers }
    }

    pub fn strict() -> Self {
        Self::default().numbers(NumberMode::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(text: &str) -> Number {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn lenient_compares_values() {
        let mode = NumberMode::Lenient;
        assert!(mode.equal(&number("1"), &number("1.0")));
        assert!(mode.equal(&number("1"), &number("1e0")));
        assert!(mode.equal(&number("-3"), &number("-3.00")));
        assert!(mode.equal(&number("18446744073709551615"), &number("18446744073709551615")));
        assert!(!mode.equal(&number("1"), &number("1.5")));
        assert!(!mode.equal(&number("-1"), &number("18446744073709551615")));
        // exact integers beyond 2^53 must not collapse through f64
        assert!(!mode.equal(&number("9007199254740993"), &number("9007199254740992")));
        assert!(!mode.equal(&number("9007199254740993"), &number("9007199254740992.0")));
        assert!(!mode.equal(&number("9007199254740992.0"), &number("9007199254740993")));
        assert!(mode.equal(&number("9007199254740992"), &number("9007199254740992.0")));
        assert!(!mode.equal(
            &number("18446744073709551615"),
            &number("18446744073709551616.0")
        ));
        assert!(mode.equal(&number("-9223372036854775808"), &number("-9.223372036854775808e18")));
        assert!(!mode.equal(&number("-1"), &number("-1.5")));
    }

    #[test]
    fn strict_compares_representation() {
        let mode = NumberMode::Strict;
        assert!(mode.equal(&number("1"), &number("1")));
        assert!(mode.equal(&number("2.5"), &number("2.50")));
        assert!(!mode.equal(&number("1"), &number("1.0")));
    }

    #[test]
    fn options_from_json() {
        let options: DiffOptions = serde_json::from_str(r#"{"numbers":"strict"}"#).unwrap();
        assert_eq!(options, DiffOptions::strict());
        let options: DiffOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.numbers, NumberMode::Lenient);
    }
}
