//! Raw numeric fields as the caller stores them, and the lenient parse into `f64`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric field exactly as entered.
///
/// Fields are parsed lazily: an edit stores whatever was typed, and every
/// recomputation decides again whether the value is usable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// Nothing entered
    #[default]
    Missing,
    /// An already-numeric value
    Number(f64),
    /// Text as typed, possibly not a number at all
    Text(String),
}

impl RawNumber {
    /// Parse into a finite number, `None` otherwise.
    #[inline]
    pub fn parse(&self) -> Option<f64> {
        parse_num(self)
    }
}

/// Parse a raw field into a finite `f64`.
///
/// Surrounding whitespace is ignored. Empty text, `NaN`, infinities and anything
/// that is not a decimal literal yield `None`.
pub fn parse_num(raw: &RawNumber) -> Option<f64> {
    match raw {
        RawNumber::Missing => None,
        RawNumber::Number(n) => n.is_finite().then_some(*n),
        RawNumber::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            // "inf" and "NaN" are accepted by the std parser; the finiteness filter drops them
            text.parse::<f64>().ok().filter(|n| n.is_finite())
        }
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<Option<f64>> for RawNumber {
    fn from(value: Option<f64>) -> Self {
        value.map_or(RawNumber::Missing, RawNumber::Number)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

impl From<String> for RawNumber {
    fn from(value: String) -> Self {
        RawNumber::Text(value)
    }
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawNumber::Missing => Ok(()),
            RawNumber::Number(n) => write!(f, "{}", n),
            RawNumber::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers_and_text() {
        assert_eq!(RawNumber::from(0.1).parse(), Some(0.1));
        assert_eq!(RawNumber::from("145.000").parse(), Some(145.0));
        assert_eq!(RawNumber::from("  1e3 ").parse(), Some(1000.0));
        assert_eq!(RawNumber::from("-0.5").parse(), Some(-0.5));
    }

    #[test]
    fn test_unusable_values_are_absent() {
        assert_eq!(RawNumber::Missing.parse(), None);
        assert_eq!(RawNumber::from("").parse(), None);
        assert_eq!(RawNumber::from("   ").parse(), None);
        assert_eq!(RawNumber::from("abc").parse(), None);
        assert_eq!(RawNumber::from("1.2.3").parse(), None);
        assert_eq!(RawNumber::from("inf").parse(), None);
        assert_eq!(RawNumber::from("NaN").parse(), None);
        assert_eq!(RawNumber::from(f64::NAN).parse(), None);
        assert_eq!(RawNumber::from(f64::INFINITY).parse(), None);
    }

    #[test]
    fn test_untagged_serde() {
        let values: Vec<RawNumber> = serde_json::from_str(r#"[0.1, "0.2", null, "x"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                RawNumber::Number(0.1),
                RawNumber::Text("0.2".to_string()),
                RawNumber::Missing,
                RawNumber::Text("x".to_string()),
            ]
        );
        assert_eq!(serde_json::to_string(&RawNumber::Missing).unwrap(), "null");
    }
}
