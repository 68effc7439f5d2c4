//! Serde adapter for payback periods.
//!
//! A bottleneck that saves nothing never pays back, which is modelled as
//! `f64::INFINITY`. JSON numbers cannot carry infinity (serde_json would
//! write `null` and then refuse to read it back), so infinite values travel
//! as the string `"Infinity"`.
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Row {
//!     #[serde(with = "bizdoctor::core::payback")]
//!     months: f64,
//! }
//!
//! let json = serde_json::to_string(&Row { months: f64::INFINITY }).unwrap();
//! assert_eq!(json, r#"{"months":"Infinity"}"#);
//! let back: Row = serde_json::from_str(&json).unwrap();
//! assert!(back.months.is_infinite());
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

const INFINITY_LABEL: &str = "Infinity";

pub fn serialize<S>(months: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if months.is_infinite() && months.is_sign_positive() {
        serializer.serialize_str(INFINITY_LABEL)
    } else {
        serializer.serialize_f64(*months)
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Number(months) => Ok(months),
        Repr::Text(text) if text.eq_ignore_ascii_case(INFINITY_LABEL) => Ok(f64::INFINITY),
        Repr::Text(text) => Err(D::Error::custom(format!(
            "expected a number of months or \"{INFINITY_LABEL}\", got \"{text}\""
        ))),
    }
}

/// Human-readable payback, with infinity rendered as "no payback".
pub fn describe(months: f64) -> String {
    if months.is_finite() {
        format!("{months:.1} months")
    } else {
        "no payback".to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Row {
        #[serde(with = "super")]
        months: f64,
    }

    #[test]
    fn test_finite_value_is_a_plain_number() {
        let json = serde_json::to_string(&Row { months: 6.5 }).unwrap();
        assert_eq!(json, r#"{"months":6.5}"#);
    }

    #[test]
    fn test_integer_input_is_accepted() {
        let row: Row = serde_json::from_str(r#"{"months":12}"#).unwrap();
        assert_eq!(row.months, 12.0);
    }

    #[test]
    fn test_unknown_text_is_rejected() {
        assert!(serde_json::from_str::<Row>(r#"{"months":"soon"}"#).is_err());
    }

    #[test]
    fn test_describe() {
        assert_eq!(super::describe(6.36), "6.4 months");
        assert_eq!(super::describe(f64::INFINITY), "no payback");
    }
}
