//! Scalar leaf values.
//!
//! A [`Scalar`] is the leaf of a responsive value tree: the raw value a
//! branch function turns into a class-name fragment. Scalars carry the
//! loose-typing semantics of the systems that feed the compiler — numbers
//! and booleans stringify the way a template literal would, and a handful
//! of string shapes are significant to branch resolution:
//!
//! - `"default"` is the sentinel that collapses to a bare partial;
//! - falsy values (empty string, `0`, `false`) produce no class at all;
//! - `"[...]"` is the arbitrary-value escape hatch and bypasses any custom
//!   value transform.
//!
//! # Example
//!
//! ```
//! use windkit::types::Scalar;
//!
//! assert_eq!(Scalar::from(4).to_string(), "4");
//! assert_eq!(Scalar::from(0.5).to_string(), "0.5");
//! assert!(Scalar::from("").is_falsy());
//! assert!(Scalar::from("[3px]").is_arbitrary());
//! ```

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A raw leaf value: string, number, or boolean.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A string value.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A boolean value.
    Bool(bool),
}

impl Scalar {
    /// Whether this value is falsy (empty string, zero/NaN, or `false`).
    ///
    /// Falsy values compile to an empty fragment under the default branch
    /// rule.
    pub fn is_falsy(&self) -> bool {
        match self {
            Scalar::Text(s) => s.is_empty(),
            Scalar::Number(n) => *n == 0.0 || n.is_nan(),
            Scalar::Bool(b) => !b,
        }
    }

    /// Whether this is the `"default"` sentinel.
    pub fn is_default(&self) -> bool {
        matches!(self, Scalar::Text(s) if s == "default")
    }

    /// Whether this is a bracket-escaped arbitrary value (`"[...]"`).
    ///
    /// Arbitrary values are composed with the partial verbatim and skip any
    /// property-specific value transform.
    pub fn is_arbitrary(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.starts_with('[') && s.ends_with(']'))
    }

    /// Get the string content if this is a text scalar.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    /// Stringify the way the source ecosystem does: integral numbers print
    /// without a fractional part (`4`, not `4.0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 9e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Text(s) => serializer.serialize_str(s),
            // Integral numbers serialize without a fractional part, matching
            // how they stringify.
            Scalar::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 9e15 => {
                serializer.serialize_i64(*n as i64)
            }
            Scalar::Number(n) => serializer.serialize_f64(*n),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string, number, or boolean")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Scalar, E> {
                Ok(Scalar::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
                Ok(Scalar::Number(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
                Ok(Scalar::Number(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
                Ok(Scalar::Number(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
                Ok(Scalar::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
                Ok(Scalar::Text(v))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_source_stringification() {
        assert_eq!(Scalar::from("red-100").to_string(), "red-100");
        assert_eq!(Scalar::from(4).to_string(), "4");
        assert_eq!(Scalar::from(0.5).to_string(), "0.5");
        assert_eq!(Scalar::from(1.0).to_string(), "1");
        assert_eq!(Scalar::from(true).to_string(), "true");
        assert_eq!(Scalar::from(false).to_string(), "false");
    }

    #[test]
    fn falsy_values() {
        assert!(Scalar::from("").is_falsy());
        assert!(Scalar::from(0).is_falsy());
        assert!(Scalar::from(false).is_falsy());
        assert!(Scalar::Number(f64::NAN).is_falsy());

        assert!(!Scalar::from("0").is_falsy());
        assert!(!Scalar::from(1).is_falsy());
        assert!(!Scalar::from(true).is_falsy());
    }

    #[test]
    fn default_sentinel() {
        assert!(Scalar::from("default").is_default());
        assert!(!Scalar::from("defaults").is_default());
        assert!(!Scalar::from(1).is_default());
    }

    #[test]
    fn arbitrary_escape() {
        assert!(Scalar::from("[3px]").is_arbitrary());
        assert!(Scalar::from("[]").is_arbitrary());
        assert!(!Scalar::from("[3px").is_arbitrary());
        assert!(!Scalar::from("3px]").is_arbitrary());
        assert!(!Scalar::from("[").is_arbitrary());
        assert!(!Scalar::from(4).is_arbitrary());
    }

    #[test]
    fn deserialize_json_literals() {
        assert_eq!(
            serde_json::from_str::<Scalar>("\"flex\"").unwrap(),
            Scalar::from("flex")
        );
        assert_eq!(serde_json::from_str::<Scalar>("4").unwrap(), Scalar::from(4));
        assert_eq!(
            serde_json::from_str::<Scalar>("0.5").unwrap(),
            Scalar::from(0.5)
        );
        assert_eq!(
            serde_json::from_str::<Scalar>("true").unwrap(),
            Scalar::from(true)
        );
        assert!(serde_json::from_str::<Scalar>("null").is_err());
    }
}
