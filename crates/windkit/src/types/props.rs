//! Prop objects and responsive value trees.
//!
//! A [`Props`] object maps prop names to [`ResponsiveValue`] trees. A value
//! is either a scalar leaf or a mapping from qualifier names (breakpoints,
//! modes, interaction states) to further values. Both maps are
//! insertion-ordered: the order keys were written in is the order class
//! tokens come out in, which is a strict output invariant of the compiler.
//!
//! # Example
//!
//! ```
//! use windkit::prelude::*;
//!
//! let props = Props::new()
//!     .with("display", "flex")
//!     .with("bg", ResponsiveValue::scoped([("_", "black"), ("md", "red-100")]));
//!
//! assert_eq!(props.len(), 2);
//! assert!(props.get("bg").is_some());
//! ```

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::fmt;

use crate::error::{Error, Result};

use super::Scalar;

/// A responsive value: a scalar leaf, or a mapping from qualifier names to
/// nested values.
///
/// Nesting depth is unbounded at runtime; by convention authors stay within
/// two or three levels (`{md: {dark: "zinc-900"}}`).
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsiveValue {
    /// A scalar leaf.
    Value(Scalar),
    /// A qualifier-scoped mapping, iterated in insertion order.
    Scoped(IndexMap<String, ResponsiveValue>),
}

impl ResponsiveValue {
    /// Build a qualifier-scoped value from ordered entries.
    ///
    /// ```
    /// use windkit::types::ResponsiveValue;
    ///
    /// let value = ResponsiveValue::scoped([("_", "block"), ("md", "flex")]);
    /// assert!(!value.is_scalar());
    /// ```
    pub fn scoped<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<ResponsiveValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Scoped(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Whether this value is a scalar leaf.
    pub fn is_scalar(&self) -> bool {
        matches!(self, ResponsiveValue::Value(_))
    }

    /// Get the scalar leaf if this is one.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            ResponsiveValue::Value(s) => Some(s),
            ResponsiveValue::Scoped(_) => None,
        }
    }

    /// Convert a JSON value into a responsive value.
    ///
    /// `property` names the prop being converted, for error reporting.
    fn from_json(property: &str, value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::String(s) => Ok(Self::Value(Scalar::Text(s.clone()))),
            JsonValue::Bool(b) => Ok(Self::Value(Scalar::Bool(*b))),
            JsonValue::Number(n) => {
                let n = n
                    .as_f64()
                    .ok_or_else(|| Error::invalid_value(property, "unrepresentable number"))?;
                Ok(Self::Value(Scalar::Number(n)))
            }
            JsonValue::Object(map) => {
                let mut entries = IndexMap::with_capacity(map.len());
                for (qualifier, child) in map {
                    entries.insert(qualifier.clone(), Self::from_json(property, child)?);
                }
                Ok(Self::Scoped(entries))
            }
            JsonValue::Null | JsonValue::Array(_) => Err(Error::invalid_value(
                property,
                "expected a scalar or a map of qualifiers",
            )),
        }
    }
}

impl From<Scalar> for ResponsiveValue {
    fn from(value: Scalar) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for ResponsiveValue {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for ResponsiveValue {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<f64> for ResponsiveValue {
    fn from(value: f64) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for ResponsiveValue {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for ResponsiveValue {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<bool> for ResponsiveValue {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl Serialize for ResponsiveValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ResponsiveValue::Value(scalar) => scalar.serialize(serializer),
            ResponsiveValue::Scoped(entries) => serializer.collect_map(entries),
        }
    }
}

impl<'de> Deserialize<'de> for ResponsiveValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = ResponsiveValue;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a scalar or a map of qualifiers")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Self::Value, E> {
                Ok(ResponsiveValue::Value(Scalar::Bool(v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
                Ok(ResponsiveValue::Value(Scalar::Number(v as f64)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
                Ok(ResponsiveValue::Value(Scalar::Number(v as f64)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
                Ok(ResponsiveValue::Value(Scalar::Number(v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                Ok(ResponsiveValue::Value(Scalar::Text(v.to_string())))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Self::Value, E> {
                Ok(ResponsiveValue::Value(Scalar::Text(v)))
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((qualifier, value)) = map.next_entry::<String, ResponsiveValue>()? {
                    entries.insert(qualifier, value);
                }
                Ok(ResponsiveValue::Scoped(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// An ordered mapping from prop names to responsive values.
///
/// Top-level key order determines the order of class groups in the compiled
/// output. Keys that do not name a known [`Property`](crate::catalog::Property)
/// still compile — their raw value passes through prefixed, so arbitrary
/// custom class families keep working.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props {
    entries: IndexMap<String, ResponsiveValue>,
}

impl Props {
    /// Create an empty prop object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prop, builder style.
    ///
    /// ```
    /// use windkit::prelude::*;
    ///
    /// let props = Props::new().with("p", 4).with("mt", 2);
    /// assert_eq!(compile(&props), "p-4 mt-2");
    /// ```
    pub fn with(mut self, prop: impl Into<String>, value: impl Into<ResponsiveValue>) -> Self {
        self.set(prop, value);
        self
    }

    /// Set a prop value. Re-setting an existing prop keeps its original
    /// position in the output order.
    pub fn set(&mut self, prop: impl Into<String>, value: impl Into<ResponsiveValue>) {
        self.entries.insert(prop.into(), value.into());
    }

    /// Look up a prop value.
    pub fn get(&self, prop: &str) -> Option<&ResponsiveValue> {
        self.entries.get(prop)
    }

    /// Number of props.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no props.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate props in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ResponsiveValue> {
        self.entries.iter()
    }

    /// Parse a prop document from JSON text.
    ///
    /// This is the shape in which a markup scanner hands over statically
    /// extracted prop literals. Key order in the document is preserved.
    ///
    /// ```
    /// use windkit::prelude::*;
    ///
    /// let props = Props::from_json_str(r#"{"bg": {"_": "black", "md": "red-100"}}"#).unwrap();
    /// assert_eq!(compile(&props), "bg-black md:bg-red-100");
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::parse(e.to_string()))
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = (&'a String, &'a ResponsiveValue);
    type IntoIter = indexmap::map::Iter<'a, String, ResponsiveValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<&JsonValue> for Props {
    type Error = Error;

    /// Convert an already-parsed JSON value into a prop object.
    ///
    /// Fails with [`Error::InvalidValue`] naming the offending prop when a
    /// value is neither a scalar nor a mapping.
    fn try_from(value: &JsonValue) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| Error::parse("expected an object of props"))?;

        let mut entries = IndexMap::with_capacity(map.len());
        for (prop, value) in map {
            entries.insert(prop.clone(), ResponsiveValue::from_json(prop, value)?);
        }
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_preserves_insertion_order() {
        let props = Props::new()
            .with("display", "flex")
            .with("bg", "black")
            .with("p", 4);

        let keys: Vec<&str> = props.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["display", "bg", "p"]);
    }

    #[test]
    fn reset_keeps_position() {
        let mut props = Props::new().with("display", "flex").with("bg", "black");
        props.set("display", "grid");

        let keys: Vec<&str> = props.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["display", "bg"]);
        assert_eq!(
            props.get("display"),
            Some(&ResponsiveValue::from("grid"))
        );
    }

    #[test]
    fn json_document_round_trip() {
        let source = r#"{"bg":{"_":"black","md":"red-100"},"p":4}"#;
        let props = Props::from_json_str(source).unwrap();

        let keys: Vec<&str> = props.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["bg", "p"]);

        // Scoped entries keep their written order too.
        match props.get("bg").unwrap() {
            ResponsiveValue::Scoped(scopes) => {
                let qualifiers: Vec<&str> = scopes.keys().map(String::as_str).collect();
                assert_eq!(qualifiers, ["_", "md"]);
            }
            other => panic!("expected scoped value, got {other:?}"),
        }

        assert_eq!(serde_json::to_string(&props).unwrap(), source);
    }

    #[test]
    fn rejects_structurally_invalid_values() {
        assert!(Props::from_json_str(r#"{"bg": null}"#).is_err());
        assert!(Props::from_json_str(r#"{"bg": ["red"]}"#).is_err());
        assert!(Props::from_json_str("[]").is_err());
    }

    #[test]
    fn try_from_json_value_names_offending_prop() {
        let doc = json!({"display": "flex", "bg": null});
        let err = Props::try_from(&doc).unwrap_err();
        match err {
            Error::InvalidValue { property, .. } => assert_eq!(property, "bg"),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn try_from_json_value_preserves_order() {
        let doc = json!({"display": {"_": "block", "md": "flex"}, "bg": "black"});
        let props = Props::try_from(&doc).unwrap();
        let keys: Vec<&str> = props.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["display", "bg"]);
    }
}
