//! Branch resolution: how a raw value becomes a class-name fragment.
//!
//! Every property carries a [`Branch`]: the `partial` naming its utility
//! family (`bg`, `rounded`, …) plus an optional `prepare` function for
//! properties whose values need remapping. Bracket-escaped values (`[...]`)
//! and prepare-less branches go through the default rule; everything else is
//! owned entirely by the property's `prepare`.

use crate::types::Scalar;

/// A property-specific value transform. Receives the raw value and the
/// branch partial, returns the finished fragment.
pub(crate) type PrepareFn = fn(&Scalar, &str) -> String;

/// The class-fragment rule for one property.
#[derive(Clone, Copy)]
pub(crate) struct Branch {
    partial: &'static str,
    prepare: Option<PrepareFn>,
}

impl Branch {
    pub(crate) const fn new(partial: &'static str, prepare: Option<PrepareFn>) -> Self {
        Self { partial, prepare }
    }

    /// Produce the bare class fragment for `value`, with no prefix applied.
    pub(crate) fn resolve(&self, value: &Scalar) -> String {
        match self.prepare {
            Some(prepare) if !value.is_arbitrary() => prepare(value, self.partial),
            _ => self.default_rule(value),
        }
    }

    /// The default rule: `"default"` collapses to the bare partial, falsy
    /// values vanish, everything else becomes `partial-value`. An empty
    /// partial passes the stringified value through untouched.
    fn default_rule(&self, value: &Scalar) -> String {
        if self.partial.is_empty() {
            return value.to_string();
        }
        if value.is_default() {
            return self.partial.to_string();
        }
        if value.is_falsy() {
            return String::new();
        }
        format!("{}-{}", self.partial, value)
    }
}

/// Fixed numeric→keyword table for `fontWeight`.
const FONT_WEIGHTS: &[(&str, &str)] = &[
    ("100", "thin"),
    ("200", "extralight"),
    ("300", "light"),
    ("400", "normal"),
    ("500", "medium"),
    ("600", "semibold"),
    ("700", "bold"),
    ("800", "extrabold"),
    ("900", "black"),
];

/// The custom `prepare` rules of the catalog.
pub(crate) mod prepare {
    use super::FONT_WEIGHTS;
    use crate::types::Scalar;

    /// Width `"1"` collapses to the bare partial; other widths append
    /// normally.
    pub(crate) fn border_width(value: &Scalar, partial: &str) -> String {
        if value.to_string() == "1" {
            partial.to_string()
        } else {
            format!("{partial}-{value}")
        }
    }

    /// `"1"` collapses to the bare `grow` keyword; other values concatenate
    /// with no hyphen. Shared by `flexGrow` and `flexShrink`: shrink emits
    /// `grow` too, and downstream class strings depend on that output.
    pub(crate) fn flex_keyword(value: &Scalar, partial: &str) -> String {
        if value.to_string() == "1" {
            "grow".to_string()
        } else {
            format!("{partial}{value}")
        }
    }

    /// Weights 100–900 map through the fixed keyword table; anything else
    /// appends as-is.
    pub(crate) fn font_weight(value: &Scalar, partial: &str) -> String {
        let raw = value.to_string();
        match FONT_WEIGHTS.iter().find(|(weight, _)| *weight == raw) {
            Some((_, keyword)) => format!("{partial}-{keyword}"),
            None => format!("{partial}-{raw}"),
        }
    }

    /// `"none"` remaps to the `hidden` keyword; display values are bare
    /// class names otherwise.
    pub(crate) fn display(value: &Scalar, _partial: &str) -> String {
        if value.as_text() == Some("none") {
            "hidden".to_string()
        } else {
            value.to_string()
        }
    }

    /// `"default"` collapses to the bare partial (`shadow`, `transition`).
    pub(crate) fn bare_on_default(value: &Scalar, partial: &str) -> String {
        if value.is_default() {
            partial.to_string()
        } else {
            format!("{partial}-{value}")
        }
    }

    /// `"default"` maps to the `isolate` keyword.
    pub(crate) fn isolation(value: &Scalar, partial: &str) -> String {
        if value.is_default() {
            "isolate".to_string()
        } else {
            format!("{partial}-{value}")
        }
    }

    /// `"solid"` is the implied style and collapses to the bare partial.
    pub(crate) fn outline_style(value: &Scalar, partial: &str) -> String {
        if value.as_text() == Some("solid") {
            partial.to_string()
        } else {
            format!("{partial}-{value}")
        }
    }

    /// `"both"` is the implied axis and collapses to the bare partial.
    pub(crate) fn resize(value: &Scalar, partial: &str) -> String {
        if value.as_text() == Some("both") {
            partial.to_string()
        } else {
            format!("{partial}-{value}")
        }
    }

    /// Composite `"<direction>-<strictness>"` values expand into two
    /// space-separated fragments; a bare direction yields one.
    pub(crate) fn scroll_snap_type(value: &Scalar, partial: &str) -> String {
        let raw = value.to_string();
        let mut parts = raw.split('-');
        let direction = parts.next().unwrap_or("");
        match parts.next().filter(|s| !s.is_empty()) {
            Some(strictness) => format!("{partial}-{direction} {partial}-{strictness}"),
            None => format!("{partial}-{direction}"),
        }
    }

    /// `"truncate"` is already a complete class name.
    pub(crate) fn text_overflow(value: &Scalar, partial: &str) -> String {
        if value.as_text() == Some("truncate") {
            "truncate".to_string()
        } else {
            format!("{partial}-{value}")
        }
    }

    /// `"none"` remaps to the `normal-case` keyword; values are bare class
    /// names otherwise.
    pub(crate) fn text_transform(value: &Scalar, _partial: &str) -> String {
        if value.as_text() == Some("none") {
            "normal-case".to_string()
        } else {
            value.to_string()
        }
    }
}
