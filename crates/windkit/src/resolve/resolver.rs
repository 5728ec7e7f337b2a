//! The responsive resolver.
//!
//! Walks each prop's responsive value tree in insertion order, composes
//! qualifier prefixes outer-to-inner (`md:dark:`), applies the prop's branch
//! rule at each leaf, and normalizes the concatenated output exactly once at
//! the outermost level.
//!
//! Prefix composition has one subtlety: when a qualifier's child
//! is itself a mapping, the parent's `qualifier:` prefix is written once in
//! front of the recursion's output, where it attaches to the first token the
//! recursion emits. Because the default qualifier `_` contributes no prefix
//! of its own, `{md: {_: "flex", dark: "table"}}` resolves to
//! `md:flex md:dark:table` — the `_` leaf absorbs the outer `md:`. Nested
//! non-default qualifiers carry the full composed prefix themselves.

use indexmap::IndexMap;

use crate::catalog::Property;
use crate::qualifier;
use crate::types::{Props, ResponsiveValue, Scalar};

/// Compile a prop object into a space-separated utility class string.
///
/// Props resolve in insertion order; within one prop, qualifier entries
/// resolve in insertion order too. The result carries no leading, trailing,
/// or doubled whitespace.
///
/// ```
/// use windkit::prelude::*;
///
/// let props = Props::new()
///     .with("bg", ResponsiveValue::scoped([("_", "black"), ("md", "red-100")]))
///     .with("p", 4)
///     .with("mt", 2);
///
/// assert_eq!(compile(&props), "bg-black md:bg-red-100 p-4 mt-2");
/// ```
pub fn compile(props: &Props) -> String {
    compile_with(props, "")
}

/// Compile a prop object and append an extra class string.
///
/// `class_name` is appended verbatim after the generated classes, making it
/// easy to compose compiled output with caller-authored classes.
///
/// ```
/// use windkit::prelude::*;
///
/// let props = Props::new().with("borderRadius", "default");
/// assert_eq!(compile_with(&props, "card"), "rounded card");
/// ```
pub fn compile_with(props: &Props, class_name: &str) -> String {
    let mut classes = String::new();

    for (prop, value) in props {
        match value {
            ResponsiveValue::Value(scalar) => {
                classes.push_str(&leaf_class(prop, scalar));
                classes.push(' ');
            }
            ResponsiveValue::Scoped(scopes) => {
                classes.push_str(&resolve_scoped(prop, scopes, ""));
            }
        }
    }

    classes.push(' ');
    classes.push_str(class_name);
    normalize(&classes)
}

/// Resolve one prop's leaf value to its bare class fragment.
///
/// Unknown prop keys pass their raw value through untouched — arbitrary
/// custom class families keep working without catalog support.
fn leaf_class(prop: &str, value: &Scalar) -> String {
    match Property::from_name(prop) {
        Some(property) => property.branch().resolve(value),
        None => {
            tracing::debug!("Unknown style prop: {}", prop);
            value.to_string()
        }
    }
}

/// Recursively resolve a qualifier-scoped mapping.
///
/// `prefix` is the composed qualifier path above this mapping, without a
/// trailing colon (`"md"`, `"md:dark"`); empty at the top level.
fn resolve_scoped(
    prop: &str,
    scopes: &IndexMap<String, ResponsiveValue>,
    prefix: &str,
) -> String {
    let mut classes = String::new();

    for (name, child) in scopes {
        if !qualifier::is_known(name) {
            tracing::trace!("Unknown qualifier: {}", name);
        }

        let scope_prefix = if qualifier::is_default(name) {
            String::new()
        } else if prefix.is_empty() {
            format!("{name}:")
        } else {
            format!("{prefix}:{name}:")
        };

        classes.push_str(&scope_prefix);
        match child {
            ResponsiveValue::Value(scalar) => {
                classes.push_str(&leaf_class(prop, scalar));
            }
            ResponsiveValue::Scoped(nested) => {
                let nested_prefix = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}:{name}")
                };
                classes.push_str(&resolve_scoped(prop, nested, &nested_prefix));
            }
        }
        classes.push(' ');
    }

    classes
}

/// Trim the concatenated output and collapse every run of two or more
/// whitespace characters into a single space. Runs exist wherever a branch
/// resolved to an empty fragment or a nested group contributed its own
/// trailing separator; normalization happens once, here.
fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut chars = trimmed.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            let mut run = 1;
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
                run += 1;
            }
            // A lone whitespace character passes through as-is.
            out.push(if run == 1 { c } else { ' ' });
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile_json(json: &str) -> String {
        compile(&Props::from_json_str(json).unwrap())
    }

    #[test]
    fn empty_props() {
        assert_eq!(compile(&Props::new()), "");
        assert_eq!(compile_with(&Props::new(), "foo"), "foo");
    }

    #[test]
    fn default_compilations() {
        assert_eq!(compile_json(r#"{"borderRadius": "default"}"#), "rounded");
        assert_eq!(compile_json(r#"{"resize": "both"}"#), "resize");
    }

    #[test]
    fn falsy_values_vanish() {
        assert_eq!(compile_json(r#"{"bg": ""}"#), "");
        assert_eq!(compile_json(r#"{"bg": "", "p": 4}"#), "p-4");
    }

    #[test]
    fn composes_additional_class() {
        let props = Props::new().with("borderRadius", "default");
        assert_eq!(compile_with(&props, "foo"), "rounded foo");
        // The extra class appends after every generated group.
        let props = props.with("p", 4);
        assert_eq!(compile_with(&props, "foo bar"), "rounded p-4 foo bar");
    }

    #[test]
    fn compiles_complex_branching() {
        assert_eq!(
            compile_json(r#"{"display": {"_": "block", "md": {"_": "flex", "dark": "table", "print": "inline"}}}"#),
            "block md:flex md:dark:table md:print:inline"
        );

        assert_eq!(
            compile_json(
                r#"{"display": {"_": "block", "md": "flex"}, "bg": {"_": "green-100", "dark": "green-900"}}"#
            ),
            "block md:flex bg-green-100 dark:bg-green-900"
        );

        assert_eq!(
            compile_json(
                r#"{"color": {"_": "red-100", "hover": {"_": "red-200", "dark": "red-800"}, "first": {"_": "orange-100", "only": "orange-200"}}}"#
            ),
            "text-red-100 hover:text-red-200 hover:dark:text-red-800 first:text-orange-100 first:only:text-orange-200"
        );
    }

    #[test]
    fn qualifier_order_follows_insertion() {
        // Same entries, different written order, different output order.
        assert_eq!(
            compile_json(r#"{"bg": {"md": "red-100", "_": "black"}}"#),
            "md:bg-red-100 bg-black"
        );
    }

    #[test]
    fn prefixes_compose_outer_to_inner() {
        assert_eq!(
            compile_json(r#"{"bg": {"md": {"dark": "zinc-900"}}}"#),
            "md:md:dark:bg-zinc-900"
        );
    }

    #[test]
    fn nesting_depth_is_unbounded() {
        assert_eq!(
            compile_json(r#"{"bg": {"md": {"_": "red-100", "dark": {"_": "zinc-900", "hover": "zinc-800"}}}}"#),
            "md:bg-red-100 md:dark:bg-zinc-900 md:dark:hover:bg-zinc-800"
        );
    }

    #[test]
    fn default_qualifier_may_be_omitted() {
        assert_eq!(compile_json(r#"{"display": {"md": "flex"}}"#), "md:flex");
    }

    #[test]
    fn arbitrary_value_escape() {
        assert_eq!(compile_json(r#"{"borderWidth": "[3px]"}"#), "border-[3px]");
        assert_eq!(
            compile_json(r#"{"bg": {"dark": "[#123456]"}}"#),
            "dark:bg-[#123456]"
        );
    }

    #[test]
    fn scroll_snap_type_expands_to_two_tokens() {
        let compiled = compile_json(r#"{"scrollSnapType": "x-mandatory"}"#);
        let tokens: Vec<&str> = compiled.split(' ').collect();
        assert!(tokens.contains(&"snap-x"));
        assert!(tokens.contains(&"snap-mandatory"));
    }

    #[test]
    fn unknown_props_pass_through() {
        assert_eq!(compile_json(r#"{"customThing": "my-class"}"#), "my-class");
        assert_eq!(
            compile_json(r#"{"customThing": {"md": "my-class"}}"#),
            "md:my-class"
        );
    }

    #[test]
    fn unknown_qualifiers_pass_through() {
        assert_eq!(
            compile_json(r#"{"bg": {"supports": "red-100"}}"#),
            "supports:bg-red-100"
        );
    }

    #[test]
    fn output_is_whitespace_normalized() {
        let compiled = compile_json(
            r#"{"display": {"_": "block", "md": {"_": "flex", "dark": "table"}}, "bg": "black"}"#,
        );
        assert!(!compiled.contains("  "));
        assert_eq!(compiled, compiled.trim());

        // Extra class strings are appended verbatim but still normalized.
        let props = Props::new().with("p", 4);
        assert_eq!(compile_with(&props, "  foo   bar "), "p-4 foo bar");
    }

    #[test]
    fn top_level_scalar_props() {
        assert_eq!(
            compile_json(r#"{"bg": "black", "p": 4, "mt": 2}"#),
            "bg-black p-4 mt-2"
        );
    }

    #[test]
    fn compiles_under_a_subscriber() {
        // Unknown props log at debug level; output is unaffected.
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::sink)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(
                compile_json(r#"{"customThing": {"weird": "my-class"}}"#),
                "weird:my-class"
            );
        });
    }

    #[test]
    fn normalize_behavior() {
        assert_eq!(normalize("  a  b   c  "), "a b c");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        // Single interior whitespace characters pass through unchanged.
        assert_eq!(normalize("a\tb"), "a\tb");
        assert_eq!(normalize("a \t b"), "a b");
    }
}
