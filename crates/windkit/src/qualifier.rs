//! Qualifier namespaces.
//!
//! A qualifier scopes a value to a breakpoint (`md`), a mode (`dark`,
//! `print`), or an interaction/structural state (`hover`, `first`). All
//! three namespaces are flat for resolution purposes: the resolver composes
//! whatever qualifier names it is given into `name:` prefixes without
//! consulting these tables, so unknown qualifiers still produce best-effort
//! output. The tables exist for scanner integration and diagnostics.
//!
//! The default qualifier [`DEFAULT`] (`_`) is the one special case: it
//! contributes no prefix token at all.

/// The default qualifier: applies at every scope, contributes no prefix.
pub const DEFAULT: &str = "_";

/// Responsive breakpoint and orientation qualifiers.
pub const BREAKPOINTS: &[&str] = &["sm", "md", "lg", "xl", "portrait", "landscape"];

/// Color-scheme, media, and user-preference mode qualifiers.
pub const MODES: &[&str] = &[
    "dark",
    "print",
    "motionReduce",
    "motionSafe",
    "contrastMore",
    "contrastLess",
];

/// Interaction and structural state qualifiers.
pub const STATES: &[&str] = &[
    "hover",
    "focus",
    "focusWthin",
    "focusVisible",
    "active",
    "visited",
    "target",
    "first",
    "last",
    "only",
    "odd",
    "even",
    "firstOfType",
    "lastOfType",
    "onlyOfType",
    "empty",
    "disabled",
    "enabled",
    "checked",
    "indeterminate",
    "default",
    "required",
    "valid",
    "invalid",
    "inRange",
    "outOfRange",
    "placeholderShown",
    "autofill",
    "readOnly",
    "firstLetter",
    "firstLine",
];

/// ARIA attribute state qualifiers.
pub const ARIA_STATES: &[&str] = &[
    "ariaChecked",
    "ariaDisabled",
    "ariaExpanded",
    "ariaHidden",
    "ariaPressed",
    "ariaReadonly",
    "ariaRequired",
    "ariaSelected",
];

/// Whether `name` is the default qualifier.
pub fn is_default(name: &str) -> bool {
    name == DEFAULT
}

/// Whether `name` belongs to any known qualifier namespace (including the
/// default qualifier).
pub fn is_known(name: &str) -> bool {
    is_default(name)
        || BREAKPOINTS.contains(&name)
        || MODES.contains(&name)
        || STATES.contains(&name)
        || ARIA_STATES.contains(&name)
}
