//! Utility-class compiler for atomic CSS systems.
//!
//! Windkit turns a structured object of style props — optionally scoped by
//! responsive breakpoints, color/media modes, and interaction states — into
//! a deterministic, space-separated utility class string:
//!
//! - **Branch registry**: a closed catalog of ~170 style props, each with
//!   the partial naming its utility family and, where needed, a custom
//!   value rule (`borderRadius: "default"` → `rounded`,
//!   `scrollSnapType: "x-mandatory"` → `snap-x snap-mandatory`).
//! - **Responsive resolver**: recursive qualifier-prefix composition in
//!   strict insertion order (`{md: {dark: "x"}}` → `md:dark:…`).
//! - **Scanner interchange**: prop documents parse from JSON with key order
//!   intact, so a build-time markup scanner can extract literal prop
//!   objects and compile them ahead of time.
//!
//! # Example
//!
//! ```
//! use windkit::prelude::*;
//!
//! let props = Props::new()
//!     .with("bg", ResponsiveValue::scoped([
//!         ("_", "black"),
//!         ("md", "red-100"),
//!     ]))
//!     .with("p", 4);
//!
//! assert_eq!(compile(&props), "bg-black md:bg-red-100 p-4");
//!
//! // Compose with caller-authored classes:
//! assert_eq!(compile_with(&props, "card"), "bg-black md:bg-red-100 p-4 card");
//! ```
//!
//! The compiler is pure and total: it never fails, never touches I/O, and
//! holds no mutable state, so it is safe to call concurrently. Unknown prop
//! keys and qualifiers degrade into best-effort output instead of erroring;
//! enable a `tracing` subscriber (e.g. `tracing_subscriber::fmt::init()`)
//! to surface them during development.

pub mod catalog;
pub mod qualifier;
pub mod resolve;
pub mod types;

mod error;

pub use catalog::{is_style_prop, Property};
pub use error::{Error, Result};
pub use resolve::{compile, compile_with};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::catalog::{is_style_prop, Property};
    pub use crate::resolve::{compile, compile_with};
    pub use crate::types::{Props, ResponsiveValue, Scalar};
    pub use crate::{Error, Result};
}
