//! Responsive resolution: prop trees to class strings.

mod resolver;

pub use resolver::{compile, compile_with};
