//! Input data model: scalar leaves, responsive value trees, prop objects.

mod props;
mod value;

pub use props::{Props, ResponsiveValue};
pub use value::Scalar;
