//! SQL generation module.
//!
//! - [`dialect`] - SQL dialect implementations (quoting, operators, functions)
//! - [`render`] - Operator renderers and per-vendor dispatch

pub mod dialect;
pub mod render;


// Re-export commonly used types at the sql module level
pub use dialect::{ConcatStyle, Dialect, SqlDialect};
pub use render::{Arity, OperatorRenderer, OperatorTable, RenderError};
