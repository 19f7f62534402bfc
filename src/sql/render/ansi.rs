//! ANSI default operator table.
//!
//! Consulted by [`dispatch`](super::dispatch) whenever a vendor table does
//! not define an operator. Renderers here lean on the active dialect for
//! anything vendor-specific, such as quoting or the random function.

use std::sync::LazyLock;

use super::{
    Arity, BooleanRenderer, ConcatRenderer, FunctionRenderer, IdentifierRenderer, OperatorTable,
    RandomRenderer, StringLiteralRenderer,
};

static DEFAULT_OPERATORS: LazyLock<OperatorTable> = LazyLock::new(|| {
    OperatorTable::new()
        .with("RAND", RandomRenderer::dialect_default())
        .with("ABS", FunctionRenderer::new("ABS", Arity::Exact(&[1])))
        .with("UPPER", FunctionRenderer::new("UPPER", Arity::Exact(&[1])))
        .with("LOWER", FunctionRenderer::new("LOWER", Arity::Exact(&[1])))
        .with("MOD", FunctionRenderer::new("MOD", Arity::Exact(&[2])))
        .with("NULLIF", FunctionRenderer::new("NULLIF", Arity::Exact(&[2])))
        .with("COALESCE", FunctionRenderer::new("COALESCE", Arity::AtLeast(1)))
        .with("CONCAT", ConcatRenderer)
        .with("LITERAL", StringLiteralRenderer)
        .with("IDENT", IdentifierRenderer)
        .with("BOOL", BooleanRenderer)
});

/// The shared ANSI operator table.
pub fn default_operators() -> &'static OperatorTable {
    &DEFAULT_OPERATORS
}
