//! Generic function-call and concatenation renderers.

use super::{Arity, OperatorRenderer, RenderError};
use crate::sql::dialect::{ConcatStyle, Dialect, SqlDialect};

/// Renders `NAME(arg1, arg2, ...)`.
#[derive(Debug, Clone, Copy)]
pub struct FunctionRenderer {
    function: &'static str,
    arity: Arity,
}

impl FunctionRenderer {
    pub const fn new(function: &'static str, arity: Arity) -> Self {
        Self { function, arity }
    }
}

impl OperatorRenderer for FunctionRenderer {
    fn arity(&self) -> Arity {
        self.arity
    }

    fn render(&self, _dialect: Dialect, args: &[&str]) -> Result<String, RenderError> {
        self.arity.check(self.function, args.len())?;
        Ok(format!("{}({})", self.function, args.join(", ")))
    }
}

/// Renders a binary infix operator as `(left OP right)`.
///
/// `name` is the operator name callers dispatch on (e.g. `MOD`), `symbol`
/// the infix token emitted (e.g. `%`).
#[derive(Debug, Clone, Copy)]
pub struct InfixRenderer {
    name: &'static str,
    symbol: &'static str,
}

impl InfixRenderer {
    pub const fn new(name: &'static str, symbol: &'static str) -> Self {
        Self { name, symbol }
    }
}

impl OperatorRenderer for InfixRenderer {
    fn arity(&self) -> Arity {
        Arity::Exact(&[2])
    }

    fn render(&self, _dialect: Dialect, args: &[&str]) -> Result<String, RenderError> {
        self.arity().check(self.name, args.len())?;
        Ok(format!("({} {} {})", args[0], self.symbol, args[1]))
    }
}

/// Renders string concatenation.
///
/// Uses the dialect's infix operator, parenthesized so the fragment can be
/// spliced anywhere, or `CONCAT()` when the dialect has no usable operator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcatRenderer;

impl OperatorRenderer for ConcatRenderer {
    fn arity(&self) -> Arity {
        Arity::AtLeast(2)
    }

    fn render(&self, dialect: Dialect, args: &[&str]) -> Result<String, RenderError> {
        self.arity().check("CONCAT", args.len())?;
        match dialect.concat_style() {
            ConcatStyle::Infix(op) => Ok(format!("({})", args.join(&format!(" {} ", op)))),
            ConcatStyle::Function => Ok(format!("CONCAT({})", args.join(", "))),
        }
    }
}
