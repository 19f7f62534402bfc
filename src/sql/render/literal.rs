//! Literal and identifier renderers.
//!
//! Unlike the other renderers these take raw text rather than SQL
//! expressions, and quote it with the active dialect's rules.

use super::{Arity, OperatorRenderer, RenderError};
use crate::sql::dialect::{Dialect, SqlDialect};

/// `LITERAL(text)` → a quoted string literal (`'it''s'`, `N'Zürich'` on T-SQL).
#[derive(Debug, Clone, Copy, Default)]
pub struct StringLiteralRenderer;

impl OperatorRenderer for StringLiteralRenderer {
    fn arity(&self) -> Arity {
        Arity::Exact(&[1])
    }

    fn render(&self, dialect: Dialect, args: &[&str]) -> Result<String, RenderError> {
        self.arity().check("LITERAL", args.len())?;
        Ok(dialect.quote_string(args[0]))
    }
}

/// `IDENT(part, ...)` → a quoted, dot-separated name such as `"public"."orders"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierRenderer;

impl OperatorRenderer for IdentifierRenderer {
    fn arity(&self) -> Arity {
        Arity::AtLeast(1)
    }

    fn render(&self, dialect: Dialect, args: &[&str]) -> Result<String, RenderError> {
        self.arity().check("IDENT", args.len())?;
        let parts: Vec<String> = args.iter().map(|p| dialect.quote_identifier(p)).collect();
        Ok(parts.join("."))
    }
}

/// `BOOL(true|false)` → the dialect's boolean literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanRenderer;

impl OperatorRenderer for BooleanRenderer {
    fn arity(&self) -> Arity {
        Arity::Exact(&[1])
    }

    fn render(&self, dialect: Dialect, args: &[&str]) -> Result<String, RenderError> {
        self.arity().check("BOOL", args.len())?;
        let value = match args[0] {
            v if v.eq_ignore_ascii_case("true") => true,
            v if v.eq_ignore_ascii_case("false") => false,
            other => {
                return Err(RenderError::Rendering(format!(
                    "BOOL expects true or false, got '{}'",
                    other
                )))
            }
        };
        Ok(dialect.bool_literal(value).to_string())
    }
}
