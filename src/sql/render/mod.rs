//! Operator rendering.
//!
//! An [`OperatorRenderer`] turns an abstract operator invocation (name plus
//! already-rendered argument expressions) into dialect-specific SQL text.
//! Each vendor adapter carries an [`OperatorTable`]; [`dispatch`] consults
//! it first and falls back to the ANSI defaults in [`ansi`].
//!
//! ```text
//! render("RAND", ["1", "10"], greenplum)
//!     │
//!     ├─ vendor table ── RAND → RandomRenderer("RANDOM()")
//!     │                      └─ FLOOR(1 + RANDOM() * (10 - 1 + 1))
//!     └─ ansi table  ── used only when the vendor defines nothing
//! ```
//!
//! Renderers are stateless and `Send + Sync`; tables are built once and
//! shared read-only.

pub mod ansi;
mod function;
mod literal;
mod random;

pub use function::{ConcatRenderer, FunctionRenderer, InfixRenderer};
pub use literal::{BooleanRenderer, IdentifierRenderer, StringLiteralRenderer};
pub use random::RandomRenderer;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::dialect::Dialect;

/// Error type for operator rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Unsupported operator: {operator} (dialect: {dialect})")]
    UnsupportedOperator { operator: String, dialect: Dialect },

    #[error("Rendering error: {0}")]
    Rendering(String),
}

/// Accepted argument counts for an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One of the listed counts.
    Exact(&'static [usize]),
    /// Variadic with a lower bound.
    AtLeast(usize),
}

impl Arity {
    /// Whether `count` arguments are accepted.
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Exact(counts) => counts.contains(&count),
            Arity::AtLeast(min) => count >= *min,
        }
    }

    /// Fail with a [`RenderError::Rendering`] naming the accepted arities.
    pub fn check(&self, operator: &str, count: usize) -> Result<(), RenderError> {
        if self.accepts(count) {
            Ok(())
        } else {
            Err(RenderError::Rendering(format!(
                "{} takes {}, got {}",
                operator.to_uppercase(),
                self,
                count
            )))
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact([]) => write!(f, "no arguments"),
            Arity::Exact([1]) => write!(f, "1 argument"),
            Arity::Exact([only]) => write!(f, "{} arguments", only),
            Arity::Exact([init @ .., last]) => {
                let init: Vec<String> = init.iter().map(|n| n.to_string()).collect();
                write!(f, "{} or {} arguments", init.join(", "), last)
            }
            Arity::AtLeast(1) => write!(f, "at least 1 argument"),
            Arity::AtLeast(min) => write!(f, "at least {} arguments", min),
        }
    }
}

/// Translates an operator invocation into SQL text for a dialect.
///
/// Arguments are SQL expressions and are spliced into the output verbatim.
pub trait OperatorRenderer: fmt::Debug + Send + Sync {
    /// Argument counts this renderer accepts.
    fn arity(&self) -> Arity;

    /// Render the invocation. Callers going through [`dispatch`] have
    /// already had the arity checked.
    fn render(&self, dialect: Dialect, args: &[&str]) -> Result<String, RenderError>;
}

/// Operator name → renderer lookup.
///
/// Names are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
    renderers: HashMap<String, Arc<dyn OperatorRenderer>>,
}

impl OperatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer, replacing and returning any previous one.
    pub fn insert<R>(&mut self, operator: &str, renderer: R) -> Option<Arc<dyn OperatorRenderer>>
    where
        R: OperatorRenderer + 'static,
    {
        self.renderers.insert(normalize(operator), Arc::new(renderer))
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<R>(mut self, operator: &str, renderer: R) -> Self
    where
        R: OperatorRenderer + 'static,
    {
        self.insert(operator, renderer);
        self
    }

    pub fn get(&self, operator: &str) -> Option<&Arc<dyn OperatorRenderer>> {
        self.renderers.get(&normalize(operator))
    }

    pub fn contains(&self, operator: &str) -> bool {
        self.renderers.contains_key(&normalize(operator))
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Registered operator names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn normalize(operator: &str) -> String {
    operator.to_uppercase()
}

/// Render `operator` for `dialect`, preferring `vendor_operators` over the
/// ANSI defaults.
///
/// Never substitutes another operator: when neither table knows the name
/// the call fails with [`RenderError::UnsupportedOperator`].
pub fn dispatch(
    vendor_operators: &OperatorTable,
    dialect: Dialect,
    operator: &str,
    args: &[&str],
) -> Result<String, RenderError> {
    let (renderer, source) = match vendor_operators.get(operator) {
        Some(renderer) => (renderer, "vendor"),
        None => match ansi::default_operators().get(operator) {
            Some(renderer) => (renderer, "ansi"),
            None => {
                return Err(RenderError::UnsupportedOperator {
                    operator: operator.to_string(),
                    dialect,
                })
            }
        },
    };

    debug!(operator, %dialect, source, args = args.len(), "rendering operator");

    renderer.arity().check(operator, args.len())?;
    renderer.render(dialect, args)
}
