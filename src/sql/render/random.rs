//! Random value renderer (`RAND`).

use super::{Arity, OperatorRenderer, RenderError};
use crate::sql::dialect::{Dialect, SqlDialect};

/// Renders `RAND` with 0 or 2 arguments.
///
/// - `RAND()` → the random expression (e.g. `RANDOM()`)
/// - `RAND(low, high)` → an integer in `[low, high]`:
///   `FLOOR(low + RANDOM() * (high - low + 1))`
///
/// Bounds are SQL expressions and are placed into fixed slots of the
/// output, so their text is never scanned or rewritten.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRenderer {
    function: Option<&'static str>,
}

impl RandomRenderer {
    /// Use a fixed random expression regardless of dialect.
    pub const fn new(function: &'static str) -> Self {
        Self {
            function: Some(function),
        }
    }

    /// Use the dialect's [`SqlDialect::random_function`].
    pub const fn dialect_default() -> Self {
        Self { function: None }
    }

    fn random_expr(&self, dialect: Dialect) -> &'static str {
        self.function.unwrap_or_else(|| dialect.random_function())
    }
}

impl OperatorRenderer for RandomRenderer {
    fn arity(&self) -> Arity {
        Arity::Exact(&[0, 2])
    }

    fn render(&self, dialect: Dialect, args: &[&str]) -> Result<String, RenderError> {
        let random = self.random_expr(dialect);
        match args {
            [] => Ok(random.to_string()),
            [low, high] => Ok(format!(
                "FLOOR({low} + {random} * ({high} - {low} + 1))",
                low = low,
                high = high,
                random = random
            )),
            _ => Err(RenderError::Rendering(format!(
                "RAND takes {}, got {}",
                self.arity(),
                args.len()
            ))),
        }
    }
}
