//! PostgreSQL: ANSI quoting, `||` concatenation, `RANDOM()`.

use super::{helpers, SqlDialect};

#[derive(Debug, Clone, Copy)]
pub struct Postgres;

impl SqlDialect for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        helpers::quote_double(ident)
    }

    fn random_function(&self) -> &'static str {
        "RANDOM()"
    }
}
