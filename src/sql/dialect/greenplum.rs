//! Greenplum.
//!
//! Lexically identical to PostgreSQL, which it is forked from, but kept as
//! its own dialect so adapters and logs can tell the two apart.

use super::{helpers, Postgres, SqlDialect};

#[derive(Debug, Clone, Copy)]
pub struct Greenplum;

impl SqlDialect for Greenplum {
    fn name(&self) -> &'static str {
        "greenplum"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        helpers::quote_double(ident)
    }

    fn random_function(&self) -> &'static str {
        Postgres.random_function()
    }
}
