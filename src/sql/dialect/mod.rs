//! Vendor syntax rules.
//!
//! A [`Dialect`] captures the lexical differences between vendors that
//! operator renderers care about. Renderers receive the dialect of the
//! active adapter, which is how the shared ANSI table still produces
//! vendor-correct text.
//!
//! | dialect   | identifiers | concatenation   | random      |
//! |-----------|-------------|-----------------|-------------|
//! | postgres  | `"a"`       | `a \|\| b`      | `RANDOM()`  |
//! | greenplum | `"a"`       | `a \|\| b`      | `RANDOM()`  |
//! | mysql     | `` `a` ``   | `CONCAT(a, b)`  | `RAND()`    |
//! | tsql      | `[a]`       | `a + b`         | `RAND()`    |
//!
//! ```
//! use sqlvend::dialect::{ConcatStyle, Dialect, SqlDialect};
//!
//! assert_eq!(Dialect::Greenplum.quote_identifier("order"), "\"order\"");
//! assert_eq!(Dialect::MySql.concat_style(), ConcatStyle::Function);
//! ```

mod greenplum;
pub mod helpers;
mod mysql;
mod postgres;
mod tsql;

pub use greenplum::Greenplum;
pub use mysql::MySql;
pub use postgres::Postgres;
pub use tsql::TSql;

use std::fmt;

use serde::Serialize;

/// How a dialect joins strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcatStyle {
    /// Binary operator placed between operands.
    Infix(&'static str),
    /// Variadic `CONCAT(...)` call.
    Function,
}

/// Lexical rules of one vendor's SQL.
///
/// Only `name` and `quote_identifier` are required; the rest default to
/// standard SQL.
pub trait SqlDialect: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Quote an identifier, doubling any embedded closing quote.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Quote a string literal.
    fn quote_string(&self, s: &str) -> String {
        helpers::quote_string_single(s)
    }

    fn bool_literal(&self, value: bool) -> &'static str {
        if value {
            "TRUE"
        } else {
            "FALSE"
        }
    }

    fn concat_style(&self) -> ConcatStyle {
        ConcatStyle::Infix("||")
    }

    /// Expression yielding a uniform value in `[0, 1)`.
    fn random_function(&self) -> &'static str {
        "RAND()"
    }
}

/// Dialects known to the built-in adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Postgres,
    Greenplum,
    MySql,
    TSql,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [
        Dialect::Postgres,
        Dialect::Greenplum,
        Dialect::MySql,
        Dialect::TSql,
    ];

    /// The rules object behind this variant.
    pub fn rules(self) -> &'static dyn SqlDialect {
        match self {
            Dialect::Postgres => &Postgres,
            Dialect::Greenplum => &Greenplum,
            Dialect::MySql => &MySql,
            Dialect::TSql => &TSql,
        }
    }
}

impl SqlDialect for Dialect {
    fn name(&self) -> &'static str {
        self.rules().name()
    }

    fn quote_identifier(&self, ident: &str) -> String {
        self.rules().quote_identifier(ident)
    }

    fn quote_string(&self, s: &str) -> String {
        self.rules().quote_string(s)
    }

    fn bool_literal(&self, value: bool) -> &'static str {
        self.rules().bool_literal(value)
    }

    fn concat_style(&self) -> ConcatStyle {
        self.rules().concat_style()
    }

    fn random_function(&self) -> &'static str {
        self.rules().random_function()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
