//! MySQL.
//!
//! `||` means logical OR unless `PIPES_AS_CONCAT` is set, so strings are
//! joined with `CONCAT()`.

use super::{helpers, ConcatStyle, SqlDialect};

#[derive(Debug, Clone, Copy)]
pub struct MySql;

impl SqlDialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        helpers::quote_backtick(ident)
    }

    fn concat_style(&self) -> ConcatStyle {
        ConcatStyle::Function
    }
}
