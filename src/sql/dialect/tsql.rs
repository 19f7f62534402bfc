//! T-SQL (SQL Server).

use super::{helpers, ConcatStyle, SqlDialect};

#[derive(Debug, Clone, Copy)]
pub struct TSql;

impl SqlDialect for TSql {
    fn name(&self) -> &'static str {
        "tsql"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        helpers::quote_bracket(ident)
    }

    /// Non-ASCII text needs an `N'...'` literal to survive the column collation.
    fn quote_string(&self, s: &str) -> String {
        if s.is_ascii() {
            helpers::quote_string_single(s)
        } else {
            helpers::quote_string_unicode(s)
        }
    }

    /// No boolean type; `BIT` values stand in.
    fn bool_literal(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }

    fn concat_style(&self) -> ConcatStyle {
        ConcatStyle::Infix("+")
    }
}
