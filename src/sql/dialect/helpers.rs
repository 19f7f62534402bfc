//! Quoting primitives shared by the dialects.

/// Wrap `text` in `open`/`close`, doubling every `close` inside it.
pub fn enclose(text: &str, open: char, close: char) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(open);
    for c in text.chars() {
        if c == close {
            out.push(close);
        }
        out.push(c);
    }
    out.push(close);
    out
}

/// `"ident"`
pub fn quote_double(ident: &str) -> String {
    enclose(ident, '"', '"')
}

/// `` `ident` ``
pub fn quote_backtick(ident: &str) -> String {
    enclose(ident, '`', '`')
}

/// `[ident]`; only the closing bracket needs escaping.
pub fn quote_bracket(ident: &str) -> String {
    enclose(ident, '[', ']')
}

/// Standard `'literal'`.
pub fn quote_string_single(s: &str) -> String {
    enclose(s, '\'', '\'')
}

/// T-SQL national string literal, `N'literal'`.
pub fn quote_string_unicode(s: &str) -> String {
    format!("N{}", quote_string_single(s))
}
