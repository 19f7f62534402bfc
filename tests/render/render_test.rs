use insta::assert_snapshot;
use sqlparser::dialect::{MsSqlDialect, MySqlDialect, PostgreSqlDialect};
use sqlparser::parser::Parser;
use sqlvend::render::{Arity, OperatorRenderer};
use sqlvend::{render_operator, Dialect, DialectAdapter, DialectRegistry, RenderError};

fn parses(fragment: &str, dialect: Dialect) -> bool {
    let sql = format!("SELECT {}", fragment);
    match dialect {
        Dialect::Postgres | Dialect::Greenplum => Parser::parse_sql(&PostgreSqlDialect {}, &sql),
        Dialect::MySql => Parser::parse_sql(&MySqlDialect {}, &sql),
        Dialect::TSql => Parser::parse_sql(&MsSqlDialect {}, &sql),
    }
    .is_ok()
}

fn registry() -> DialectRegistry {
    DialectRegistry::with_builtin_vendors()
}

#[test]
fn test_greenplum_rand_without_bounds() {
    let registry = registry();
    let gp = registry.resolve_name("Greenplum").unwrap();

    assert_eq!(render_operator("RAND", &[], &gp).unwrap(), "RANDOM()");
}

#[test]
fn test_greenplum_rand_with_bounds() {
    let registry = registry();
    let gp = registry.resolve_name("Greenplum").unwrap();

    let sql = render_operator("RAND", &["1", "10"], &gp).unwrap();
    assert_snapshot!(sql, @"FLOOR(1 + RANDOM() * (10 - 1 + 1))");
    assert!(parses(&sql, Dialect::Greenplum));
}

#[test]
fn test_greenplum_rand_wrong_arity() {
    let registry = registry();
    let gp = registry.resolve_name("Greenplum").unwrap();

    let err = render_operator("RAND", &["x"], &gp).unwrap_err();
    match err {
        RenderError::Rendering(msg) => assert!(msg.contains("0 or 2"), "got: {}", msg),
        other => panic!("expected Rendering error, got {:?}", other),
    }

    assert!(matches!(
        render_operator("RAND", &["1", "2", "3"], &gp),
        Err(RenderError::Rendering(_))
    ));
}

#[test]
fn test_bounds_are_positional() {
    let registry = registry();
    let gp = registry.resolve_name("Greenplum").unwrap();

    // Bound expressions that look like placeholders are embedded as written
    let sql = render_operator("RAND", &["low_bound", "hight_bound"], &gp).unwrap();
    assert_snapshot!(sql, @"FLOOR(low_bound + RANDOM() * (hight_bound - low_bound + 1))");

    let sql = render_operator("RAND", &["t.min_qty", "t.max_qty * 2"], &gp).unwrap();
    assert_snapshot!(sql, @"FLOOR(t.min_qty + RANDOM() * (t.max_qty * 2 - t.min_qty + 1))");
    assert!(parses(&sql, Dialect::Greenplum));
}

#[test]
fn test_unsupported_operator() {
    let registry = registry();
    let gp = registry.resolve_name("Greenplum").unwrap();

    let err = render_operator("MEDIAN", &["x"], &gp).unwrap_err();
    assert_eq!(
        err,
        RenderError::UnsupportedOperator {
            operator: "MEDIAN".to_string(),
            dialect: Dialect::Greenplum,
        }
    );
}

#[test]
fn test_operator_names_case_insensitive() {
    let registry = registry();
    let gp = registry.resolve_name("Greenplum").unwrap();

    assert_eq!(render_operator("rand", &[], &gp).unwrap(), "RANDOM()");
    assert_eq!(render_operator("Upper", &["name"], &gp).unwrap(), "UPPER(name)");
}

#[test]
fn test_ansi_fallback_per_vendor() {
    let registry = registry();

    let cases = [
        ("Greenplum", Dialect::Greenplum, "(first_name || last_name)"),
        ("PostgreSQL", Dialect::Postgres, "(first_name || last_name)"),
        ("MySQL", Dialect::MySql, "CONCAT(first_name, last_name)"),
        ("Microsoft SQL Server", Dialect::TSql, "(first_name + last_name)"),
    ];

    for (vendor, dialect, expected) in cases {
        let adapter = registry.resolve_name(vendor).unwrap();
        let sql = render_operator("CONCAT", &["first_name", "last_name"], &adapter).unwrap();
        assert_eq!(sql, expected, "vendor {}", vendor);
        assert!(parses(&sql, dialect), "{} should parse for {}", sql, vendor);
    }
}

#[test]
fn test_rand_per_vendor() {
    let registry = registry();

    let rendered: Vec<String> = registry
        .iter()
        .map(|adapter| {
            let sql = render_operator("RAND", &[], adapter).unwrap();
            format!("{}: {}", adapter.vendor_id(), sql)
        })
        .collect();

    assert_snapshot!(rendered.join("\n"), @r"
    Greenplum: RANDOM()
    Microsoft SQL Server: RAND(CHECKSUM(NEWID()))
    MySQL: RAND()
    PostgreSQL: RANDOM()
    ");
}

#[test]
fn test_bounded_rand_parses_for_every_vendor() {
    let registry = registry();

    for adapter in registry.iter() {
        let sql = render_operator("RAND", &["1", "100"], adapter).unwrap();
        assert!(
            parses(&sql, adapter.dialect()),
            "{} should parse for {}",
            sql,
            adapter.vendor_id()
        );
    }
}

#[test]
fn test_render_is_deterministic() {
    let registry = registry();
    let gp = registry.resolve_name("Greenplum").unwrap();

    let first = render_operator("RAND", &["a", "b"], &gp).unwrap();
    for _ in 0..10 {
        assert_eq!(render_operator("RAND", &["a", "b"], &gp).unwrap(), first);
    }
}

#[derive(Debug)]
struct Median;

impl OperatorRenderer for Median {
    fn arity(&self) -> Arity {
        Arity::Exact(&[1])
    }

    fn render(&self, _dialect: Dialect, args: &[&str]) -> Result<String, RenderError> {
        Ok(format!(
            "PERCENTILE_CONT(0.5) WITHIN GROUP (ORDER BY {})",
            args[0]
        ))
    }
}

#[test]
fn test_custom_renderer() {
    let adapter = DialectAdapter::builder("Greenplum", Dialect::Greenplum)
        .operator("median", Median)
        .build();

    assert_eq!(
        render_operator("MEDIAN", &["amount"], &adapter).unwrap(),
        "PERCENTILE_CONT(0.5) WITHIN GROUP (ORDER BY amount)"
    );

    // Arity is checked before the renderer runs
    let err = render_operator("MEDIAN", &[], &adapter).unwrap_err();
    assert_eq!(
        err,
        RenderError::Rendering("MEDIAN takes 1 argument, got 0".to_string())
    );
}

#[test]
fn test_ansi_quoting_follows_vendor() {
    let registry = registry();

    let rendered: Vec<String> = registry
        .iter()
        .map(|adapter| {
            let ident = render_operator("IDENT", &["sales", "order"], adapter).unwrap();
            let literal = render_operator("LITERAL", &["Zürich"], adapter).unwrap();
            let flag = render_operator("BOOL", &["true"], adapter).unwrap();
            assert!(parses(&format!("{}, {}, {}", ident, literal, flag), adapter.dialect()));
            format!("{}: {} {} {}", adapter.vendor_id(), ident, literal, flag)
        })
        .collect();

    assert_snapshot!(rendered.join("\n"), @r#"
    Greenplum: "sales"."order" 'Zürich' TRUE
    Microsoft SQL Server: [sales].[order] N'Zürich' 1
    MySQL: `sales`.`order` 'Zürich' TRUE
    PostgreSQL: "sales"."order" 'Zürich' TRUE
    "#);
}
