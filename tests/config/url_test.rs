use sqlvend::config::{
    build_connection_url, ConnectionArguments, ConnectionError, ParameterKind, UrlParameter,
    UrlTemplate,
};
use sqlvend::DialectRegistry;

fn args(pairs: &[(&str, &str)]) -> ConnectionArguments {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn greenplum_template() -> UrlTemplate {
    let registry = DialectRegistry::with_builtin_vendors();
    registry
        .resolve_name("Greenplum")
        .unwrap()
        .url_template()
        .clone()
}

#[test]
fn test_greenplum_full_url() {
    let url = build_connection_url(
        &greenplum_template(),
        &args(&[("hostname", "db1"), ("port", "5432"), ("database", "sales")]),
    )
    .unwrap();
    assert_eq!(url, "jdbc:postgresql://db1:5432/sales");
}

#[test]
fn test_greenplum_hostname_only() {
    let url = build_connection_url(&greenplum_template(), &args(&[("hostname", "db1")])).unwrap();
    assert_eq!(url, "jdbc:postgresql://db1");
}

#[test]
fn test_greenplum_missing_hostname() {
    let err = build_connection_url(&greenplum_template(), &args(&[("port", "5432")])).unwrap_err();
    assert_eq!(err, ConnectionError::MissingArgument("hostname".to_string()));
    assert_eq!(err.to_string(), "Missing required argument: hostname");
}

#[test]
fn test_negative_port() {
    let url = build_connection_url(
        &greenplum_template(),
        &args(&[("hostname", "db1"), ("port", "-5432")]),
    )
    .unwrap();
    assert_eq!(url, "jdbc:postgresql://db1:5432");
}

#[test]
fn test_non_numeric_port() {
    let err = build_connection_url(
        &greenplum_template(),
        &args(&[("hostname", "db1"), ("port", "postgres")]),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ConnectionError::InvalidArgument { ref name, .. } if name == "port"
    ));
}

#[test]
fn test_port_out_of_range() {
    let err = build_connection_url(
        &greenplum_template(),
        &args(&[("hostname", "db1"), ("port", "99999999999")]),
    )
    .unwrap_err();
    assert!(matches!(err, ConnectionError::InvalidArgument { .. }));
}

#[test]
fn test_empty_port_is_skipped() {
    let url = build_connection_url(
        &greenplum_template(),
        &args(&[("hostname", "db1"), ("port", ""), ("database", "sales")]),
    )
    .unwrap();
    assert_eq!(url, "jdbc:postgresql://db1/sales");
}

#[test]
fn test_empty_database_keeps_separator() {
    let url = build_connection_url(
        &greenplum_template(),
        &args(&[("hostname", "db1"), ("database", "")]),
    )
    .unwrap();
    assert_eq!(url, "jdbc:postgresql://db1/");
}

#[test]
fn test_padded_port_is_invalid() {
    let err = build_connection_url(
        &greenplum_template(),
        &args(&[("hostname", "db1"), ("port", " 5432 ")]),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ConnectionError::InvalidArgument { ref name, .. } if name == "port"
    ));
}

#[test]
fn test_unknown_arguments_ignored() {
    let with_extra = build_connection_url(
        &greenplum_template(),
        &args(&[("hostname", "db1"), ("sslmode", "require"), ("user", "etl")]),
    )
    .unwrap();
    let without =
        build_connection_url(&greenplum_template(), &args(&[("hostname", "db1")])).unwrap();
    assert_eq!(with_extra, without);
}

#[test]
fn test_url_is_deterministic() {
    let template = greenplum_template();
    let arguments = args(&[("database", "sales"), ("port", "5432"), ("hostname", "db1")]);

    let first = build_connection_url(&template, &arguments).unwrap();
    for _ in 0..10 {
        assert_eq!(build_connection_url(&template, &arguments).unwrap(), first);
    }
}

#[test]
fn test_builtin_patterns() {
    let registry = DialectRegistry::with_builtin_vendors();
    let patterns: Vec<String> = registry
        .iter()
        .map(|a| format!("{}: {}", a.vendor_id(), a.url_template().pattern()))
        .collect();

    assert_eq!(
        patterns,
        vec![
            "Greenplum: jdbc:postgresql://[hostname]:{port}/{database}",
            "Microsoft SQL Server: jdbc:sqlserver://[hostname]:{port};databaseName={database}",
            "MySQL: jdbc:mysql://[hostname]:{port}/{database}",
            "PostgreSQL: jdbc:postgresql://[hostname]:{port}/{database}",
        ]
    );
}

#[test]
fn test_custom_template_order() {
    let template = UrlTemplate::new("Oracle", "jdbc:oracle:thin:@")
        .with_parameter(UrlParameter::required("hostname"))
        .unwrap()
        .with_parameter(
            UrlParameter::required("port")
                .kind(ParameterKind::Port)
                .separator(":"),
        )
        .unwrap()
        .with_parameter(UrlParameter::optional("service").separator("/"))
        .unwrap();

    assert_eq!(template.pattern(), "jdbc:oracle:thin:@[hostname]:[port]/{service}");

    let url = template
        .build(&args(&[("service", "ORCL"), ("port", "1521"), ("hostname", "ora1")]))
        .unwrap();
    assert_eq!(url, "jdbc:oracle:thin:@ora1:1521/ORCL");

    let err = template.build(&args(&[("hostname", "ora1")])).unwrap_err();
    assert_eq!(err, ConnectionError::MissingArgument("port".to_string()));
}

#[test]
fn test_duplicate_parameter_names() {
    let mut template = UrlTemplate::new("X", "jdbc:x://");
    template.add(UrlParameter::required("hostname")).unwrap();

    let err = template.add(UrlParameter::optional("hostname")).unwrap_err();
    assert_eq!(err, ConnectionError::DuplicateParameter("hostname".to_string()));
    assert_eq!(template.parameters().len(), 1);
}
