//! sqlvend CLI - inspect vendor adapters, build connection URLs, render operators
//!
//! Usage:
//!   sqlvend vendors [--json]
//!   sqlvend url --vendor <id> --arg <name=value>...
//!   sqlvend url --config <file.toml> --connection <name>
//!   sqlvend render --vendor <id> <operator> [args...]
//!   sqlvend version
//!
//! Examples:
//!   sqlvend url --vendor Greenplum --arg hostname=db1 --arg port=5432 --arg database=sales
//!   sqlvend render --vendor Greenplum RAND 1 10

use clap::{Parser, Subcommand};
use serde::Serialize;
use sqlvend::config::{ConnectionArguments, Settings};
use sqlvend::registry::DialectRegistry;
use sqlvend::version;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlvend")]
#[command(about = "sqlvend - vendor dialect registry and SQL operator rendering")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered vendors
    Vendors {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Build a connection URL
    Url {
        /// Vendor id (e.g. "Greenplum")
        #[arg(short, long, conflicts_with = "connection")]
        vendor: Option<String>,

        /// Template argument as name=value (repeatable)
        #[arg(short, long = "arg", value_parser = parse_argument)]
        args: Vec<(String, String)>,

        /// Settings file (defaults to SQLVEND_CONFIG / ./sqlvend.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Named connection from the settings file
        #[arg(long)]
        connection: Option<String>,
    },

    /// Render an operator for a vendor
    Render {
        /// Vendor id (e.g. "Greenplum")
        #[arg(short, long)]
        vendor: String,

        /// Operator name (e.g. RAND)
        operator: String,

        /// Operator arguments, as SQL expressions
        args: Vec<String>,
    },

    /// Show the packaged version
    Version,
}

#[derive(Serialize)]
struct VendorSummary<'a> {
    vendor_id: &'a str,
    dialect: sqlvend::Dialect,
    version: &'a str,
    url_pattern: String,
    operators: Vec<&'a str>,
}

fn parse_argument(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", s))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = DialectRegistry::with_builtin_vendors();

    match cli.command {
        Commands::Vendors { json } => cmd_vendors(&registry, json),
        Commands::Url {
            vendor,
            args,
            config,
            connection,
        } => cmd_url(&registry, vendor, args, config, connection),
        Commands::Render {
            vendor,
            operator,
            args,
        } => cmd_render(&registry, &vendor, &operator, &args),
        Commands::Version => cmd_version(),
    }
}

fn cmd_vendors(registry: &DialectRegistry, json: bool) -> ExitCode {
    let summaries: Vec<VendorSummary> = registry
        .iter()
        .map(|adapter| VendorSummary {
            vendor_id: adapter.vendor_id(),
            dialect: adapter.dialect(),
            version: adapter.vendor_version(),
            url_pattern: adapter.url_template().pattern(),
            operators: adapter.operators().names(),
        })
        .collect();

    if json {
        match serde_json::to_string_pretty(&summaries) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error serializing vendors: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("Vendors:");
    for s in &summaries {
        println!("  - {} ({}, version {})", s.vendor_id, s.dialect, s.version);
        println!("      url: {}", s.url_pattern);
        if !s.operators.is_empty() {
            println!("      operators: {}", s.operators.join(", "));
        }
    }
    ExitCode::SUCCESS
}

fn cmd_url(
    registry: &DialectRegistry,
    vendor: Option<String>,
    args: Vec<(String, String)>,
    config: Option<PathBuf>,
    connection: Option<String>,
) -> ExitCode {
    let result = match (vendor, connection) {
        (Some(vendor), _) => {
            let arguments: ConnectionArguments = args.into_iter().collect();
            registry
                .resolve_name(&vendor)
                .map_err(|e| e.to_string())
                .and_then(|adapter| {
                    adapter
                        .build_connection_url(&arguments)
                        .map_err(|e| e.to_string())
                })
        }
        (None, Some(name)) => {
            let settings = match config {
                Some(path) => Settings::from_file(path),
                None => Settings::load(),
            };
            settings
                .and_then(|s| s.get_connection(&name)?.build_url(registry))
                .map_err(|e| e.to_string())
        }
        (None, None) => Err("either --vendor or --connection is required".to_string()),
    };

    match result {
        Ok(url) => {
            println!("{}", url);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error building URL: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_render(
    registry: &DialectRegistry,
    vendor: &str,
    operator: &str,
    args: &[String],
) -> ExitCode {
    let adapter = match registry.resolve_name(vendor) {
        Ok(adapter) => adapter,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Known vendors: {}", registry.vendor_ids().join(", "));
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match adapter.render(operator, &args) {
        Ok(sql) => {
            println!("{}", sql);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_version() -> ExitCode {
    match version::packaged_version() {
        Ok(v) => {
            println!("{}", v);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            println!("{}", version::UNKNOWN_VERSION);
            ExitCode::FAILURE
        }
    }
}
