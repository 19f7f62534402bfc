//! Statistics and metadata trait definitions.
//!
//! Implementations live outside this crate; adapters only carry the hooks
//! that produce them.

use std::fmt;
use std::sync::Arc;

use super::DatabaseProduct;

/// A connected data source, as seen by statistics collectors.
pub trait DataSource: Send + Sync {
    /// Driver-ready connection URL.
    fn url(&self) -> &str;

    /// Product reported by the connection.
    fn product(&self) -> &DatabaseProduct;
}

/// Vendor-specific statistics over a data source.
pub trait DatabaseStatistics: Send + Sync {
    /// Estimated row count for a table, if known.
    fn row_count(&self, schema: &str, table: &str) -> Option<u64>;

    /// Whether statistics can be gathered at all for this source.
    fn is_available(&self) -> bool {
        true
    }
}

/// Factory hook creating statistics for a data source.
pub type StatisticsFactory =
    Arc<dyn Fn(&dyn DataSource) -> Box<dyn DatabaseStatistics> + Send + Sync>;

/// How a vendor folds unquoted identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierCase {
    /// PostgreSQL family: `Orders` → `orders`.
    Lower,
    /// Oracle-style: `Orders` → `ORDERS`.
    Upper,
    /// MySQL/SQL Server: stored as written.
    Preserve,
}

/// Vendor-specific catalog conventions.
pub trait VendorMetadataSupport: fmt::Debug + Send + Sync {
    /// Normalize an unquoted identifier the way the vendor stores it.
    fn normalize_identifier(&self, ident: &str) -> String;

    /// Schema used when none is given.
    fn default_schema(&self) -> Option<&str>;
}

/// [`VendorMetadataSupport`] driven by a case rule and default schema.
#[derive(Debug, Clone)]
pub struct CaseFoldingMetadata {
    case: IdentifierCase,
    default_schema: Option<String>,
}

impl CaseFoldingMetadata {
    pub fn new(case: IdentifierCase, default_schema: Option<&str>) -> Self {
        Self {
            case,
            default_schema: default_schema.map(str::to_string),
        }
    }

    pub fn case(&self) -> IdentifierCase {
        self.case
    }
}

impl VendorMetadataSupport for CaseFoldingMetadata {
    fn normalize_identifier(&self, ident: &str) -> String {
        match self.case {
            IdentifierCase::Lower => ident.to_lowercase(),
            IdentifierCase::Upper => ident.to_uppercase(),
            IdentifierCase::Preserve => ident.to_string(),
        }
    }

    fn default_schema(&self) -> Option<&str> {
        self.default_schema.as_deref()
    }
}
