//! Metadata collaborator interfaces.
//!
//! The registry only *resolves* vendors; probing a live database for its
//! product name, gathering statistics and reading catalogs all happen in
//! external collaborators. This module defines the seams they plug into:
//!
//! ```text
//! ┌──────────────────────┐   DatabaseProduct   ┌──────────────────────┐
//! │  metadata probe      │ ──────────────────▶ │  DialectRegistry     │
//! │  (external)          │                     │  resolve()           │
//! └──────────────────────┘                     └──────────┬───────────┘
//!                                                         │ DialectAdapter
//!                                      ┌──────────────────┴─────────────┐
//!                                      ▼                                ▼
//!                       create_database_statistics()     vendor_metadata_support()
//!                         Box<dyn DatabaseStatistics>    &dyn VendorMetadataSupport
//! ```

mod provider;

pub use provider::{
    CaseFoldingMetadata, DataSource, DatabaseStatistics, IdentifierCase, StatisticsFactory,
    VendorMetadataSupport,
};

use serde::{Deserialize, Serialize};

/// Product information reported by a database connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatabaseProduct {
    /// Product name as reported by the driver (e.g. `"Greenplum"`).
    pub product_name: String,
    /// Product version, when the probe reports one.
    #[serde(default)]
    pub product_version: Option<String>,
}

impl DatabaseProduct {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            product_version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.product_version = Some(version.into());
        self
    }
}
