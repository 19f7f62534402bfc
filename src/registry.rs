//! Dialect registry.
//!
//! Holds one [`DialectAdapter`] per vendor id. Registration happens while
//! the registry is exclusively owned (`&mut self`), typically at startup;
//! afterwards the registry is shared behind an `Arc` and resolved from any
//! number of threads without locking.
//!
//! ```
//! use sqlvend::metadata::DatabaseProduct;
//! use sqlvend::registry::DialectRegistry;
//!
//! let registry = DialectRegistry::with_builtin_vendors();
//! let adapter = registry.resolve(&DatabaseProduct::new("Greenplum")).unwrap();
//! assert_eq!(adapter.render("RAND", &[]).unwrap(), "RANDOM()");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::metadata::DatabaseProduct;
use crate::vendor::{builtin, DialectAdapter};

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Vendor already registered: {0}")]
    DuplicateVendor(String),

    #[error("Unknown vendor: {0}")]
    UnknownVendor(String),
}

/// Vendor id → adapter map.
#[derive(Debug, Default)]
pub struct DialectRegistry {
    adapters: HashMap<String, Arc<DialectAdapter>>,
}

impl DialectRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every adapter from [`builtin::all`].
    pub fn with_builtin_vendors() -> Self {
        let mut registry = Self::new();
        for adapter in builtin::all() {
            if let Err(e) = registry.register(adapter) {
                warn!(error = %e, "skipping built-in vendor adapter");
            }
        }
        registry
    }

    /// Register `adapter` under its vendor id.
    ///
    /// Fails without touching the registry if the id is already taken.
    pub fn register(
        &mut self,
        adapter: DialectAdapter,
    ) -> Result<Arc<DialectAdapter>, RegistryError> {
        let vendor_id = adapter.vendor_id().to_string();
        if self.adapters.contains_key(&vendor_id) {
            return Err(RegistryError::DuplicateVendor(vendor_id));
        }

        debug!(vendor = %vendor_id, dialect = %adapter.dialect(), "registering vendor adapter");
        let adapter = Arc::new(adapter);
        self.adapters.insert(vendor_id, Arc::clone(&adapter));
        Ok(adapter)
    }

    /// Resolve the adapter for a probed product.
    pub fn resolve(
        &self,
        product: &DatabaseProduct,
    ) -> Result<Arc<DialectAdapter>, RegistryError> {
        self.resolve_name(&product.product_name)
    }

    /// Resolve by exact, case-sensitive vendor id.
    pub fn resolve_name(&self, vendor_id: &str) -> Result<Arc<DialectAdapter>, RegistryError> {
        self.adapters
            .get(vendor_id)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownVendor(vendor_id.to_string()))
    }

    pub fn contains(&self, vendor_id: &str) -> bool {
        self.adapters.contains_key(vendor_id)
    }

    /// Registered vendor ids, sorted.
    pub fn vendor_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.adapters.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Adapters in vendor id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<DialectAdapter>> {
        let mut adapters: Vec<&Arc<DialectAdapter>> = self.adapters.values().collect();
        adapters.sort_by(|a, b| a.vendor_id().cmp(b.vendor_id()));
        adapters.into_iter()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
