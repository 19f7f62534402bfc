//! # sqlvend
//!
//! Vendor dialect registry and SQL operator rendering for a cross-database
//! SQL generator.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        metadata probe (external) → DatabaseProduct       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [registry]
//! ┌─────────────────────────────────────────────────────────┐
//! │   DialectRegistry: vendor id → Arc<DialectAdapter>       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!          ┌───────────────┼────────────────────┐
//!          ▼ [config]      ▼ [sql::render]      ▼ [metadata]
//! ┌────────────────┐ ┌──────────────────┐ ┌──────────────────────┐
//! │ UrlTemplate    │ │ vendor operators │ │ statistics/metadata  │
//! │ → JDBC URL     │ │ → ANSI fallback  │ │ hooks                │
//! └────────────────┘ └──────────────────┘ └──────────────────────┘
//! ```

pub mod config;
pub mod metadata;
pub mod registry;
pub mod sql;
pub mod vendor;
pub mod version;

// Re-export SQL submodules at crate level
pub use sql::dialect;
pub use sql::render;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::config::{
        build_connection_url, ConnectionArguments, ConnectionError, UrlParameter, UrlTemplate,
    };
    pub use crate::dialect::{Dialect, SqlDialect};
    pub use crate::metadata::DatabaseProduct;
    pub use crate::registry::{DialectRegistry, RegistryError};
    pub use crate::render::{Arity, OperatorRenderer, OperatorTable, RenderError};
    pub use crate::vendor::DialectAdapter;
}

// Also export at crate root for convenience
pub use dialect::Dialect;
pub use registry::{DialectRegistry, RegistryError};
pub use render::RenderError;
pub use vendor::DialectAdapter;

/// Render `operator` with `args` for `adapter`'s vendor.
///
/// Shorthand for [`DialectAdapter::render`].
pub fn render_operator(
    operator: &str,
    args: &[&str],
    adapter: &DialectAdapter,
) -> Result<String, RenderError> {
    adapter.render(operator, args)
}
