//! # Core Error Types
//!
//! Errors only surface at configuration and registration boundaries.
//! Rule evaluation itself never fails: inapplicable rules report `false`
//! or an empty result instead.

use thiserror::Error;

/// Errors that can occur while building catalogs or loading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A namespaced key did not match `namespace:path` syntax.
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey {
        /// The rejected input.
        key: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// An enchantment was registered twice.
    #[error("enchantment already registered: {0}")]
    DuplicateEnchantment(String),

    /// An enchantment definition is internally inconsistent.
    #[error("invalid enchantment {key}: {reason}")]
    InvalidEnchantment {
        /// The offending enchantment.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration {path}: {reason}")]
    ConfigIo {
        /// Path that was read.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Failure reported by an economics data provider.
///
/// Provider failures are never surfaced to callers of the economics table;
/// they are logged and the next provider in the chain is consulted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider's backing data is not available in this host.
    #[error("provider {provider} unavailable: {reason}")]
    Unavailable {
        /// Provider name.
        provider: String,
        /// Why it is unavailable.
        reason: String,
    },

    /// The provider panicked or returned malformed data.
    #[error("provider {provider} failed for {key}: {reason}")]
    Failed {
        /// Provider name.
        provider: String,
        /// Enchantment being resolved.
        key: String,
        /// Failure description.
        reason: String,
    },
}
