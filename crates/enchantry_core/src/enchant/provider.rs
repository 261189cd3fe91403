//! # Economics Providers
//!
//! Sources of enchantment economics, consulted in order by the
//! [`EconomicsTable`](crate::enchant::EconomicsTable). A provider may know
//! all, some or none of an enchantment's fields, and may fail; failures never
//! reach the caller of the table.

use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::enchant::data::PartialEconomics;
use crate::enchant::vanilla::VANILLA;
use crate::error::ProviderError;
use crate::key::Key;

/// A source of enchantment economics.
pub trait EnchantDataProvider: Send + Sync + fmt::Debug {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Looks up the economics for an enchantment.
    ///
    /// `Ok(None)` means the provider knows nothing about the enchantment.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the provider's backing data could not
    /// be read.
    fn lookup(&self, enchantment: &Key) -> Result<Option<PartialEconomics>, ProviderError>;
}

/// A provider backed by a fixed map.
#[derive(Clone, Debug)]
pub struct StaticProvider {
    name: String,
    entries: HashMap<Key, PartialEconomics>,
}

impl StaticProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// The vanilla enchantment economics.
    #[must_use]
    pub fn vanilla() -> Self {
        let mut provider = Self::new("vanilla");
        for row in VANILLA {
            provider.insert(row.key.clone(), row.economics());
        }
        provider
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, enchantment: Key, economics: PartialEconomics) {
        self.entries.insert(enchantment, economics);
    }

    /// Adds an entry and returns the provider.
    #[must_use]
    pub fn with(mut self, enchantment: Key, economics: PartialEconomics) -> Self {
        self.insert(enchantment, economics);
        self
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the provider has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EnchantDataProvider for StaticProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, enchantment: &Key) -> Result<Option<PartialEconomics>, ProviderError> {
        Ok(self.entries.get(enchantment).cloned())
    }
}

type Probe = dyn Fn(&Key) -> Result<Option<PartialEconomics>, ProviderError> + Send + Sync;

/// A best-effort provider that probes host internals through a closure.
///
/// Panics raised by the probe are caught and reported as
/// [`ProviderError::Failed`].
pub struct IntrospectionProvider {
    name: String,
    probe: Box<Probe>,
}

impl IntrospectionProvider {
    /// Wraps a probe function.
    pub fn new(
        name: impl Into<String>,
        probe: impl Fn(&Key) -> Result<Option<PartialEconomics>, ProviderError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            probe: Box::new(probe),
        }
    }
}

impl fmt::Debug for IntrospectionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntrospectionProvider")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl EnchantDataProvider for IntrospectionProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, enchantment: &Key) -> Result<Option<PartialEconomics>, ProviderError> {
        panic::catch_unwind(AssertUnwindSafe(|| (self.probe)(enchantment))).unwrap_or_else(
            |payload| {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_owned())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "probe panicked".to_owned());
                Err(ProviderError::Failed {
                    provider: self.name.clone(),
                    key: enchantment.to_string(),
                    reason,
                })
            },
        )
    }
}
