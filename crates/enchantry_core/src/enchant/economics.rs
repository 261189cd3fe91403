//! # Enchantment Economics Table
//!
//! Resolves each enchantment's weight, anvil cost and quality window through
//! an ordered provider chain, then caches the result for the life of the
//! table.
//!
//! ## Resolution
//!
//! Providers are consulted in order. Each field is taken from the first
//! provider that supplies it; fields no provider supplies fall back to the
//! defaults (weight 0, anvil cost 40, quality `1 + 10 * level` to
//! `6 + 10 * level`). Provider errors are logged and skipped.
//!
//! ## Thread Safety
//!
//! Lookups take a read lock. A miss resolves outside any lock, then inserts
//! with `entry().or_insert`, so concurrent first lookups of a key all
//! observe the same record.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::enchant::data::{EnchantData, PartialEconomics};
use crate::enchant::provider::{EnchantDataProvider, StaticProvider};
use crate::key::Key;

/// Compute-once cache of enchantment economics.
#[derive(Debug)]
pub struct EconomicsTable {
    providers: Vec<Box<dyn EnchantDataProvider>>,
    cache: RwLock<HashMap<Key, Arc<EnchantData>>>,
    warned: AtomicBool,
}

static GLOBAL: OnceLock<Arc<EconomicsTable>> = OnceLock::new();

impl EconomicsTable {
    /// Creates a table over an ordered provider chain.
    #[must_use]
    pub fn new(providers: Vec<Box<dyn EnchantDataProvider>>) -> Self {
        Self {
            providers,
            cache: RwLock::new(HashMap::new()),
            warned: AtomicBool::new(false),
        }
    }

    /// A table backed by the vanilla economics only.
    #[must_use]
    pub fn vanilla() -> Self {
        Self::new(vec![Box::new(StaticProvider::vanilla())])
    }

    /// Puts a provider ahead of the existing chain.
    #[must_use]
    pub fn with_override(mut self, provider: impl EnchantDataProvider + 'static) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }

    /// Appends a provider to the end of the chain.
    #[must_use]
    pub fn with_fallback(mut self, provider: impl EnchantDataProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// The process-wide table. Vanilla unless [`EconomicsTable::install_global`]
    /// ran first.
    #[must_use]
    pub fn global() -> &'static Arc<Self> {
        GLOBAL.get_or_init(|| Arc::new(Self::vanilla()))
    }

    /// Installs the process-wide table.
    ///
    /// # Errors
    ///
    /// Returns the table back if a global table was already installed or
    /// used.
    pub fn install_global(table: Self) -> Result<(), Self> {
        GLOBAL
            .set(Arc::new(table))
            .map_err(|rejected| Arc::into_inner(rejected).unwrap_or_default())
    }

    /// Economics for an enchantment, resolved on first request.
    #[must_use]
    pub fn data(&self, enchantment: &Key) -> Arc<EnchantData> {
        if let Some(data) = self.cache.read().get(enchantment) {
            return Arc::clone(data);
        }

        let resolved = Arc::new(self.resolve(enchantment));
        let mut cache = self.cache.write();
        Arc::clone(cache.entry(enchantment.clone()).or_insert(resolved))
    }

    /// Whether the enchantment has already been resolved.
    #[must_use]
    pub fn is_cached(&self, enchantment: &Key) -> bool {
        self.cache.read().contains_key(enchantment)
    }

    /// Number of resolved enchantments.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    fn resolve(&self, enchantment: &Key) -> EnchantData {
        let mut partial = PartialEconomics::default();

        for provider in &self.providers {
            match provider.lookup(enchantment) {
                Ok(Some(found)) => {
                    partial.fill_from(found);
                    if partial.is_complete() {
                        break;
                    }
                }
                Ok(None) => {
                    tracing::debug!(
                        provider = provider.name(),
                        enchantment = %enchantment,
                        "economics provider has no entry"
                    );
                }
                Err(error) => {
                    if self.warned.swap(true, Ordering::Relaxed) {
                        tracing::debug!(%error, "economics provider failed");
                    } else {
                        tracing::warn!(
                            %error,
                            "economics provider failed; falling back to defaults where needed"
                        );
                    }
                }
            }
        }

        if !partial.is_complete() {
            tracing::debug!(enchantment = %enchantment, "using default economics");
        }
        EnchantData::resolve(enchantment.clone(), partial)
    }
}

impl Default for EconomicsTable {
    fn default() -> Self {
        Self::vanilla()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enchant::data::QualityFormula;
    use crate::enchant::provider::IntrospectionProvider;
    use crate::enchant::rarity::EnchantRarity;
    use crate::enchant::keys;
    use crate::error::ProviderError;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_vanilla_lookup() {
        let table = EconomicsTable::vanilla();
        let data = table.data(&keys::THORNS);
        assert_eq!(data.rarity(), EnchantRarity::VeryRare);
        assert_eq!(data.anvil_cost(), 8);
        assert_eq!(data.min_quality(2), 30);
        assert_eq!(data.max_quality(2), 80);
    }

    #[test]
    fn test_unknown_enchantment_gets_defaults() {
        let table = EconomicsTable::vanilla();
        let data = table.data(&Key::new("planar", "mystery").unwrap());
        assert_eq!(data.weight(), 0);
        assert_eq!(data.rarity(), EnchantRarity::Unknown);
        assert_eq!(data.anvil_cost(), 40);
        assert_eq!(data.min_quality(1), 11);
        assert_eq!(data.max_quality(1), 16);
    }

    #[test]
    fn test_resolved_at_most_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let table = EconomicsTable::new(vec![Box::new(IntrospectionProvider::new(
            "counting",
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(None)
            },
        ))]);

        let key = keys::LURE;
        let first = table.data(&key);
        let second = table.data(&key);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(table.is_cached(&key));
    }

    #[test]
    fn test_failing_provider_falls_through() {
        let table = EconomicsTable::vanilla().with_override(IntrospectionProvider::new(
            "host",
            |key| {
                Err(ProviderError::Unavailable {
                    provider: "host".into(),
                    reason: format!("no handle for {key}"),
                })
            },
        ));
        assert_eq!(table.data(&keys::SHARPNESS).weight(), 10);
    }

    #[test]
    fn test_fields_resolve_independently() {
        let table = EconomicsTable::vanilla().with_override(
            StaticProvider::new("overrides").with(
                keys::MENDING,
                PartialEconomics {
                    anvil_cost: Some(1),
                    min_quality: Some(QualityFormula::flat(5)),
                    ..PartialEconomics::default()
                },
            ),
        );
        let data = table.data(&keys::MENDING);
        assert_eq!(data.anvil_cost(), 1);
        assert_eq!(data.min_quality(3), 5);
        // Remaining fields come from vanilla.
        assert_eq!(data.weight(), 2);
        assert_eq!(data.max_quality(1), 75);
    }

    #[test]
    fn test_concurrent_first_lookup_is_consistent() {
        let table = Arc::new(EconomicsTable::vanilla());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let table = Arc::clone(&table);
                std::thread::spawn(move || table.data(&keys::FORTUNE))
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(table.cached_len(), 1);
    }

    #[test]
    fn test_rejected_install_returns_callers_table() {
        let _ = EconomicsTable::global();
        let table = EconomicsTable::vanilla();
        let _ = table.data(&keys::LURE);
        let rejected = EconomicsTable::install_global(table).unwrap_err();
        assert!(rejected.is_cached(&keys::LURE));
        assert_eq!(rejected.cached_len(), 1);
    }
}
