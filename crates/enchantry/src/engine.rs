//! # Engine
//!
//! One configuration applied consistently: the economics table the anvil
//! prices with is the one the table rolls with, and every anvil view
//! carries the configured cost ceiling.

use std::path::Path;
use std::sync::Arc;

use enchantry_anvil::{Anvil, AnvilBehavior, AnvilResult, AnvilView};
use enchantry_core::config::{AnvilSettings, EnchantryConfig};
use enchantry_core::enchant::{EconomicsTable, EnchantmentRegistry};
use enchantry_core::error::CoreResult;
use enchantry_core::item::{ItemStack, ItemType};
use enchantry_table::{EnchantabilityTable, EnchantingTable};
use tracing::debug;

/// Vanilla anvil policy priced by a specific economics table.
#[derive(Clone, Debug)]
pub struct ConfiguredBehavior {
    economics: Arc<EconomicsTable>,
}

impl ConfiguredBehavior {
    /// Creates the policy.
    #[must_use]
    pub fn new(economics: Arc<EconomicsTable>) -> Self {
        Self { economics }
    }
}

impl AnvilBehavior for ConfiguredBehavior {
    fn economics(&self) -> &EconomicsTable {
        &self.economics
    }
}

/// A configured anvil plus the data to build enchanting tables.
#[derive(Debug)]
pub struct Enchantry {
    settings: AnvilSettings,
    economics: Arc<EconomicsTable>,
    enchantability: EnchantabilityTable,
    anvil: Anvil<ConfiguredBehavior>,
}

impl Enchantry {
    /// Vanilla rules.
    #[must_use]
    pub fn vanilla() -> Self {
        Self::from_config(&EnchantryConfig::default())
    }

    /// Rules with the given overrides. Economics overrides take priority
    /// over vanilla data.
    #[must_use]
    pub fn from_config(config: &EnchantryConfig) -> Self {
        let economics = Arc::new(EconomicsTable::vanilla().with_override(config.economics_provider()));
        debug!(
            maximum_repair_cost = config.anvil.maximum_repair_cost,
            enchantment_overrides = config.enchantment.len(),
            enchantability_overrides = config.enchantability.len(),
            "Configured enchantry"
        );
        Self {
            settings: config.anvil,
            anvil: Anvil::with_behavior(ConfiguredBehavior::new(Arc::clone(&economics))),
            enchantability: EnchantabilityTable::from_config(config),
            economics,
        }
    }

    /// Loads rules from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        Ok(Self::from_config(&EnchantryConfig::from_file(path)?))
    }

    /// The anvil settings in effect.
    #[inline]
    #[must_use]
    pub const fn settings(&self) -> &AnvilSettings {
        &self.settings
    }

    /// The shared economics table.
    #[inline]
    #[must_use]
    pub fn economics(&self) -> &Arc<EconomicsTable> {
        &self.economics
    }

    /// The configured anvil.
    #[inline]
    #[must_use]
    pub const fn anvil(&self) -> &Anvil<ConfiguredBehavior> {
        &self.anvil
    }

    /// An anvil view carrying the configured cost ceiling.
    #[must_use]
    pub fn view(&self, base: Option<ItemStack>, addition: Option<ItemStack>) -> AnvilView {
        AnvilView::new(base, addition).with_maximum_repair_cost(self.settings.maximum_repair_cost)
    }

    /// Runs the anvil.
    #[must_use]
    pub fn forge(&self, view: AnvilView) -> AnvilResult {
        self.anvil.get_result(view)
    }

    /// The enchanting table for an item type, or `None` if it cannot be
    /// enchanted.
    #[must_use]
    pub fn table_for(&self, item: &ItemType) -> Option<EnchantingTable> {
        EnchantingTable::for_item_in(EnchantmentRegistry::vanilla(), &self.enchantability, item)
            .map(|table| table.with_economics(Arc::clone(&self.economics)))
    }
}

impl Default for Enchantry {
    fn default() -> Self {
        Self::vanilla()
    }
}
