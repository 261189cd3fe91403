//! # Configuration
//!
//! Balance overrides loaded from TOML:
//!
//! ```toml
//! [anvil]
//! maximum_repair_cost = 40
//!
//! [[enchantment]]
//! key = "minecraft:mending"
//! weight = 2
//! anvil_cost = 4
//! min_quality = { base = 25, per_level = 25 }
//! max_quality = { flat = 75 }
//!
//! [enchantability]
//! "minecraft:iron_sword" = 20
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::enchant::{PartialEconomics, QualityFormula, StaticProvider};
use crate::error::{CoreError, CoreResult};
use crate::key::Key;

/// The configuration shipped with the crate.
pub const DEFAULT_CONFIG: &str = include_str!("../config/enchantry.toml");

/// Default anvil "too expensive" ceiling.
pub const DEFAULT_MAXIMUM_REPAIR_COST: i32 = 40;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnchantryConfig {
    /// Anvil settings.
    pub anvil: AnvilSettings,
    /// Per-enchantment economics overrides.
    pub enchantment: Vec<EnchantmentOverride>,
    /// Enchantability overrides by item type.
    pub enchantability: BTreeMap<Key, u32>,
}

/// Anvil settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnvilSettings {
    /// Level cost ceiling. Rename-only operations cost at most one less.
    pub maximum_repair_cost: i32,
}

impl Default for AnvilSettings {
    fn default() -> Self {
        Self {
            maximum_repair_cost: DEFAULT_MAXIMUM_REPAIR_COST,
        }
    }
}

/// Economics override for one enchantment. Omitted fields fall through to
/// the next provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnchantmentOverride {
    /// Enchantment key.
    pub key: Key,
    /// Rarity weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    /// Anvil cost multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anvil_cost: Option<i32>,
    /// Minimum quality formula.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_quality: Option<QualityConfig>,
    /// Maximum quality formula.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quality: Option<QualityConfig>,
}

/// A quality formula as written in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QualityConfig {
    /// `base + (level - 1) * per_level`.
    PerLevel {
        /// Value at level 1.
        base: i32,
        /// Increase per level.
        per_level: i32,
    },
    /// Constant value.
    Flat {
        /// The value.
        flat: i32,
    },
}

impl From<QualityConfig> for QualityFormula {
    fn from(config: QualityConfig) -> Self {
        match config {
            QualityConfig::PerLevel { base, per_level } => Self::per_level(base, per_level),
            QualityConfig::Flat { flat } => Self::flat(flat),
        }
    }
}

impl EnchantryConfig {
    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] on malformed TOML or invalid
    /// values.
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| CoreError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ConfigIo`] if the file cannot be read, otherwise
    /// as [`EnchantryConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CoreError::ConfigIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// The configuration shipped with the crate.
    ///
    /// # Errors
    ///
    /// Only if the bundled file is invalid.
    pub fn bundled() -> CoreResult<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] describing the first problem.
    pub fn validate(&self) -> CoreResult<()> {
        if self.anvil.maximum_repair_cost < 1 {
            return Err(CoreError::InvalidConfig(format!(
                "anvil.maximum_repair_cost must be positive, got {}",
                self.anvil.maximum_repair_cost
            )));
        }

        let mut seen = std::collections::BTreeSet::new();
        for entry in &self.enchantment {
            if !seen.insert(&entry.key) {
                return Err(CoreError::InvalidConfig(format!(
                    "enchantment {} is configured twice",
                    entry.key
                )));
            }
            if entry.anvil_cost.is_some_and(|cost| cost < 0) {
                return Err(CoreError::InvalidConfig(format!(
                    "enchantment {} has a negative anvil_cost",
                    entry.key
                )));
            }
        }

        if let Some((item, _)) = self.enchantability.iter().find(|(_, value)| **value == 0) {
            return Err(CoreError::InvalidConfig(format!(
                "enchantability for {item} must be positive"
            )));
        }

        Ok(())
    }

    /// The enchantment overrides as an economics provider.
    #[must_use]
    pub fn economics_provider(&self) -> StaticProvider {
        let mut provider = StaticProvider::new("config");
        for entry in &self.enchantment {
            provider.insert(
                entry.key.clone(),
                PartialEconomics {
                    weight: entry.weight,
                    anvil_cost: entry.anvil_cost,
                    min_quality: entry.min_quality.map(QualityFormula::from),
                    max_quality: entry.max_quality.map(QualityFormula::from),
                },
            );
        }
        provider
    }
}
