//! Per-enchantment economics records.

use std::fmt;
use std::sync::Arc;

use crate::enchant::rarity::EnchantRarity;
use crate::key::Key;

/// Weight used when no provider supplies one.
pub const DEFAULT_WEIGHT: u32 = 0;
/// Anvil cost multiplier used when no provider supplies one.
pub const DEFAULT_ANVIL_COST: i32 = 40;

/// A level-dependent quality bound.
#[derive(Clone)]
pub enum QualityFormula {
    /// `base + (level - 1) * per_level`.
    PerLevel {
        /// Value at level 1.
        base: i32,
        /// Increase per level above 1.
        per_level: i32,
    },
    /// Same value for every level.
    Flat(i32),
    /// Arbitrary function of level.
    Custom(Arc<dyn Fn(i32) -> i32 + Send + Sync>),
}

impl QualityFormula {
    /// Default minimum quality: `1 + 10 * level`.
    pub const DEFAULT_MIN: Self = Self::per_level(11, 10);
    /// Default maximum quality: minimum plus 5.
    pub const DEFAULT_MAX: Self = Self::per_level(16, 10);

    /// Creates a linear formula.
    #[inline]
    #[must_use]
    pub const fn per_level(base: i32, per_level: i32) -> Self {
        Self::PerLevel { base, per_level }
    }

    /// Creates a constant formula.
    #[inline]
    #[must_use]
    pub const fn flat(value: i32) -> Self {
        Self::Flat(value)
    }

    /// Wraps an arbitrary function.
    #[must_use]
    pub fn custom(f: impl Fn(i32) -> i32 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Evaluates the formula for a level.
    #[must_use]
    pub fn evaluate(&self, level: i32) -> i32 {
        match self {
            Self::PerLevel { base, per_level } => {
                base.saturating_add(level.saturating_sub(1).saturating_mul(*per_level))
            }
            Self::Flat(value) => *value,
            Self::Custom(f) => f(level),
        }
    }
}

impl fmt::Debug for QualityFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerLevel { base, per_level } => f
                .debug_struct("PerLevel")
                .field("base", base)
                .field("per_level", per_level)
                .finish(),
            Self::Flat(value) => f.debug_tuple("Flat").field(value).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Partially known economics for one enchantment, as reported by a provider.
///
/// Missing fields are filled from later providers in the chain, then from
/// the defaults.
#[derive(Clone, Debug, Default)]
pub struct PartialEconomics {
    /// Rarity weight.
    pub weight: Option<u32>,
    /// Anvil cost multiplier.
    pub anvil_cost: Option<i32>,
    /// Minimum quality for a level.
    pub min_quality: Option<QualityFormula>,
    /// Maximum quality for a level.
    pub max_quality: Option<QualityFormula>,
}

impl PartialEconomics {
    /// A fully specified record.
    #[must_use]
    pub fn complete(
        weight: u32,
        anvil_cost: i32,
        min_quality: QualityFormula,
        max_quality: QualityFormula,
    ) -> Self {
        Self {
            weight: Some(weight),
            anvil_cost: Some(anvil_cost),
            min_quality: Some(min_quality),
            max_quality: Some(max_quality),
        }
    }

    /// Whether every field is known.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.weight.is_some()
            && self.anvil_cost.is_some()
            && self.min_quality.is_some()
            && self.max_quality.is_some()
    }

    /// Fills fields still missing here from `other`.
    pub fn fill_from(&mut self, other: Self) {
        self.weight = self.weight.or(other.weight);
        self.anvil_cost = self.anvil_cost.or(other.anvil_cost);
        if self.min_quality.is_none() {
            self.min_quality = other.min_quality;
        }
        if self.max_quality.is_none() {
            self.max_quality = other.max_quality;
        }
    }
}

/// Resolved economics for one enchantment.
#[derive(Clone, Debug)]
pub struct EnchantData {
    key: Key,
    weight: u32,
    rarity: EnchantRarity,
    anvil_cost: i32,
    min_quality: QualityFormula,
    max_quality: QualityFormula,
}

impl EnchantData {
    /// Resolves a record, substituting defaults for missing fields.
    #[must_use]
    pub fn resolve(key: Key, partial: PartialEconomics) -> Self {
        let weight = partial.weight.unwrap_or(DEFAULT_WEIGHT);
        Self {
            key,
            weight,
            rarity: EnchantRarity::of(weight),
            anvil_cost: partial.anvil_cost.unwrap_or(DEFAULT_ANVIL_COST),
            min_quality: partial.min_quality.unwrap_or(QualityFormula::DEFAULT_MIN),
            max_quality: partial.max_quality.unwrap_or(QualityFormula::DEFAULT_MAX),
        }
    }

    /// The enchantment this record describes.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Selection weight.
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Rarity tier derived from the weight.
    #[inline]
    #[must_use]
    pub const fn rarity(&self) -> EnchantRarity {
        self.rarity
    }

    /// Anvil cost multiplier.
    #[inline]
    #[must_use]
    pub const fn anvil_cost(&self) -> i32 {
        self.anvil_cost
    }

    /// Minimum quality at which `level` can be rolled.
    #[must_use]
    pub fn min_quality(&self, level: i32) -> i32 {
        self.min_quality.evaluate(level)
    }

    /// Maximum quality at which `level` can be rolled.
    #[must_use]
    pub fn max_quality(&self, level: i32) -> i32 {
        self.max_quality.evaluate(level)
    }
}
