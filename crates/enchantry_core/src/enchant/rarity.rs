//! Enchantment rarity tiers.

use serde::{Deserialize, Serialize};

/// Rarity tier of an enchantment.
///
/// Ordered from least to most rare; [`EnchantRarity::Unknown`] sorts last and
/// is used for enchantments with no recognized weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum EnchantRarity {
    /// Weight 10, anvil multiplier 1.
    Common = 0,
    /// Weight 5, anvil multiplier 2.
    Uncommon = 1,
    /// Weight 2, anvil multiplier 4.
    Rare = 2,
    /// Weight 1, anvil multiplier 8.
    VeryRare = 3,
    /// Weight 0, anvil multiplier 40.
    Unknown = 4,
}

impl EnchantRarity {
    /// All tiers in order.
    pub const ALL: [Self; 5] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::VeryRare,
        Self::Unknown,
    ];

    /// Selection weight for this tier.
    #[inline]
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Common => 10,
            Self::Uncommon => 5,
            Self::Rare => 2,
            Self::VeryRare => 1,
            Self::Unknown => 0,
        }
    }

    /// Anvil cost multiplier for this tier.
    #[inline]
    #[must_use]
    pub const fn anvil_multiplier(self) -> i32 {
        match self {
            Self::Common => 1,
            Self::Uncommon => 2,
            Self::Rare => 4,
            Self::VeryRare => 8,
            Self::Unknown => 40,
        }
    }

    /// Maps a weight to its tier, or [`EnchantRarity::Unknown`] if none match.
    #[must_use]
    pub const fn of(weight: u32) -> Self {
        match weight {
            10 => Self::Common,
            5 => Self::Uncommon,
            2 => Self::Rare,
            1 => Self::VeryRare,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_round_trips_known_weights() {
        for rarity in EnchantRarity::ALL {
            assert_eq!(EnchantRarity::of(rarity.weight()), rarity);
        }
    }

    #[test]
    fn test_unmatched_weight_is_unknown() {
        assert_eq!(EnchantRarity::of(3), EnchantRarity::Unknown);
        assert_eq!(EnchantRarity::of(100), EnchantRarity::Unknown);
    }

    #[test]
    fn test_ordered_by_descending_weight() {
        let weights: Vec<_> = EnchantRarity::ALL.iter().map(|r| r.weight()).collect();
        assert!(weights.windows(2).all(|w| w[0] > w[1]));
        assert!(EnchantRarity::Common < EnchantRarity::Unknown);
    }
}
