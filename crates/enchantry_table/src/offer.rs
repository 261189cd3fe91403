//! Enchanting table button offers.

use enchantry_core::key::Key;

/// What a table button shows: one enchantment preview and its level cost.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnchantmentOffer {
    enchantment: Key,
    level: i32,
    cost: i32,
}

impl EnchantmentOffer {
    /// Creates an offer.
    #[must_use]
    pub fn new(enchantment: Key, level: i32, cost: i32) -> Self {
        Self {
            enchantment,
            level,
            cost,
        }
    }

    /// The previewed enchantment.
    #[inline]
    #[must_use]
    pub fn enchantment(&self) -> &Key {
        &self.enchantment
    }

    /// The previewed enchantment's level.
    #[inline]
    #[must_use]
    pub const fn level(&self) -> i32 {
        self.level
    }

    /// Experience level cost of the button.
    #[inline]
    #[must_use]
    pub const fn cost(&self) -> i32 {
        self.cost
    }
}
