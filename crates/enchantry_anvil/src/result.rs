//! Forging output.

use enchantry_core::item::ItemStack;

/// The item an anvil produces and what it costs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnvilResult {
    item: ItemStack,
    level_cost: i32,
    material_cost: i32,
}

impl AnvilResult {
    /// No output.
    pub const EMPTY: Self = Self {
        item: ItemStack::AIR,
        level_cost: 0,
        material_cost: 0,
    };

    /// Creates a result.
    #[must_use]
    pub const fn new(item: ItemStack, level_cost: i32, material_cost: i32) -> Self {
        Self {
            item,
            level_cost,
            material_cost,
        }
    }

    /// The forged item.
    #[inline]
    #[must_use]
    pub fn item(&self) -> &ItemStack {
        &self.item
    }

    /// Experience levels charged.
    #[inline]
    #[must_use]
    pub const fn level_cost(&self) -> i32 {
        self.level_cost
    }

    /// Addition items consumed. 0 means the whole addition stack.
    #[inline]
    #[must_use]
    pub const fn material_cost(&self) -> i32 {
        self.material_cost
    }

    /// Whether the anvil produced nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item.is_empty()
    }

    /// Takes the forged item.
    #[must_use]
    pub fn into_item(self) -> ItemStack {
        self.item
    }
}

impl Default for AnvilResult {
    fn default() -> Self {
        Self::EMPTY
    }
}
