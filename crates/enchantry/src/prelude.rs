//! Commonly used types.
//!
//! ```rust,ignore
//! use enchantry::prelude::*;
//! ```

pub use enchantry_anvil::{
    Anvil, AnvilBehavior, AnvilFunction, AnvilResult, AnvilState, AnvilView, VanillaBehavior,
    COMBINE_ENCHANTMENTS_BEDROCK_EDITION, COMBINE_ENCHANTMENTS_JAVA_EDITION,
};
pub use enchantry_core::enchant::keys;
pub use enchantry_core::item::types;
pub use enchantry_core::random::{seeded, RandomSource};
pub use enchantry_core::{
    EconomicsTable, Enchantment, EnchantmentRegistry, EnchantryConfig, ItemMeta, ItemStack,
    ItemType, Key,
};
pub use enchantry_table::{
    Enchantability, EnchantingSession, EnchantingTable, EnchantmentOffer, PreparedOffers,
};

pub use crate::engine::Enchantry;
