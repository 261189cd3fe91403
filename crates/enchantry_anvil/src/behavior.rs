//! # Anvil Behavior
//!
//! The policy an anvil consults: which enchantments apply, which conflict,
//! how high they go, which items combine enchantments and which materials
//! repair what. Every method has a vanilla default; implementors override
//! only what they change.

use enchantry_core::enchant::{EconomicsTable, EnchantmentRegistry};
use enchantry_core::item::{types, MetaCachedStack};
use enchantry_core::key::Key;

use crate::repair;

/// Pluggable anvil policy.
pub trait AnvilBehavior: Send + Sync {
    /// Enchantment definitions used by the default predicates.
    fn registry(&self) -> &EnchantmentRegistry {
        EnchantmentRegistry::vanilla()
    }

    /// Economics used to price enchantment transfers.
    fn economics(&self) -> &EconomicsTable {
        EconomicsTable::global()
    }

    /// Whether an enchantment can be applied to the base item.
    /// Unregistered enchantments never apply.
    fn enchant_applies(&self, enchantment: &Key, base: &MetaCachedStack) -> bool {
        self.registry()
            .get(enchantment)
            .is_some_and(|definition| definition.can_enchant_item(base.item()))
    }

    /// Whether two enchantments cannot coexist.
    fn enchants_conflict(&self, first: &Key, second: &Key) -> bool {
        let registry = self.registry();
        match (registry.get(first), registry.get(second)) {
            (Some(first), Some(second)) => first.conflicts_with(second),
            _ => first == second,
        }
    }

    /// Highest level an anvil may produce for an enchantment.
    /// Unregistered enchantments cap at 1.
    fn enchant_max_level(&self, enchantment: &Key) -> i32 {
        self.registry()
            .get(enchantment)
            .map_or(1, |definition| definition.max_level())
    }

    /// Whether the addition's enchantments transfer to the base: the items
    /// share a type, or the addition is an enchanted book.
    fn items_combine_enchants(&self, base: &MetaCachedStack, addition: &MetaCachedStack) -> bool {
        let addition_type = addition.item().item_type();
        base.item().item_type() == addition_type || addition_type == &types::ENCHANTED_BOOK
    }

    /// Whether the addition repairs the base by direct consumption.
    fn item_repaired_by(&self, repaired: &MetaCachedStack, material: &MetaCachedStack) -> bool {
        repair::repairs(repaired.item(), material.item())
    }
}

/// The vanilla policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VanillaBehavior;

impl AnvilBehavior for VanillaBehavior {}

/// Shared vanilla policy instance.
pub static VANILLA: VanillaBehavior = VanillaBehavior;
