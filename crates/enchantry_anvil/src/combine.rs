//! # Enchantment Combining
//!
//! Transfers the addition's enchantments onto the base. Pricing differs
//! between editions, so the step is generic over an [`Edition`] strategy.
//!
//! | | Java | Bedrock |
//! |---|---|---|
//! | Cost per enchantment | `multiplier * new_level` | `multiplier * (new_level - old_level)` |
//! | Incompatible enchantment | 1 level | free |
//! | Trident enchantments | standard multiplier | halved, quartered from books |

use std::collections::BTreeMap;

use enchantry_core::item::{types, ItemMeta};
use enchantry_core::key::Key;

use crate::behavior::AnvilBehavior;
use crate::function::{AnvilFunction, AnvilFunctionResult, MetaChange};
use crate::state::AnvilState;

/// Merges enchantments with Java Edition pricing.
pub const COMBINE_ENCHANTMENTS_JAVA_EDITION: CombineEnchantments<JavaEdition> =
    CombineEnchantments::new(JavaEdition);
/// Merges enchantments with Bedrock Edition pricing.
pub const COMBINE_ENCHANTMENTS_BEDROCK_EDITION: CombineEnchantments<BedrockEdition> =
    CombineEnchantments::new(BedrockEdition);

/// Edition-specific pricing.
pub trait Edition: Send + Sync {
    /// Short name used in trace output.
    const NAME: &'static str;

    /// Cost multiplier for transferring one enchantment. Halved from books.
    fn anvil_cost(&self, behavior: &dyn AnvilBehavior, enchantment: &Key, from_book: bool) -> i32 {
        let cost = behavior.economics().data(enchantment).anvil_cost();
        if from_book {
            (cost / 2).max(1)
        } else {
            cost
        }
    }

    /// Cost of one applied enchantment.
    fn applied_cost(&self, multiplier: i32, old_level: i32, new_level: i32) -> i32;

    /// Cost of one enchantment that could not be applied.
    fn incompatible_cost(&self) -> i32;
}

/// Java Edition pricing.
#[derive(Clone, Copy, Debug, Default)]
pub struct JavaEdition;

impl Edition for JavaEdition {
    const NAME: &'static str = "combine_enchantments_java";

    fn applied_cost(&self, multiplier: i32, _old_level: i32, new_level: i32) -> i32 {
        multiplier.saturating_mul(new_level)
    }

    fn incompatible_cost(&self) -> i32 {
        1
    }
}

/// Bedrock Edition pricing.
#[derive(Clone, Copy, Debug, Default)]
pub struct BedrockEdition;

impl BedrockEdition {
    fn is_trident_enchantment(behavior: &dyn AnvilBehavior, enchantment: &Key) -> bool {
        behavior
            .registry()
            .get(enchantment)
            .is_some_and(|definition| definition.supported_items().is_tagged(&types::TRIDENT))
    }
}

impl Edition for BedrockEdition {
    const NAME: &'static str = "combine_enchantments_bedrock";

    fn anvil_cost(&self, behavior: &dyn AnvilBehavior, enchantment: &Key, from_book: bool) -> i32 {
        let cost = behavior.economics().data(enchantment).anvil_cost();
        if !Self::is_trident_enchantment(behavior, enchantment) {
            return if from_book { (cost / 2).max(1) } else { cost };
        }
        let reduced = if from_book { cost / 4 } else { cost / 2 };
        reduced.max(1)
    }

    fn applied_cost(&self, multiplier: i32, old_level: i32, new_level: i32) -> i32 {
        if new_level > old_level {
            multiplier.saturating_mul(new_level.saturating_sub(old_level))
        } else {
            0
        }
    }

    fn incompatible_cost(&self) -> i32 {
        0
    }
}

/// The enchantment merging step.
#[derive(Clone, Copy, Debug, Default)]
pub struct CombineEnchantments<E> {
    edition: E,
}

impl<E: Edition> CombineEnchantments<E> {
    /// Creates the step for an edition.
    #[must_use]
    pub const fn new(edition: E) -> Self {
        Self { edition }
    }

    /// The pricing strategy.
    #[inline]
    #[must_use]
    pub const fn edition(&self) -> &E {
        &self.edition
    }
}

fn enchants_of(meta: Option<&ItemMeta>) -> Option<&BTreeMap<Key, i32>> {
    meta.map(ItemMeta::enchants)
}

impl<E: Edition> AnvilFunction for CombineEnchantments<E> {
    fn name(&self) -> &'static str {
        E::NAME
    }

    fn can_apply(&self, behavior: &dyn AnvilBehavior, state: &AnvilState) -> bool {
        behavior.items_combine_enchants(state.base(), state.addition())
    }

    fn result(&self, behavior: &dyn AnvilBehavior, state: &AnvilState) -> AnvilFunctionResult {
        let empty = BTreeMap::new();
        let base_enchants = enchants_of(state.base().meta()).unwrap_or(&empty);
        let added_enchants = enchants_of(state.addition().meta()).unwrap_or(&empty);
        if added_enchants.is_empty() {
            return AnvilFunctionResult::EMPTY;
        }

        let from_book = state.addition().item().item_type() == &types::ENCHANTED_BOOK;
        let mut merged = BTreeMap::new();
        let mut cost = 0i32;

        for (enchantment, &added_level) in added_enchants {
            let multiplier = self.edition.anvil_cost(behavior, enchantment, from_book);
            let old_level = base_enchants.get(enchantment).copied().unwrap_or(0);

            let applies = behavior.enchant_applies(enchantment, state.base())
                && !base_enchants.keys().any(|existing| {
                    existing != enchantment && behavior.enchants_conflict(existing, enchantment)
                });
            if !applies {
                cost = cost.saturating_add(self.edition.incompatible_cost());
                continue;
            }

            let new_level = if old_level == added_level {
                added_level.saturating_add(1)
            } else {
                old_level.max(added_level)
            }
            .min(behavior.enchant_max_level(enchantment));

            merged.insert(enchantment.clone(), new_level);
            cost = cost.saturating_add(self.edition.applied_cost(multiplier, old_level, new_level));
        }

        if cost < 0 {
            cost = state.maximum_repair_cost();
        }

        AnvilFunctionResult::level_cost(cost).with_change(MetaChange::AddEnchants(merged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::VANILLA;
    use crate::state::AnvilView;
    use enchantry_core::enchant::keys;
    use enchantry_core::item::ItemStack;

    fn book(enchants: &[(Key, i32)]) -> ItemStack {
        types::ENCHANTED_BOOK.create_item_stack().with_meta(|meta| {
            for (key, level) in enchants {
                meta.add_enchant(key.clone(), *level);
            }
        })
    }

    fn enchanted(item: &enchantry_core::item::ItemType, enchants: &[(Key, i32)]) -> ItemStack {
        item.create_item_stack().with_meta(|meta| {
            for (key, level) in enchants {
                meta.add_enchant(key.clone(), *level);
            }
        })
    }

    fn state(base: ItemStack, addition: ItemStack) -> AnvilState {
        AnvilState::new(AnvilView::new(Some(base), Some(addition)))
    }

    #[test]
    fn test_equal_levels_upgrade() {
        let state = state(
            enchanted(&types::DIAMOND_SWORD, &[(keys::SHARPNESS, 3)]),
            enchanted(&types::DIAMOND_SWORD, &[(keys::SHARPNESS, 3)]),
        );
        let result = COMBINE_ENCHANTMENTS_JAVA_EDITION.result(&VANILLA, &state);
        assert_eq!(result.level_cost_increase, 4);
        assert_eq!(
            result.change,
            MetaChange::AddEnchants(BTreeMap::from([(keys::SHARPNESS, 4)]))
        );
    }

    #[test]
    fn test_levels_capped_at_max() {
        let state = state(
            enchanted(&types::DIAMOND_SWORD, &[(keys::SHARPNESS, 5)]),
            book(&[(keys::SHARPNESS, 5)]),
        );
        let result = COMBINE_ENCHANTMENTS_JAVA_EDITION.result(&VANILLA, &state);
        assert_eq!(
            result.change,
            MetaChange::AddEnchants(BTreeMap::from([(keys::SHARPNESS, 5)]))
        );
        // Sharpness multiplier 1, halved from a book and floored at 1.
        assert_eq!(result.level_cost_increase, 5);
    }

    #[test]
    fn test_book_halves_multiplier() {
        let state = state(
            types::DIAMOND_BOOTS.create_item_stack(),
            book(&[(keys::FEATHER_FALLING, 4)]),
        );
        // Feather falling multiplier 2, halved to 1.
        let result = COMBINE_ENCHANTMENTS_JAVA_EDITION.result(&VANILLA, &state);
        assert_eq!(result.level_cost_increase, 4);
    }

    #[test]
    fn test_conflicting_enchantment_charges_java_only() {
        let base = || enchanted(&types::DIAMOND_SWORD, &[(keys::SHARPNESS, 1)]);
        let java = COMBINE_ENCHANTMENTS_JAVA_EDITION
            .result(&VANILLA, &state(base(), book(&[(keys::SMITE, 1)])));
        assert_eq!(java.level_cost_increase, 1);
        assert_eq!(java.change, MetaChange::AddEnchants(BTreeMap::new()));

        let bedrock = COMBINE_ENCHANTMENTS_BEDROCK_EDITION
            .result(&VANILLA, &state(base(), book(&[(keys::SMITE, 1)])));
        assert_eq!(bedrock.level_cost_increase, 0);
    }

    #[test]
    fn test_bedrock_charges_level_difference() {
        let state = state(
            enchanted(&types::DIAMOND_PICKAXE, &[(keys::EFFICIENCY, 4)]),
            enchanted(&types::DIAMOND_PICKAXE, &[(keys::EFFICIENCY, 4)]),
        );
        let java = COMBINE_ENCHANTMENTS_JAVA_EDITION.result(&VANILLA, &state);
        let bedrock = COMBINE_ENCHANTMENTS_BEDROCK_EDITION.result(&VANILLA, &state);
        assert_eq!(java.level_cost_increase, 5);
        assert_eq!(bedrock.level_cost_increase, 1);
    }

    #[test]
    fn test_bedrock_trident_discount() {
        // Channeling multiplier 8: quartered from a book.
        let state = state(
            types::TRIDENT.create_item_stack(),
            book(&[(keys::CHANNELING, 1)]),
        );
        let java = COMBINE_ENCHANTMENTS_JAVA_EDITION.result(&VANILLA, &state);
        let bedrock = COMBINE_ENCHANTMENTS_BEDROCK_EDITION.result(&VANILLA, &state);
        assert_eq!(java.level_cost_increase, 4);
        assert_eq!(bedrock.level_cost_increase, 2);
    }

    #[test]
    fn test_empty_addition_changes_nothing() {
        let state = state(
            types::DIAMOND_SWORD.create_item_stack(),
            types::DIAMOND_SWORD.create_item_stack(),
        );
        assert!(COMBINE_ENCHANTMENTS_JAVA_EDITION.can_apply(&VANILLA, &state));
        assert_eq!(
            COMBINE_ENCHANTMENTS_JAVA_EDITION.result(&VANILLA, &state),
            AnvilFunctionResult::EMPTY
        );
    }

    #[test]
    fn test_negative_total_clamps_to_maximum() {
        let state = AnvilState::new(
            AnvilView::new(
                Some(enchanted(&types::DIAMOND_SWORD, &[(keys::SHARPNESS, -10)])),
                Some(enchanted(&types::DIAMOND_SWORD, &[(keys::SHARPNESS, -10)])),
            )
            .with_maximum_repair_cost(39),
        );
        let result = COMBINE_ENCHANTMENTS_JAVA_EDITION.result(&VANILLA, &state);
        assert_eq!(result.level_cost_increase, 39);
    }
}
