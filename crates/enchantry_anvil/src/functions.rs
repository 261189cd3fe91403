//! # Built-in Functions
//!
//! The prior work, rename, and repair steps of the vanilla pipeline.
//! Enchantment merging lives in [`crate::combine`].

use enchantry_core::item::{canonical_name, repair_cost_of, ItemMeta};

use crate::behavior::AnvilBehavior;
use crate::function::{AnvilFunction, AnvilFunctionResult, MetaChange};
use crate::state::AnvilState;

/// Charges the prior work penalties of both inputs.
pub const PRIOR_WORK_LEVEL_COST: PriorWorkLevelCost = PriorWorkLevelCost;
/// Renames the output.
pub const RENAME: Rename = Rename;
/// Bumps the output's prior work penalty.
pub const UPDATE_PRIOR_WORK_COST: UpdatePriorWorkCost = UpdatePriorWorkCost;
/// Repairs the base by consuming raw material.
pub const REPAIR_WITH_MATERIAL: RepairWithMaterial = RepairWithMaterial;
/// Repairs the base by merging a second item of the same type.
pub const REPAIR_WITH_COMBINATION: RepairWithCombination = RepairWithCombination;

fn damage_of(meta: Option<&ItemMeta>) -> i32 {
    meta.and_then(ItemMeta::damage).unwrap_or(0)
}

/// See [`PRIOR_WORK_LEVEL_COST`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PriorWorkLevelCost;

impl AnvilFunction for PriorWorkLevelCost {
    fn name(&self) -> &'static str {
        "prior_work_level_cost"
    }

    fn can_apply(&self, _: &dyn AnvilBehavior, _: &AnvilState) -> bool {
        true
    }

    fn result(&self, _: &dyn AnvilBehavior, state: &AnvilState) -> AnvilFunctionResult {
        AnvilFunctionResult::level_cost(
            repair_cost_of(state.base().meta())
                .saturating_add(repair_cost_of(state.addition().meta())),
        )
    }
}

/// See [`RENAME`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Rename;

impl AnvilFunction for Rename {
    fn name(&self) -> &'static str {
        "rename"
    }

    fn can_apply(&self, _: &dyn AnvilBehavior, state: &AnvilState) -> bool {
        state.base().meta().is_some_and(|meta| {
            canonical_name(meta.display_name()) != canonical_name(state.rename_text())
        })
    }

    fn result(&self, _: &dyn AnvilBehavior, state: &AnvilState) -> AnvilFunctionResult {
        let repair_cost =
            repair_cost_of(state.base().meta()).max(repair_cost_of(state.addition().meta()));
        AnvilFunctionResult::level_cost(1).with_change(MetaChange::Rename {
            name: canonical_name(state.rename_text()).map(str::to_owned),
            repair_cost,
        })
    }
}

/// See [`UPDATE_PRIOR_WORK_COST`].
#[derive(Clone, Copy, Debug, Default)]
pub struct UpdatePriorWorkCost;

impl AnvilFunction for UpdatePriorWorkCost {
    fn name(&self) -> &'static str {
        "update_prior_work_cost"
    }

    fn can_apply(&self, _: &dyn AnvilBehavior, state: &AnvilState) -> bool {
        state.result().meta().is_some_and(ItemMeta::is_repairable)
    }

    fn result(&self, _: &dyn AnvilBehavior, state: &AnvilState) -> AnvilFunctionResult {
        let highest =
            repair_cost_of(state.base().meta()).max(repair_cost_of(state.addition().meta()));
        AnvilFunctionResult::EMPTY.with_change(MetaChange::SetRepairCost(
            highest.saturating_mul(2).saturating_add(1),
        ))
    }
}

/// See [`REPAIR_WITH_MATERIAL`].
///
/// Each unit of material restores a quarter of the maximum durability.
/// Units are consumed until the item is whole or the stack runs out.
#[derive(Clone, Copy, Debug, Default)]
pub struct RepairWithMaterial;

impl AnvilFunction for RepairWithMaterial {
    fn name(&self) -> &'static str {
        "repair_with_material"
    }

    fn can_apply(&self, behavior: &dyn AnvilBehavior, state: &AnvilState) -> bool {
        behavior.item_repaired_by(state.base(), state.addition())
            && state.base().item().item_type().max_durability() > 0
            && damage_of(state.base().meta()) > 0
    }

    fn result(&self, _: &dyn AnvilBehavior, state: &AnvilState) -> AnvilFunctionResult {
        let unit = i32::from(state.base().item().item_type().max_durability()) / 4;
        let available = i32::try_from(state.addition().item().amount()).unwrap_or(i32::MAX);

        let mut missing = damage_of(state.base().meta());
        let mut repairs = 0;
        while missing > 0 && repairs < available {
            missing -= unit;
            repairs += 1;
        }

        AnvilFunctionResult {
            level_cost_increase: repairs,
            material_cost_increase: repairs,
            change: MetaChange::SetDamage(missing.max(0)),
        }
    }
}

/// See [`REPAIR_WITH_COMBINATION`].
///
/// Restores the addition's remaining durability plus a 12% bonus of the
/// maximum, truncated.
#[derive(Clone, Copy, Debug, Default)]
pub struct RepairWithCombination;

impl AnvilFunction for RepairWithCombination {
    fn name(&self) -> &'static str {
        "repair_with_combination"
    }

    fn can_apply(&self, _: &dyn AnvilBehavior, state: &AnvilState) -> bool {
        let base_type = state.base().item().item_type();
        base_type == state.addition().item().item_type()
            && base_type.max_durability() > 0
            && damage_of(state.base().meta()) > 0
    }

    fn result(&self, _: &dyn AnvilBehavior, state: &AnvilState) -> AnvilFunctionResult {
        let Some(addition_damage) = state.addition().meta().and_then(ItemMeta::damage) else {
            return AnvilFunctionResult::EMPTY;
        };

        let max_durability = i32::from(state.base().item().item_type().max_durability());
        let remaining = f64::from(max_durability.saturating_sub(addition_damage));
        let restored = (remaining + f64::from(max_durability) * 0.12) as i32;
        let damage = damage_of(state.base().meta()).saturating_sub(restored).max(0);

        AnvilFunctionResult::level_cost(2).with_change(MetaChange::SetDamage(damage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::VANILLA;
    use crate::state::AnvilView;
    use enchantry_core::item::{types, ItemStack};

    fn state(base: ItemStack, addition: Option<ItemStack>) -> AnvilState {
        AnvilState::new(AnvilView::new(Some(base), addition))
    }

    fn damaged(item: &enchantry_core::item::ItemType, damage: i32) -> ItemStack {
        item.create_item_stack().with_meta(|meta| meta.set_damage(damage))
    }

    #[test]
    fn test_prior_work_sums_both_inputs() {
        let base = types::IRON_SWORD
            .create_item_stack()
            .with_meta(|meta| meta.set_repair_cost(3));
        let book = types::ENCHANTED_BOOK
            .create_item_stack()
            .with_meta(|meta| meta.set_repair_cost(1));
        let state = state(base, Some(book));
        assert_eq!(PRIOR_WORK_LEVEL_COST.result(&VANILLA, &state).level_cost_increase, 4);
    }

    #[test]
    fn test_rename_applies_only_on_change() {
        let named = types::IRON_SWORD
            .create_item_stack()
            .with_meta(|meta| meta.set_display_name(Some("Edge")));
        let same = AnvilState::new(AnvilView::new(Some(named.clone()), None).with_rename_text("Edge"));
        assert!(!RENAME.can_apply(&VANILLA, &same));

        let blank = AnvilState::new(AnvilView::new(Some(named), None).with_rename_text(""));
        assert!(RENAME.can_apply(&VANILLA, &blank));
        let result = RENAME.result(&VANILLA, &blank);
        assert_eq!(result.level_cost_increase, 1);
        assert_eq!(
            result.change,
            MetaChange::Rename {
                name: None,
                repair_cost: 0
            }
        );
    }

    #[test]
    fn test_unnamed_item_without_text_is_not_renamed() {
        let state = state(types::IRON_SWORD.create_item_stack(), None);
        assert!(!RENAME.can_apply(&VANILLA, &state));
    }

    #[test]
    fn test_update_prior_work_cost() {
        let base = types::IRON_SWORD
            .create_item_stack()
            .with_meta(|meta| meta.set_repair_cost(3));
        let state = state(base, Some(types::ENCHANTED_BOOK.create_item_stack()));
        assert!(UPDATE_PRIOR_WORK_COST.can_apply(&VANILLA, &state));
        assert_eq!(
            UPDATE_PRIOR_WORK_COST.result(&VANILLA, &state).change,
            MetaChange::SetRepairCost(7)
        );
    }

    #[test]
    fn test_material_repair_uses_quarter_units() {
        let base = damaged(&types::IRON_SWORD, 200);
        let state = state(base, Some(ItemStack::new(types::IRON_INGOT, 64)));
        assert!(REPAIR_WITH_MATERIAL.can_apply(&VANILLA, &state));
        let result = REPAIR_WITH_MATERIAL.result(&VANILLA, &state);
        // 250 / 4 = 62 per ingot, 4 ingots cover 200.
        assert_eq!(result.level_cost_increase, 4);
        assert_eq!(result.material_cost_increase, 4);
        assert_eq!(result.change, MetaChange::SetDamage(0));
    }

    #[test]
    fn test_material_repair_limited_by_stack() {
        let base = damaged(&types::IRON_SWORD, 200);
        let state = state(base, Some(ItemStack::new(types::IRON_INGOT, 2)));
        let result = REPAIR_WITH_MATERIAL.result(&VANILLA, &state);
        assert_eq!(result.material_cost_increase, 2);
        assert_eq!(result.change, MetaChange::SetDamage(76));
    }

    #[test]
    fn test_material_repair_needs_damage_and_material() {
        let undamaged = state(
            types::IRON_SWORD.create_item_stack(),
            Some(types::IRON_INGOT.create_item_stack()),
        );
        assert!(!REPAIR_WITH_MATERIAL.can_apply(&VANILLA, &undamaged));
        let wrong = state(
            damaged(&types::IRON_SWORD, 10),
            Some(types::DIAMOND.create_item_stack()),
        );
        assert!(!REPAIR_WITH_MATERIAL.can_apply(&VANILLA, &wrong));
    }

    #[test]
    fn test_combination_repair() {
        let state = state(
            damaged(&types::DIAMOND_PICKAXE, 1000),
            Some(damaged(&types::DIAMOND_PICKAXE, 1000)),
        );
        assert!(REPAIR_WITH_COMBINATION.can_apply(&VANILLA, &state));
        let result = REPAIR_WITH_COMBINATION.result(&VANILLA, &state);
        // restored = (1561 - 1000) + trunc(1561 * 0.12) = 561 + 187 = 748
        assert_eq!(result.level_cost_increase, 2);
        assert_eq!(result.change, MetaChange::SetDamage(252));
    }

    #[test]
    fn test_combination_repair_needs_same_type() {
        let state = state(
            damaged(&types::DIAMOND_PICKAXE, 1000),
            Some(types::IRON_PICKAXE.create_item_stack()),
        );
        assert!(!REPAIR_WITH_COMBINATION.can_apply(&VANILLA, &state));
    }
}
