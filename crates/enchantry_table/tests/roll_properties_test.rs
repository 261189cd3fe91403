//! Property tests for table rolls.

use enchantry_core::enchant::EnchantmentRegistry;
use enchantry_core::item::types;
use enchantry_core::random::seeded;
use enchantry_table::{Enchantability, EnchantingTable};
use proptest::prelude::*;

fn enchantable_items() -> Vec<&'static enchantry_core::item::ItemType> {
    types::ALL
        .iter()
        .filter(|item| Enchantability::for_item(item).is_some())
        .collect()
}

#[test]
fn test_every_enchantable_item_has_candidates() {
    for item in enchantable_items() {
        if item == &types::ENCHANTED_BOOK {
            continue;
        }
        let table = EnchantingTable::for_item(item).unwrap();
        assert!(!table.enchantments().is_empty(), "{} has nothing to roll", item.key());
    }
}

#[test]
fn test_high_level_books_roll_multiple() {
    let table = EnchantingTable::for_item(&types::BOOK).unwrap();
    let mut random = seeded(2024);
    let multi = (0..500)
        .filter(|_| table.apply(&mut random, 30).len() > 1)
        .count();
    assert!(multi > 0);
}

proptest! {
    #[test]
    fn prop_button_levels_reproducible(seed in any::<u64>(), shelves in -5i32..40) {
        let first = EnchantingTable::get_button_levels(&mut seeded(seed), shelves);
        let second = EnchantingTable::get_button_levels(&mut seeded(seed), shelves);
        prop_assert_eq!(first, second);
        for level in first {
            prop_assert!((0..=30).contains(&level));
        }
    }

    #[test]
    fn prop_low_level_rolls_nothing(seed in any::<u64>(), level in -10i32..1) {
        let table = EnchantingTable::for_item(&types::DIAMOND_SWORD).unwrap();
        prop_assert!(table.apply(&mut seeded(seed), level).is_empty());
        prop_assert!(table.get_offer(&mut seeded(seed), level).is_none());
    }

    #[test]
    fn prop_selection_never_conflicts(seed in any::<u64>(), level in 1i32..=30, index in 0usize..64) {
        let items = enchantable_items();
        let item = items[index % items.len()];
        let table = EnchantingTable::for_item(item).unwrap();
        let selection = table.apply(&mut seeded(seed), level);

        let registry = EnchantmentRegistry::vanilla();
        for (i, (first, _)) in selection.iter().enumerate() {
            for (second, _) in &selection[i + 1..] {
                let first = registry.get(first).unwrap();
                let second = registry.get(second).unwrap();
                prop_assert!(!first.conflicts_with(second));
            }
        }
    }

    #[test]
    fn prop_rolled_levels_within_bounds(seed in any::<u64>(), level in 1i32..=30) {
        let table = EnchantingTable::for_item(&types::DIAMOND_CHESTPLATE).unwrap();
        let registry = EnchantmentRegistry::vanilla();
        for (key, rolled) in table.apply(&mut seeded(seed), level) {
            let enchantment = registry.get(&key).unwrap();
            prop_assert!(rolled >= enchantment.start_level());
            prop_assert!(rolled <= enchantment.max_level());
        }
    }
}
