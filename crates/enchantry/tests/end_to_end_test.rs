//! End-to-end: enchant at a table, then work the item at an anvil.

use enchantry::prelude::*;
use proptest::prelude::*;

fn temp_config_path() -> std::path::PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("test_enchantry_{id}.toml"))
}

fn enchant_at_table(engine: &Enchantry, item: &ItemStack, seed: u64) -> Option<ItemStack> {
    let table = engine.table_for(item.item_type())?;
    let session = EnchantingSession::new(seed);
    let prepared = session.prepare(&table, item, 15)?;
    let level = prepared.button_levels[2];
    let granted = session.enchant(&table, item, 2, level)?;
    Some(item.clone().with_meta(|meta| {
        for (key, level) in &granted {
            meta.add_enchant(key.clone(), *level);
        }
    }))
}

#[test]
fn test_table_then_anvil() {
    let engine = Enchantry::vanilla();
    let pickaxe = types::DIAMOND_PICKAXE.create_item_stack();

    let enchanted = (0..100)
        .filter_map(|seed| enchant_at_table(&engine, &pickaxe, seed))
        .find(|item| !item.item_meta().unwrap().enchants().is_empty())
        .expect("a full bookshelf table enchants a pickaxe");

    // A second enchant at the table is refused.
    let table = engine.table_for(&types::DIAMOND_PICKAXE).unwrap();
    assert!(EnchantingSession::new(1).prepare(&table, &enchanted, 15).is_none());

    // Renaming at the anvil keeps the enchantments.
    let result = engine.forge(engine.view(Some(enchanted.clone()), None).with_rename_text("Digger"));
    let meta = result.item().item_meta().unwrap();
    assert_eq!(meta.display_name(), Some("Digger"));
    assert_eq!(meta.enchants(), enchanted.item_meta().unwrap().enchants());
}

#[test]
fn test_repeated_work_raises_prior_work() {
    let engine = Enchantry::vanilla();
    let mut sword = types::DIAMOND_SWORD.create_item_stack();
    let mut last_cost = 0;

    for (round, enchantment) in [keys::SHARPNESS, keys::LOOTING, keys::UNBREAKING, keys::FIRE_ASPECT]
        .into_iter()
        .enumerate()
    {
        let book = types::ENCHANTED_BOOK
            .create_item_stack()
            .with_meta(|meta| meta.add_enchant(enchantment, 1));
        let result = engine.forge(engine.view(Some(sword), Some(book)));
        assert!(!result.is_empty(), "round {round} produced nothing");
        let repair_cost = result.item().item_meta().unwrap().repair_cost().unwrap();
        assert_eq!(repair_cost, 2 * last_cost + 1);
        last_cost = repair_cost;
        sword = result.into_item();
    }

    assert_eq!(last_cost, 15);
    assert_eq!(sword.item_meta().unwrap().enchants().len(), 4);
}

#[test]
fn test_config_file_round_trip() {
    let path = temp_config_path();
    std::fs::write(
        &path,
        r#"
        [anvil]
        maximum_repair_cost = 20

        [[enchantment]]
        key = "minecraft:mending"
        anvil_cost = 1
        "#,
    )
    .unwrap();

    let engine = Enchantry::load(&path).unwrap();
    assert_eq!(engine.settings().maximum_repair_cost, 20);
    assert_eq!(engine.economics().data(&keys::MENDING).anvil_cost(), 1);

    std::fs::remove_file(&path).ok();
    assert!(Enchantry::load(&path).is_err());
}

#[test]
fn test_rename_cap_follows_config() {
    let config = EnchantryConfig::from_toml_str("[anvil]\nmaximum_repair_cost = 10").unwrap();
    let engine = Enchantry::from_config(&config);
    let worn = types::IRON_SWORD
        .create_item_stack()
        .with_meta(|meta| meta.set_repair_cost(31));
    let result = engine.forge(engine.view(Some(worn), None).with_rename_text("Old"));
    assert_eq!(result.level_cost(), 9);
}

proptest! {
    #[test]
    fn prop_forging_unchanged_item_is_empty(repair_cost in 0i32..40, damage in 0i32..100) {
        let engine = Enchantry::vanilla();
        let sword = types::IRON_SWORD.create_item_stack().with_meta(|meta| {
            meta.set_repair_cost(repair_cost);
            meta.set_damage(damage);
        });
        let dirt = types::DIRT.create_item_stack();
        prop_assert!(engine.forge(engine.view(Some(sword.clone()), Some(dirt))).is_empty());
        prop_assert!(engine.forge(engine.view(Some(sword), None)).is_empty());
    }
}
