//! # Repair Material Catalog
//!
//! Which materials restore durability when consumed directly in an anvil.
//! This is distinct from combination repair, where two items of the same
//! type are merged.

use std::collections::HashMap;
use std::sync::OnceLock;

use enchantry_core::item::{types, ItemStack, ItemTag, ItemType};
use enchantry_core::key::Key;

const ARMOR_PIECES: [&str; 4] = ["_helmet", "_chestplate", "_leggings", "_boots"];
const TOOLS: [&str; 6] = ["_axe", "_shovel", "_pickaxe", "_hoe", "_sword", "_spear"];

static CATALOG: OnceLock<HashMap<Key, ItemTag>> = OnceLock::new();

/// Whether `addition` repairs `base` by direct consumption.
#[must_use]
pub fn repairs(base: &ItemStack, addition: &ItemStack) -> bool {
    materials_for(base.item_type()).is_some_and(|tag| tag.is_tagged(addition.item_type()))
}

/// The materials that repair an item type, if it has any.
#[must_use]
pub fn materials_for(item: &ItemType) -> Option<&'static ItemTag> {
    CATALOG.get_or_init(build_catalog).get(item.key())
}

fn material_tag(path: &'static str, materials: &[&ItemType]) -> ItemTag {
    ItemTag::of_types(Key::minecraft(path), materials.iter().copied())
}

fn add_gear(catalog: &mut HashMap<Key, ItemTag>, family: &str, pieces: &[&str], tag: &ItemTag) {
    for piece in pieces {
        // Family and piece names are lowercase ASCII, so the key is valid.
        if let Ok(key) = Key::new("minecraft", format!("{family}{piece}")) {
            catalog.insert(key, tag.clone());
        }
    }
}

fn build_catalog() -> HashMap<Key, ItemTag> {
    let mut catalog = HashMap::new();

    let leather = material_tag("repairs_leather_armor", &[&types::LEATHER]);
    let copper = material_tag("repairs_copper_armor", &[&types::COPPER_INGOT]);
    let chain = material_tag("repairs_chain_armor", &[&types::IRON_INGOT]);
    let iron = material_tag("repairs_iron_armor", &[&types::IRON_INGOT]);
    let gold = material_tag("repairs_gold_armor", &[&types::GOLD_INGOT]);
    let diamond = material_tag("repairs_diamond_armor", &[&types::DIAMOND]);
    let netherite = material_tag("repairs_netherite_armor", &[&types::NETHERITE_INGOT]);
    add_gear(&mut catalog, "leather", &ARMOR_PIECES, &leather);
    add_gear(&mut catalog, "copper", &ARMOR_PIECES, &copper);
    add_gear(&mut catalog, "chainmail", &ARMOR_PIECES, &chain);
    add_gear(&mut catalog, "iron", &ARMOR_PIECES, &iron);
    add_gear(&mut catalog, "golden", &ARMOR_PIECES, &gold);
    add_gear(&mut catalog, "diamond", &ARMOR_PIECES, &diamond);
    add_gear(&mut catalog, "netherite", &ARMOR_PIECES, &netherite);
    catalog.insert(
        types::TURTLE_HELMET.key().clone(),
        material_tag("repairs_turtle_helmet", &[&types::TURTLE_SCUTE]),
    );
    catalog.insert(
        types::WOLF_ARMOR.key().clone(),
        material_tag("repairs_wolf_armor", &[&types::ARMADILLO_SCUTE]),
    );

    let stone = material_tag(
        "stone_tool_materials",
        &[&types::COBBLESTONE, &types::BLACKSTONE, &types::COBBLED_DEEPSLATE],
    );
    let wood = material_tag(
        "wooden_tool_materials",
        &[
            &types::OAK_PLANKS,
            &types::SPRUCE_PLANKS,
            &types::BIRCH_PLANKS,
            &types::JUNGLE_PLANKS,
            &types::ACACIA_PLANKS,
            &types::DARK_OAK_PLANKS,
            &types::MANGROVE_PLANKS,
            &types::CHERRY_PLANKS,
            &types::PALE_OAK_PLANKS,
            &types::BAMBOO_PLANKS,
            &types::CRIMSON_PLANKS,
            &types::WARPED_PLANKS,
        ],
    );
    add_gear(&mut catalog, "stone", &TOOLS, &stone);
    add_gear(&mut catalog, "wooden", &TOOLS, &wood);
    catalog.insert(types::SHIELD.key().clone(), wood);
    add_gear(
        &mut catalog,
        "iron",
        &TOOLS,
        &material_tag("iron_tool_materials", &[&types::IRON_INGOT]),
    );
    add_gear(
        &mut catalog,
        "golden",
        &TOOLS,
        &material_tag("gold_tool_materials", &[&types::GOLD_INGOT]),
    );
    add_gear(
        &mut catalog,
        "diamond",
        &TOOLS,
        &material_tag("diamond_tool_materials", &[&types::DIAMOND]),
    );
    add_gear(
        &mut catalog,
        "netherite",
        &TOOLS,
        &material_tag("netherite_tool_materials", &[&types::NETHERITE_INGOT]),
    );

    catalog.insert(
        types::ELYTRA.key().clone(),
        material_tag("repairs_elytra", &[&types::PHANTOM_MEMBRANE]),
    );
    catalog.insert(
        types::MACE.key().clone(),
        material_tag("repairs_mace", &[&types::BREEZE_ROD]),
    );

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(item: &ItemType) -> ItemStack {
        item.create_item_stack()
    }

    #[test]
    fn test_armor_materials() {
        assert!(repairs(&stack(&types::DIAMOND_CHESTPLATE), &stack(&types::DIAMOND)));
        assert!(repairs(&stack(&types::CHAINMAIL_BOOTS), &stack(&types::IRON_INGOT)));
        assert!(repairs(&stack(&types::TURTLE_HELMET), &stack(&types::TURTLE_SCUTE)));
        assert!(!repairs(&stack(&types::IRON_HELMET), &stack(&types::GOLD_INGOT)));
    }

    #[test]
    fn test_tool_materials() {
        assert!(repairs(&stack(&types::STONE_PICKAXE), &stack(&types::COBBLED_DEEPSLATE)));
        assert!(repairs(&stack(&types::WOODEN_SPEAR), &stack(&types::CHERRY_PLANKS)));
        assert!(repairs(&stack(&types::SHIELD), &stack(&types::OAK_PLANKS)));
        assert!(repairs(&stack(&types::NETHERITE_SWORD), &stack(&types::NETHERITE_INGOT)));
    }

    #[test]
    fn test_misc_materials() {
        assert!(repairs(&stack(&types::ELYTRA), &stack(&types::PHANTOM_MEMBRANE)));
        assert!(repairs(&stack(&types::MACE), &stack(&types::BREEZE_ROD)));
        assert!(!repairs(&stack(&types::MACE), &stack(&types::IRON_INGOT)));
    }

    #[test]
    fn test_unlisted_items_have_no_materials() {
        assert!(materials_for(&types::BOW).is_none());
        assert!(materials_for(&types::COPPER_SWORD).is_none());
        assert!(!repairs(&stack(&types::DIRT), &stack(&types::DIRT)));
    }
}
