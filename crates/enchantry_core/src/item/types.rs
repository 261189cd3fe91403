//! Vanilla item type catalog.
//!
//! Armor durability is the material's durability factor times the slot
//! multiplier (helmet 11, chestplate 16, leggings 15, boots 13).

use crate::item::ItemType;

macro_rules! item_types {
    ($($name:ident = $path:literal, $durability:expr;)*) => {
        $(
            #[allow(missing_docs)]
            pub const $name: ItemType = ItemType::vanilla($path, $durability);
        )*

        /// Every vanilla item type in this catalog, air included.
        pub static ALL: &[ItemType] = &[ItemType::AIR, $($name),*];
    };
}

item_types! {
    // Armor
    LEATHER_HELMET = "leather_helmet", 55;
    LEATHER_CHESTPLATE = "leather_chestplate", 80;
    LEATHER_LEGGINGS = "leather_leggings", 75;
    LEATHER_BOOTS = "leather_boots", 65;
    COPPER_HELMET = "copper_helmet", 121;
    COPPER_CHESTPLATE = "copper_chestplate", 176;
    COPPER_LEGGINGS = "copper_leggings", 165;
    COPPER_BOOTS = "copper_boots", 143;
    CHAINMAIL_HELMET = "chainmail_helmet", 165;
    CHAINMAIL_CHESTPLATE = "chainmail_chestplate", 240;
    CHAINMAIL_LEGGINGS = "chainmail_leggings", 225;
    CHAINMAIL_BOOTS = "chainmail_boots", 195;
    IRON_HELMET = "iron_helmet", 165;
    IRON_CHESTPLATE = "iron_chestplate", 240;
    IRON_LEGGINGS = "iron_leggings", 225;
    IRON_BOOTS = "iron_boots", 195;
    GOLDEN_HELMET = "golden_helmet", 77;
    GOLDEN_CHESTPLATE = "golden_chestplate", 112;
    GOLDEN_LEGGINGS = "golden_leggings", 105;
    GOLDEN_BOOTS = "golden_boots", 91;
    DIAMOND_HELMET = "diamond_helmet", 363;
    DIAMOND_CHESTPLATE = "diamond_chestplate", 528;
    DIAMOND_LEGGINGS = "diamond_leggings", 495;
    DIAMOND_BOOTS = "diamond_boots", 429;
    NETHERITE_HELMET = "netherite_helmet", 407;
    NETHERITE_CHESTPLATE = "netherite_chestplate", 592;
    NETHERITE_LEGGINGS = "netherite_leggings", 555;
    NETHERITE_BOOTS = "netherite_boots", 481;
    TURTLE_HELMET = "turtle_helmet", 275;
    WOLF_ARMOR = "wolf_armor", 64;
    ELYTRA = "elytra", 432;

    // Tools and weapons
    WOODEN_AXE = "wooden_axe", 59;
    WOODEN_SHOVEL = "wooden_shovel", 59;
    WOODEN_PICKAXE = "wooden_pickaxe", 59;
    WOODEN_HOE = "wooden_hoe", 59;
    WOODEN_SWORD = "wooden_sword", 59;
    WOODEN_SPEAR = "wooden_spear", 59;
    STONE_AXE = "stone_axe", 131;
    STONE_SHOVEL = "stone_shovel", 131;
    STONE_PICKAXE = "stone_pickaxe", 131;
    STONE_HOE = "stone_hoe", 131;
    STONE_SWORD = "stone_sword", 131;
    STONE_SPEAR = "stone_spear", 131;
    COPPER_AXE = "copper_axe", 190;
    COPPER_SHOVEL = "copper_shovel", 190;
    COPPER_PICKAXE = "copper_pickaxe", 190;
    COPPER_HOE = "copper_hoe", 190;
    COPPER_SWORD = "copper_sword", 190;
    COPPER_SPEAR = "copper_spear", 190;
    IRON_AXE = "iron_axe", 250;
    IRON_SHOVEL = "iron_shovel", 250;
    IRON_PICKAXE = "iron_pickaxe", 250;
    IRON_HOE = "iron_hoe", 250;
    IRON_SWORD = "iron_sword", 250;
    IRON_SPEAR = "iron_spear", 250;
    GOLDEN_AXE = "golden_axe", 32;
    GOLDEN_SHOVEL = "golden_shovel", 32;
    GOLDEN_PICKAXE = "golden_pickaxe", 32;
    GOLDEN_HOE = "golden_hoe", 32;
    GOLDEN_SWORD = "golden_sword", 32;
    GOLDEN_SPEAR = "golden_spear", 32;
    DIAMOND_AXE = "diamond_axe", 1561;
    DIAMOND_SHOVEL = "diamond_shovel", 1561;
    DIAMOND_PICKAXE = "diamond_pickaxe", 1561;
    DIAMOND_HOE = "diamond_hoe", 1561;
    DIAMOND_SWORD = "diamond_sword", 1561;
    DIAMOND_SPEAR = "diamond_spear", 1561;
    NETHERITE_AXE = "netherite_axe", 2031;
    NETHERITE_SHOVEL = "netherite_shovel", 2031;
    NETHERITE_PICKAXE = "netherite_pickaxe", 2031;
    NETHERITE_HOE = "netherite_hoe", 2031;
    NETHERITE_SWORD = "netherite_sword", 2031;
    NETHERITE_SPEAR = "netherite_spear", 2031;
    BOW = "bow", 384;
    CROSSBOW = "crossbow", 465;
    FISHING_ROD = "fishing_rod", 64;
    TRIDENT = "trident", 250;
    MACE = "mace", 500;
    SHIELD = "shield", 336;
    SHEARS = "shears", 238;
    FLINT_AND_STEEL = "flint_and_steel", 64;

    // Books
    BOOK = "book", 0;
    ENCHANTED_BOOK = "enchanted_book", 0;

    // Repair materials
    LEATHER = "leather", 0;
    COPPER_INGOT = "copper_ingot", 0;
    IRON_INGOT = "iron_ingot", 0;
    GOLD_INGOT = "gold_ingot", 0;
    DIAMOND = "diamond", 0;
    NETHERITE_INGOT = "netherite_ingot", 0;
    TURTLE_SCUTE = "turtle_scute", 0;
    ARMADILLO_SCUTE = "armadillo_scute", 0;
    PHANTOM_MEMBRANE = "phantom_membrane", 0;
    BREEZE_ROD = "breeze_rod", 0;
    COBBLESTONE = "cobblestone", 0;
    COBBLED_DEEPSLATE = "cobbled_deepslate", 0;
    BLACKSTONE = "blackstone", 0;
    OAK_PLANKS = "oak_planks", 0;
    SPRUCE_PLANKS = "spruce_planks", 0;
    BIRCH_PLANKS = "birch_planks", 0;
    JUNGLE_PLANKS = "jungle_planks", 0;
    ACACIA_PLANKS = "acacia_planks", 0;
    DARK_OAK_PLANKS = "dark_oak_planks", 0;
    MANGROVE_PLANKS = "mangrove_planks", 0;
    CHERRY_PLANKS = "cherry_planks", 0;
    PALE_OAK_PLANKS = "pale_oak_planks", 0;
    BAMBOO_PLANKS = "bamboo_planks", 0;
    CRIMSON_PLANKS = "crimson_planks", 0;
    WARPED_PLANKS = "warped_planks", 0;

    // Misc
    DIRT = "dirt", 0;
    STICK = "stick", 0;
}

/// Looks up a vanilla item type by key.
#[must_use]
pub fn by_key(key: &crate::key::Key) -> Option<&'static ItemType> {
    ALL.iter().find(|item| item.key() == key)
}
