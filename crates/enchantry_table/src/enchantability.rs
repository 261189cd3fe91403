//! # Enchantability
//!
//! How readily a material takes enchantments. Higher values widen the
//! spread of rolled quality.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use enchantry_core::config::EnchantryConfig;
use enchantry_core::item::{types, ItemType};
use enchantry_core::key::Key;

const ARMOR_PIECES: [&str; 4] = ["_helmet", "_chestplate", "_leggings", "_boots"];
const TOOLS: [&str; 6] = ["_axe", "_shovel", "_pickaxe", "_hoe", "_sword", "_spear"];

static VANILLA: OnceLock<HashMap<Key, Enchantability>> = OnceLock::new();

/// A positive enchantability value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Enchantability(u32);

impl Enchantability {
    /// Wolf armor.
    pub const ARMADILLO: Self = Self(10);
    /// Leather armor.
    pub const LEATHER: Self = Self(15);
    /// Chainmail armor.
    pub const CHAIN: Self = Self(12);
    /// Copper armor.
    pub const COPPER_ARMOR: Self = Self(8);
    /// Iron armor.
    pub const IRON_ARMOR: Self = Self(9);
    /// Golden armor.
    pub const GOLD_ARMOR: Self = Self(25);
    /// Diamond armor.
    pub const DIAMOND_ARMOR: Self = Self(10);
    /// Netherite armor.
    pub const NETHERITE_ARMOR: Self = Self(15);
    /// Turtle shell.
    pub const TURTLE: Self = Self(9);
    /// Wooden tools.
    pub const WOOD: Self = Self(15);
    /// Stone tools.
    pub const STONE: Self = Self(5);
    /// Copper tools.
    pub const COPPER_TOOL: Self = Self(13);
    /// Iron tools.
    pub const IRON_TOOL: Self = Self(14);
    /// Golden tools.
    pub const GOLD_TOOL: Self = Self(22);
    /// Diamond tools.
    pub const DIAMOND_TOOL: Self = Self(10);
    /// Netherite tools.
    pub const NETHERITE_TOOL: Self = Self(15);
    /// Books, bows, crossbows and fishing rods.
    pub const BOOK: Self = Self(1);
    /// Tridents.
    pub const TRIDENT: Self = Self(1);
    /// Maces.
    pub const MACE: Self = Self(15);

    /// Creates an enchantability. `None` for zero.
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    /// The raw value, at least 1.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Vanilla enchantability of an item type, if it can be enchanted at a
    /// table.
    #[must_use]
    pub fn for_item(item: &ItemType) -> Option<Self> {
        VANILLA.get_or_init(build_vanilla).get(item.key()).copied()
    }
}

/// Vanilla enchantability with per-item overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnchantabilityTable {
    overrides: BTreeMap<Key, Enchantability>,
}

impl EnchantabilityTable {
    /// Vanilla values only.
    #[must_use]
    pub fn vanilla() -> Self {
        Self::default()
    }

    /// Vanilla values plus the `[enchantability]` overrides of a config.
    /// Zero entries are skipped; validated configs contain none.
    #[must_use]
    pub fn from_config(config: &EnchantryConfig) -> Self {
        let overrides = config
            .enchantability
            .iter()
            .filter_map(|(key, value)| Enchantability::new(*value).map(|e| (key.clone(), e)))
            .collect();
        Self { overrides }
    }

    /// Overrides one item type.
    #[must_use]
    pub fn with(mut self, item: &ItemType, enchantability: Enchantability) -> Self {
        self.overrides.insert(item.key().clone(), enchantability);
        self
    }

    /// Enchantability of an item type: override first, then vanilla.
    #[must_use]
    pub fn get(&self, item: &ItemType) -> Option<Enchantability> {
        self.overrides
            .get(item.key())
            .copied()
            .or_else(|| Enchantability::for_item(item))
    }
}

fn add_family(
    table: &mut HashMap<Key, Enchantability>,
    family: &str,
    pieces: &[&str],
    value: Enchantability,
) {
    for piece in pieces {
        if let Ok(key) = Key::new("minecraft", format!("{family}{piece}")) {
            table.insert(key, value);
        }
    }
}

fn build_vanilla() -> HashMap<Key, Enchantability> {
    let mut table = HashMap::new();

    add_family(&mut table, "leather", &ARMOR_PIECES, Enchantability::LEATHER);
    add_family(&mut table, "copper", &ARMOR_PIECES, Enchantability::COPPER_ARMOR);
    add_family(&mut table, "chainmail", &ARMOR_PIECES, Enchantability::CHAIN);
    add_family(&mut table, "iron", &ARMOR_PIECES, Enchantability::IRON_ARMOR);
    add_family(&mut table, "golden", &ARMOR_PIECES, Enchantability::GOLD_ARMOR);
    add_family(&mut table, "diamond", &ARMOR_PIECES, Enchantability::DIAMOND_ARMOR);
    add_family(&mut table, "netherite", &ARMOR_PIECES, Enchantability::NETHERITE_ARMOR);
    table.insert(types::TURTLE_HELMET.key().clone(), Enchantability::TURTLE);
    table.insert(types::WOLF_ARMOR.key().clone(), Enchantability::ARMADILLO);

    add_family(&mut table, "wooden", &TOOLS, Enchantability::WOOD);
    add_family(&mut table, "stone", &TOOLS, Enchantability::STONE);
    add_family(&mut table, "copper", &TOOLS, Enchantability::COPPER_TOOL);
    add_family(&mut table, "iron", &TOOLS, Enchantability::IRON_TOOL);
    add_family(&mut table, "golden", &TOOLS, Enchantability::GOLD_TOOL);
    add_family(&mut table, "diamond", &TOOLS, Enchantability::DIAMOND_TOOL);
    add_family(&mut table, "netherite", &TOOLS, Enchantability::NETHERITE_TOOL);

    for item in [
        &types::BOOK,
        &types::BOW,
        &types::CROSSBOW,
        &types::ENCHANTED_BOOK,
        &types::FISHING_ROD,
    ] {
        table.insert(item.key().clone(), Enchantability::BOOK);
    }
    table.insert(types::TRIDENT.key().clone(), Enchantability::TRIDENT);
    table.insert(types::MACE.key().clone(), Enchantability::MACE);

    table
}
