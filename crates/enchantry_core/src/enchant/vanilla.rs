//! Vanilla enchantment table.
//!
//! One row per enchantment: max level, supported and primary item tags,
//! rarity weight, anvil cost multiplier and quality window formulas. The
//! registry and the economics table are both built from these rows.

use crate::enchant::data::{PartialEconomics, QualityFormula};
use crate::item::tags::keys as tag_keys;
use crate::key::Key;

pub(crate) struct VanillaEnchantment {
    pub key: Key,
    pub max_level: i32,
    pub supported: Key,
    pub primary: Option<Key>,
    pub treasure: bool,
    pub weight: u32,
    pub anvil_cost: i32,
    pub min_quality: QualityFormula,
    pub max_quality: QualityFormula,
}

impl VanillaEnchantment {
    pub fn economics(&self) -> PartialEconomics {
        PartialEconomics::complete(
            self.weight,
            self.anvil_cost,
            self.min_quality.clone(),
            self.max_quality.clone(),
        )
    }
}

const fn per(base: i32, per_level: i32) -> QualityFormula {
    QualityFormula::per_level(base, per_level)
}

const fn flat(value: i32) -> QualityFormula {
    QualityFormula::flat(value)
}

macro_rules! vanilla_enchantments {
    ($(
        $name:ident = $path:literal, $max:literal, $supported:ident, $primary:ident,
        $treasure:literal, $weight:literal, $cost:literal, $min:expr, $max_q:expr;
    )*) => {
        /// Keys of the vanilla enchantments.
        pub mod keys {
            #![allow(missing_docs)]
            use crate::key::Key;

            $(pub const $name: Key = Key::minecraft($path);)*
        }

        pub(crate) static VANILLA: &[VanillaEnchantment] = &[$(
            VanillaEnchantment {
                key: keys::$name,
                max_level: $max,
                supported: tag_keys::$supported,
                primary: vanilla_enchantments!(@primary $primary),
                treasure: $treasure,
                weight: $weight,
                anvil_cost: $cost,
                min_quality: $min,
                max_quality: $max_q,
            }
        ),*];
    };
    (@primary SAME) => { None };
    (@primary $tag:ident) => { Some(tag_keys::$tag) };
}

vanilla_enchantments! {
    // Armor
    PROTECTION = "protection", 4, ARMOR, SAME, false, 10, 1, per(1, 11), per(12, 11);
    FIRE_PROTECTION = "fire_protection", 4, ARMOR, SAME, false, 5, 2, per(10, 8), per(18, 8);
    FEATHER_FALLING = "feather_falling", 4, FOOT_ARMOR, SAME, false, 5, 2, per(5, 6), per(11, 6);
    BLAST_PROTECTION = "blast_protection", 4, ARMOR, SAME, false, 2, 4, per(1, 11), per(12, 11);
    PROJECTILE_PROTECTION = "projectile_protection", 4, ARMOR, SAME, false, 5, 2, per(3, 6), per(9, 6);
    RESPIRATION = "respiration", 3, HEAD_ARMOR, SAME, false, 2, 4, per(10, 10), per(40, 10);
    AQUA_AFFINITY = "aqua_affinity", 1, HEAD_ARMOR, SAME, false, 2, 4, flat(1), flat(41);
    THORNS = "thorns", 3, CHEST_ARMOR, SAME, false, 1, 8, per(10, 20), per(60, 20);
    DEPTH_STRIDER = "depth_strider", 3, FOOT_ARMOR, SAME, false, 2, 4, per(10, 10), per(25, 10);
    FROST_WALKER = "frost_walker", 2, FOOT_ARMOR, SAME, true, 2, 4, per(10, 10), per(25, 10);
    BINDING_CURSE = "binding_curse", 1, EQUIPPABLE, SAME, true, 1, 8, flat(25), flat(50);
    SOUL_SPEED = "soul_speed", 3, FOOT_ARMOR, SAME, true, 1, 8, per(10, 10), per(25, 10);
    SWIFT_SNEAK = "swift_sneak", 3, LEG_ARMOR, SAME, true, 1, 8, per(25, 25), per(75, 25);
    // Melee weapons
    SHARPNESS = "sharpness", 5, SHARP_WEAPON, SWORD, false, 10, 1, per(1, 11), per(21, 11);
    SMITE = "smite", 5, WEAPON, SWORD, false, 5, 2, per(5, 8), per(25, 8);
    BANE_OF_ARTHROPODS = "bane_of_arthropods", 5, WEAPON, SWORD, false, 5, 2, per(5, 8), per(25, 8);
    KNOCKBACK = "knockback", 2, SWORD, SAME, false, 5, 2, per(5, 20), per(55, 20);
    FIRE_ASPECT = "fire_aspect", 2, FIRE_ASPECT, SAME, false, 2, 4, per(10, 20), per(60, 20);
    LOOTING = "looting", 3, SWORD, SAME, false, 2, 4, per(15, 9), per(65, 9);
    SWEEPING_EDGE = "sweeping_edge", 3, SWORD, SAME, false, 2, 4, per(5, 9), per(20, 9);
    // Tools
    EFFICIENCY = "efficiency", 5, MINING, SAME, false, 10, 1, per(1, 10), per(51, 10);
    SILK_TOUCH = "silk_touch", 1, MINING_LOOT, SAME, false, 1, 8, flat(15), flat(65);
    UNBREAKING = "unbreaking", 3, DURABILITY, SAME, false, 5, 2, per(5, 8), per(55, 8);
    FORTUNE = "fortune", 3, MINING_LOOT, SAME, false, 2, 4, per(15, 9), per(65, 9);
    // Bow
    POWER = "power", 5, BOW, SAME, false, 10, 1, per(1, 10), per(16, 10);
    PUNCH = "punch", 2, BOW, SAME, false, 2, 4, per(12, 20), per(37, 20);
    FLAME = "flame", 1, BOW, SAME, false, 2, 4, flat(20), flat(50);
    INFINITY = "infinity", 1, BOW, SAME, false, 1, 8, flat(20), flat(50);
    // Fishing rod
    LUCK_OF_THE_SEA = "luck_of_the_sea", 3, FISHING, SAME, false, 2, 4, per(15, 9), per(65, 9);
    LURE = "lure", 3, FISHING, SAME, false, 2, 4, per(15, 9), per(65, 9);
    // Trident
    LOYALTY = "loyalty", 3, TRIDENT, SAME, false, 5, 2, per(12, 7), flat(50);
    IMPALING = "impaling", 5, TRIDENT, SAME, false, 2, 4, per(1, 8), per(21, 8);
    RIPTIDE = "riptide", 3, TRIDENT, SAME, false, 2, 4, per(17, 7), flat(50);
    CHANNELING = "channeling", 1, TRIDENT, SAME, false, 1, 8, flat(25), flat(50);
    // Crossbow
    MULTISHOT = "multishot", 1, CROSSBOW, SAME, false, 2, 4, flat(20), flat(50);
    QUICK_CHARGE = "quick_charge", 3, CROSSBOW, SAME, false, 5, 2, per(12, 20), flat(50);
    PIERCING = "piercing", 4, CROSSBOW, SAME, false, 10, 1, per(1, 10), flat(50);
    // Mace
    DENSITY = "density", 5, MACE, SAME, false, 5, 2, per(5, 8), per(25, 8);
    BREACH = "breach", 4, MACE, SAME, false, 2, 4, per(15, 9), per(65, 9);
    WIND_BURST = "wind_burst", 3, MACE, SAME, true, 2, 4, per(15, 9), per(65, 9);
    // General
    MENDING = "mending", 1, DURABILITY, SAME, true, 2, 4, per(25, 25), per(75, 25);
    VANISHING_CURSE = "vanishing_curse", 1, VANISHING, SAME, true, 1, 8, flat(25), flat(50);
}

/// Groups of mutually exclusive vanilla enchantments.
pub(crate) fn exclusive_groups() -> Vec<Vec<Key>> {
    vec![
        vec![
            keys::PROTECTION,
            keys::FIRE_PROTECTION,
            keys::BLAST_PROTECTION,
            keys::PROJECTILE_PROTECTION,
        ],
        vec![keys::FROST_WALKER, keys::DEPTH_STRIDER],
        vec![keys::INFINITY, keys::MENDING],
        vec![keys::MULTISHOT, keys::PIERCING],
        vec![
            keys::SHARPNESS,
            keys::SMITE,
            keys::BANE_OF_ARTHROPODS,
            keys::IMPALING,
            keys::DENSITY,
            keys::BREACH,
        ],
        vec![keys::SILK_TOUCH, keys::FORTUNE],
        // Loyalty and channeling are compatible with each other.
        vec![keys::RIPTIDE, keys::LOYALTY],
        vec![keys::RIPTIDE, keys::CHANNELING],
    ]
}
