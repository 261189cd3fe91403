//! # Item Tags
//!
//! Named sets of item types. Enchantments use tags to describe what they
//! can be applied to, and the repair catalog uses them to group materials.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use crate::item::{types, ItemType};
use crate::key::Key;

/// A named set of item type keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemTag {
    key: Key,
    items: BTreeSet<Key>,
}

impl ItemTag {
    /// Creates a tag from item type keys.
    #[must_use]
    pub fn new(key: Key, items: impl IntoIterator<Item = Key>) -> Self {
        Self {
            key,
            items: items.into_iter().collect(),
        }
    }

    /// Creates a tag from item types.
    #[must_use]
    pub fn of_types<'a>(key: Key, items: impl IntoIterator<Item = &'a ItemType>) -> Self {
        Self::new(key, items.into_iter().map(|item| item.key().clone()))
    }

    /// A tag containing nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Key::minecraft("empty"), std::iter::empty())
    }

    /// The tag's key.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Whether the tag contains the item type with this key.
    #[must_use]
    pub fn contains(&self, item: &Key) -> bool {
        self.items.contains(item)
    }

    /// Whether the tag contains this item type.
    #[must_use]
    pub fn is_tagged(&self, item: &ItemType) -> bool {
        self.contains(item.key())
    }

    /// Iterates the tagged item keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.items.iter()
    }

    /// Number of tagged item types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the tag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Keys of the vanilla enchantable tags.
pub mod keys {
    #![allow(missing_docs)]
    use crate::key::Key;

    pub const HEAD_ARMOR: Key = Key::minecraft("enchantable/head_armor");
    pub const CHEST_ARMOR: Key = Key::minecraft("enchantable/chest_armor");
    pub const LEG_ARMOR: Key = Key::minecraft("enchantable/leg_armor");
    pub const FOOT_ARMOR: Key = Key::minecraft("enchantable/foot_armor");
    pub const ARMOR: Key = Key::minecraft("enchantable/armor");
    pub const EQUIPPABLE: Key = Key::minecraft("enchantable/equippable");
    pub const SWORD: Key = Key::minecraft("enchantable/sword");
    pub const SHARP_WEAPON: Key = Key::minecraft("enchantable/sharp_weapon");
    pub const WEAPON: Key = Key::minecraft("enchantable/weapon");
    pub const FIRE_ASPECT: Key = Key::minecraft("enchantable/fire_aspect");
    pub const MINING: Key = Key::minecraft("enchantable/mining");
    pub const MINING_LOOT: Key = Key::minecraft("enchantable/mining_loot");
    pub const DURABILITY: Key = Key::minecraft("enchantable/durability");
    pub const BOW: Key = Key::minecraft("enchantable/bow");
    pub const CROSSBOW: Key = Key::minecraft("enchantable/crossbow");
    pub const TRIDENT: Key = Key::minecraft("enchantable/trident");
    pub const FISHING: Key = Key::minecraft("enchantable/fishing");
    pub const MACE: Key = Key::minecraft("enchantable/mace");
    pub const VANISHING: Key = Key::minecraft("enchantable/vanishing");
}

static VANILLA: OnceLock<BTreeMap<Key, ItemTag>> = OnceLock::new();

/// Looks up a vanilla tag by key.
#[must_use]
pub fn vanilla(key: &Key) -> Option<&'static ItemTag> {
    VANILLA.get_or_init(build_vanilla).get(key)
}

/// Looks up a vanilla tag, falling back to the empty tag.
#[must_use]
pub fn vanilla_or_empty(key: &Key) -> ItemTag {
    vanilla(key).cloned().unwrap_or_else(ItemTag::empty)
}

fn suffixed(suffixes: &[&str]) -> Vec<Key> {
    types::ALL
        .iter()
        .filter(|item| suffixes.iter().any(|suffix| item.key().path().ends_with(suffix)))
        .map(|item| item.key().clone())
        .collect()
}

fn with(mut keys: Vec<Key>, extra: &ItemType) -> Vec<Key> {
    keys.push(extra.key().clone());
    keys
}

fn build_vanilla() -> BTreeMap<Key, ItemTag> {
    let head = suffixed(&["_helmet"]);
    let chest = suffixed(&["_chestplate"]);
    let legs = suffixed(&["_leggings"]);
    let feet = suffixed(&["_boots"]);
    let armor = suffixed(&["_helmet", "_chestplate", "_leggings", "_boots"]);
    let swords = suffixed(&["_sword"]);
    let sharp = suffixed(&["_sword", "_axe", "_spear"]);
    let mining_loot = suffixed(&["_pickaxe", "_shovel", "_axe", "_hoe"]);
    let durability: Vec<Key> = types::ALL
        .iter()
        .filter(|item| item.max_durability() > 0)
        .map(|item| item.key().clone())
        .collect();

    [
        ItemTag::new(keys::HEAD_ARMOR, head),
        ItemTag::new(keys::CHEST_ARMOR, chest),
        ItemTag::new(keys::LEG_ARMOR, legs),
        ItemTag::new(keys::FOOT_ARMOR, feet),
        ItemTag::new(keys::EQUIPPABLE, with(armor.clone(), &types::ELYTRA)),
        ItemTag::new(keys::ARMOR, armor),
        ItemTag::new(keys::FIRE_ASPECT, with(swords.clone(), &types::MACE)),
        ItemTag::new(keys::SWORD, swords),
        ItemTag::new(keys::WEAPON, with(sharp.clone(), &types::MACE)),
        ItemTag::new(keys::SHARP_WEAPON, sharp),
        ItemTag::new(keys::MINING, with(mining_loot.clone(), &types::SHEARS)),
        ItemTag::new(keys::MINING_LOOT, mining_loot),
        ItemTag::new(keys::VANISHING, durability.clone()),
        ItemTag::new(keys::DURABILITY, durability),
        ItemTag::of_types(keys::BOW, [&types::BOW]),
        ItemTag::of_types(keys::CROSSBOW, [&types::CROSSBOW]),
        ItemTag::of_types(keys::TRIDENT, [&types::TRIDENT]),
        ItemTag::of_types(keys::FISHING, [&types::FISHING_ROD]),
        ItemTag::of_types(keys::MACE, [&types::MACE]),
    ]
    .into_iter()
    .map(|tag| (tag.key().clone(), tag))
    .collect()
}
