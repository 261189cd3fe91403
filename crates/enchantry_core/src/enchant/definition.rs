//! Enchantment definitions.

use std::collections::BTreeSet;

use crate::item::{types, ItemStack, ItemTag, ItemType};
use crate::key::Key;

/// Static description of an enchantment: levels, applicable items and
/// exclusivity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enchantment {
    key: Key,
    start_level: i32,
    max_level: i32,
    supported_items: ItemTag,
    primary_items: Option<ItemTag>,
    exclusive_set: BTreeSet<Key>,
    treasure: bool,
}

impl Enchantment {
    /// Creates an enchantment starting at level 1.
    #[must_use]
    pub fn new(key: Key, max_level: i32, supported_items: ItemTag) -> Self {
        Self {
            key,
            start_level: 1,
            max_level,
            supported_items,
            primary_items: None,
            exclusive_set: BTreeSet::new(),
            treasure: false,
        }
    }

    /// Sets the lowest level and returns the enchantment.
    #[must_use]
    pub fn with_start_level(mut self, start_level: i32) -> Self {
        self.start_level = start_level;
        self
    }

    /// Restricts the items offered this enchantment at a table.
    #[must_use]
    pub fn with_primary_items(mut self, primary_items: ItemTag) -> Self {
        self.primary_items = Some(primary_items);
        self
    }

    /// Adds enchantments that cannot coexist with this one.
    #[must_use]
    pub fn with_exclusive(mut self, others: impl IntoIterator<Item = Key>) -> Self {
        self.exclusive_set.extend(others);
        self.exclusive_set.remove(&self.key);
        self
    }

    /// Marks the enchantment as treasure-only.
    #[must_use]
    pub fn treasure(mut self) -> Self {
        self.treasure = true;
        self
    }

    /// Identifying key.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Lowest obtainable level.
    #[inline]
    #[must_use]
    pub const fn start_level(&self) -> i32 {
        self.start_level
    }

    /// Highest naturally obtainable level.
    #[inline]
    #[must_use]
    pub const fn max_level(&self) -> i32 {
        self.max_level
    }

    /// Items the enchantment can be applied to.
    #[must_use]
    pub fn supported_items(&self) -> &ItemTag {
        &self.supported_items
    }

    /// Items offered this enchantment at a table. Defaults to the supported
    /// items.
    #[must_use]
    pub fn primary_items(&self) -> &ItemTag {
        self.primary_items.as_ref().unwrap_or(&self.supported_items)
    }

    /// Enchantments this one excludes.
    #[must_use]
    pub fn exclusive_set(&self) -> &BTreeSet<Key> {
        &self.exclusive_set
    }

    /// Whether the enchantment is treasure-only (never rolled at a table).
    #[inline]
    #[must_use]
    pub const fn is_treasure(&self) -> bool {
        self.treasure
    }

    /// Whether the enchantment can be applied to the item. Enchanted books
    /// accept every enchantment.
    #[must_use]
    pub fn can_enchant_item(&self, item: &ItemStack) -> bool {
        let item_type = item.item_type();
        item_type.key() == types::ENCHANTED_BOOK.key() || self.supported_items.is_tagged(item_type)
    }

    /// Whether the enchantment is offered at a table for this item type.
    #[must_use]
    pub fn is_primary_for(&self, item_type: &ItemType) -> bool {
        !self.treasure && self.primary_items().is_tagged(item_type)
    }

    /// Whether two enchantments cannot coexist. An enchantment always
    /// conflicts with itself.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.key == other.key
            || self.exclusive_set.contains(&other.key)
            || other.exclusive_set.contains(&self.key)
    }
}
