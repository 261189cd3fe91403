//! Item metadata.

use std::collections::BTreeMap;

use crate::item::{types, ItemType};
use crate::key::Key;

/// Mutable attributes attached to an item.
///
/// Equality is structural over every field and is what the forge uses to
/// detect no-op combinations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemMeta {
    display_name: Option<String>,
    /// `None` if the metadata has no repair-count field.
    repair_cost: Option<i32>,
    /// `None` if the metadata is not damageable.
    damage: Option<i32>,
    enchants: BTreeMap<Key, i32>,
    /// Enchantments are stored for transfer rather than applied.
    storage: bool,
}

impl ItemMeta {
    /// Metadata for a regular item: repairable, damageable if requested.
    #[must_use]
    pub fn standard(damageable: bool) -> Self {
        Self {
            repair_cost: Some(0),
            damage: damageable.then_some(0),
            ..Self::default()
        }
    }

    /// Metadata for a book-like enchantment carrier.
    #[must_use]
    pub fn enchantment_storage() -> Self {
        Self {
            repair_cost: Some(0),
            storage: true,
            ..Self::default()
        }
    }

    /// Metadata with neither a repair-count field nor damage.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    /// Default metadata for an item type; `None` for air.
    #[must_use]
    pub fn for_type(item_type: &ItemType) -> Option<Self> {
        if item_type.is_air() {
            None
        } else if item_type.key() == types::ENCHANTED_BOOK.key() {
            Some(Self::enchantment_storage())
        } else {
            Some(Self::standard(item_type.max_durability() > 0))
        }
    }

    /// The custom display name, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Sets or clears the display name. An empty name clears it.
    pub fn set_display_name(&mut self, name: Option<&str>) {
        self.display_name = canonical_name(name).map(str::to_owned);
    }

    /// The repair-count (prior work) field, if this metadata has one.
    #[must_use]
    pub fn repair_cost(&self) -> Option<i32> {
        self.repair_cost
    }

    /// Whether this metadata carries a repair-count field.
    #[must_use]
    pub fn is_repairable(&self) -> bool {
        self.repair_cost.is_some()
    }

    /// Sets the repair-count field. No effect if the field is unsupported.
    pub fn set_repair_cost(&mut self, cost: i32) {
        if let Some(current) = self.repair_cost.as_mut() {
            *current = cost;
        }
    }

    /// Current damage, if this metadata is damageable.
    #[must_use]
    pub fn damage(&self) -> Option<i32> {
        self.damage
    }

    /// Whether this metadata tracks damage.
    #[must_use]
    pub fn is_damageable(&self) -> bool {
        self.damage.is_some()
    }

    /// Sets damage. No effect if the metadata is not damageable.
    pub fn set_damage(&mut self, damage: i32) {
        if let Some(current) = self.damage.as_mut() {
            *current = damage;
        }
    }

    /// Whether enchantments are stored for transfer (book-like carrier).
    #[must_use]
    pub fn is_enchantment_storage(&self) -> bool {
        self.storage
    }

    /// Enchantments on the item: stored ones for carriers, applied otherwise.
    #[must_use]
    pub fn enchants(&self) -> &BTreeMap<Key, i32> {
        &self.enchants
    }

    /// Adds an enchantment, ignoring level and applicability restrictions.
    pub fn add_enchant(&mut self, enchantment: Key, level: i32) {
        self.enchants.insert(enchantment, level);
    }

    /// Adds every enchantment in the map. Existing entries not named are kept.
    pub fn add_enchants<'a>(&mut self, enchants: impl IntoIterator<Item = (&'a Key, &'a i32)>) {
        for (key, level) in enchants {
            self.enchants.insert(key.clone(), *level);
        }
    }

    /// Removes an enchantment, returning its level.
    pub fn remove_enchant(&mut self, enchantment: &Key) -> Option<i32> {
        self.enchants.remove(enchantment)
    }

    /// Sets the display name and returns the metadata.
    #[must_use]
    pub fn with_display_name(mut self, name: &str) -> Self {
        self.set_display_name(Some(name));
        self
    }

    /// Sets the repair-count field and returns the metadata.
    #[must_use]
    pub fn with_repair_cost(mut self, cost: i32) -> Self {
        self.set_repair_cost(cost);
        self
    }

    /// Sets damage and returns the metadata.
    #[must_use]
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.set_damage(damage);
        self
    }

    /// Adds an enchantment and returns the metadata.
    #[must_use]
    pub fn with_enchant(mut self, enchantment: Key, level: i32) -> Self {
        self.add_enchant(enchantment, level);
        self
    }
}

/// Canonical display text: empty and absent names are both "unnamed".
#[must_use]
pub fn canonical_name(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

/// Reads the repair-count field, treating unsupported metadata as 0.
#[must_use]
pub fn repair_cost_of(meta: Option<&ItemMeta>) -> i32 {
    meta.and_then(ItemMeta::repair_cost).unwrap_or(0)
}
