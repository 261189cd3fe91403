//! # Enchantment Registry
//!
//! Keyed catalog of enchantment definitions. The vanilla registry is built
//! once per process and is read-only afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use crate::enchant::definition::Enchantment;
use crate::enchant::vanilla::{self, VANILLA};
use crate::error::{CoreError, CoreResult};
use crate::item::{tags, types, ItemType};
use crate::key::Key;

/// A catalog of enchantments, iterated in key order.
#[derive(Clone, Debug, Default)]
pub struct EnchantmentRegistry {
    enchantments: BTreeMap<Key, Enchantment>,
}

static VANILLA_REGISTRY: OnceLock<EnchantmentRegistry> = OnceLock::new();

impl EnchantmentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide vanilla registry.
    #[must_use]
    pub fn vanilla() -> &'static Self {
        VANILLA_REGISTRY.get_or_init(build_vanilla)
    }

    /// Registers an enchantment.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateEnchantment`] if the key is taken, or
    /// [`CoreError::InvalidEnchantment`] if the level range is empty or
    /// starts below 1.
    pub fn register(&mut self, enchantment: Enchantment) -> CoreResult<()> {
        if enchantment.start_level() < 1 || enchantment.max_level() < enchantment.start_level() {
            return Err(CoreError::InvalidEnchantment {
                key: enchantment.key().to_string(),
                reason: format!(
                    "level range {}..={} is invalid",
                    enchantment.start_level(),
                    enchantment.max_level()
                ),
            });
        }
        if self.enchantments.contains_key(enchantment.key()) {
            return Err(CoreError::DuplicateEnchantment(enchantment.key().to_string()));
        }
        self.enchantments.insert(enchantment.key().clone(), enchantment);
        Ok(())
    }

    /// Looks up an enchantment.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Enchantment> {
        self.enchantments.get(key)
    }

    /// Whether the key is registered.
    #[must_use]
    pub fn contains(&self, key: &Key) -> bool {
        self.enchantments.contains_key(key)
    }

    /// Iterates enchantments in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Enchantment> {
        self.enchantments.values()
    }

    /// Number of registered enchantments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enchantments.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enchantments.is_empty()
    }

    /// Enchantments an enchanting table may roll for an item type.
    ///
    /// Books receive every non-treasure enchantment; other items receive the
    /// non-treasure enchantments whose primary items include them.
    #[must_use]
    pub fn table_enchantments_for(&self, item_type: &ItemType) -> Vec<Enchantment> {
        let is_book = item_type.key() == types::BOOK.key()
            || item_type.key() == types::ENCHANTED_BOOK.key();
        self.iter()
            .filter(|enchantment| {
                if is_book {
                    !enchantment.is_treasure()
                } else {
                    enchantment.is_primary_for(item_type)
                }
            })
            .cloned()
            .collect()
    }
}

fn build_vanilla() -> EnchantmentRegistry {
    let groups = vanilla::exclusive_groups();
    let mut enchantments = BTreeMap::new();

    for row in VANILLA {
        let exclusive: BTreeSet<Key> = groups
            .iter()
            .filter(|group| group.contains(&row.key))
            .flatten()
            .cloned()
            .collect();

        let mut enchantment = Enchantment::new(
            row.key.clone(),
            row.max_level,
            tags::vanilla_or_empty(&row.supported),
        )
        .with_exclusive(exclusive);
        if let Some(primary) = &row.primary {
            enchantment = enchantment.with_primary_items(tags::vanilla_or_empty(primary));
        }
        if row.treasure {
            enchantment = enchantment.treasure();
        }
        enchantments.insert(row.key.clone(), enchantment);
    }

    EnchantmentRegistry { enchantments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enchant::keys;

    #[test]
    fn test_vanilla_is_complete() {
        let registry = EnchantmentRegistry::vanilla();
        assert_eq!(registry.len(), VANILLA.len());
        assert_eq!(registry.get(&keys::SHARPNESS).unwrap().max_level(), 5);
        assert_eq!(registry.get(&keys::MENDING).unwrap().max_level(), 1);
    }

    #[test]
    fn test_vanilla_exclusivity() {
        let registry = EnchantmentRegistry::vanilla();
        let get = |key: &Key| registry.get(key).unwrap();

        assert!(get(&keys::SHARPNESS).conflicts_with(get(&keys::SMITE)));
        assert!(get(&keys::RIPTIDE).conflicts_with(get(&keys::LOYALTY)));
        assert!(!get(&keys::LOYALTY).conflicts_with(get(&keys::CHANNELING)));
        assert!(get(&keys::INFINITY).conflicts_with(get(&keys::MENDING)));
        assert!(!get(&keys::UNBREAKING).conflicts_with(get(&keys::MENDING)));
    }

    #[test]
    fn test_register_rejects_duplicates_and_bad_levels() {
        let mut registry = EnchantmentRegistry::new();
        let custom = Key::new("planar", "soulbound").unwrap();
        registry
            .register(Enchantment::new(custom.clone(), 1, crate::item::ItemTag::empty()))
            .unwrap();
        assert_eq!(
            registry.register(Enchantment::new(custom.clone(), 1, crate::item::ItemTag::empty())),
            Err(CoreError::DuplicateEnchantment("planar:soulbound".into()))
        );
        let broken = Enchantment::new(Key::new("planar", "broken").unwrap(), 0, crate::item::ItemTag::empty());
        assert!(matches!(
            registry.register(broken),
            Err(CoreError::InvalidEnchantment { .. })
        ));
    }

    #[test]
    fn test_table_enchantments() {
        let registry = EnchantmentRegistry::vanilla();

        let book = registry.table_enchantments_for(&types::BOOK);
        assert!(book.iter().all(|e| !e.is_treasure()));
        assert!(book.iter().any(|e| e.key() == &keys::SHARPNESS));

        let axe = registry.table_enchantments_for(&types::IRON_AXE);
        assert!(axe.iter().any(|e| e.key() == &keys::EFFICIENCY));
        // Sharpness is primary only for swords.
        assert!(!axe.iter().any(|e| e.key() == &keys::SHARPNESS));
        assert!(!axe.iter().any(|e| e.key() == &keys::MENDING));
    }
}
