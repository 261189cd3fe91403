//! # Enchanting Table
//!
//! Rolls random enchantments the way a vanilla enchanting table does.
//!
//! ## Roll
//!
//! 1. Quality: requested level plus a triangular spread scaled by
//!    enchantability, then a jitter of up to 15% either way
//! 2. Each enchantment offers its highest level whose quality window
//!    contains the rolled quality
//! 3. One weighted pick is free; each further pick must beat a `1 in 50`
//!    gate against the current quality, which halves after every pick
//! 4. A pick removes every candidate incompatible with it

use std::fmt;
use std::sync::Arc;

use enchantry_core::enchant::{EconomicsTable, EnchantData, Enchantment, EnchantmentRegistry};
use enchantry_core::item::ItemType;
use enchantry_core::key::Key;
use enchantry_core::random::RandomSource;
use tracing::trace;

use crate::enchantability::{Enchantability, EnchantabilityTable};
use crate::offer::EnchantmentOffer;
use crate::weighted::{self, Weighted};

/// Bookshelves beyond this count have no effect.
pub const MAX_BOOKSHELVES: i32 = 15;

/// Number of buttons on a table.
pub const BUTTONS: usize = 3;

type Incompatibility = dyn Fn(&Enchantment, &Enchantment) -> bool + Send + Sync;
type MaxLevel = dyn Fn(&Enchantment) -> i32 + Send + Sync;

/// Enchantments with their levels, in selection order.
pub type Selection = Vec<(Key, i32)>;

/// The data needed to roll enchantments for one kind of item.
#[derive(Clone)]
pub struct EnchantingTable {
    enchantments: Vec<Enchantment>,
    enchantability: Enchantability,
    incompatibility: Arc<Incompatibility>,
    max_level: Arc<MaxLevel>,
    economics: Arc<EconomicsTable>,
}

struct Candidate<'a> {
    enchantment: &'a Enchantment,
    data: Arc<EnchantData>,
    level: i32,
}

impl Weighted for Candidate<'_> {
    fn weight(&self) -> u32 {
        self.data.weight()
    }
}

impl EnchantingTable {
    /// A table rolling from the given enchantments.
    #[must_use]
    pub fn new(enchantments: Vec<Enchantment>, enchantability: Enchantability) -> Self {
        Self {
            enchantments,
            enchantability,
            incompatibility: Arc::new(Enchantment::conflicts_with),
            max_level: Arc::new(Enchantment::max_level),
            economics: Arc::clone(EconomicsTable::global()),
        }
    }

    /// The vanilla table for an item type, or `None` if the type cannot be
    /// enchanted.
    #[must_use]
    pub fn for_item(item: &ItemType) -> Option<Self> {
        Self::for_item_in(EnchantmentRegistry::vanilla(), &EnchantabilityTable::vanilla(), item)
    }

    /// A table for an item type from a custom registry and enchantability
    /// source.
    #[must_use]
    pub fn for_item_in(
        registry: &EnchantmentRegistry,
        enchantability: &EnchantabilityTable,
        item: &ItemType,
    ) -> Option<Self> {
        let enchantability = enchantability.get(item)?;
        Some(Self::new(registry.table_enchantments_for(item), enchantability))
    }

    /// Replaces the incompatibility test. An enchantment is always
    /// incompatible with itself regardless of the test.
    #[must_use]
    pub fn with_incompatibility(
        mut self,
        incompatibility: impl Fn(&Enchantment, &Enchantment) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.incompatibility = Arc::new(move |first: &Enchantment, second: &Enchantment| {
            first.key() == second.key() || incompatibility(first, second)
        });
        self
    }

    /// Replaces the maximum level lookup.
    ///
    /// Raising levels is not always useful: enchantments with flat quality
    /// windows always roll their highest level once it is reachable.
    #[must_use]
    pub fn with_max_level(
        mut self,
        max_level: impl Fn(&Enchantment) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.max_level = Arc::new(max_level);
        self
    }

    /// Uses a different economics table than the global one.
    #[must_use]
    pub fn with_economics(mut self, economics: Arc<EconomicsTable>) -> Self {
        self.economics = economics;
        self
    }

    /// The enchantments this table can roll.
    #[inline]
    #[must_use]
    pub fn enchantments(&self) -> &[Enchantment] {
        &self.enchantments
    }

    /// The item's enchantability.
    #[inline]
    #[must_use]
    pub const fn enchantability(&self) -> Enchantability {
        self.enchantability
    }

    /// Rolls enchantments for a level cost.
    ///
    /// Empty if the table has no enchantments or `level < 1`. The result
    /// never holds two incompatible enchantments.
    pub fn apply<R: RandomSource + ?Sized>(&self, random: &mut R, level: i32) -> Selection {
        if self.enchantments.is_empty() || level < 1 {
            return Selection::new();
        }

        let mut quality = self.quality(random, level);
        let mut available = self.available(quality);
        let mut selected = Selection::new();

        // The first pick does not cost quality.
        if !self.select(random, &mut selected, &mut available) {
            return selected;
        }

        while !available.is_empty() && random.next_int(50) < quality {
            if !self.select(random, &mut selected, &mut available) {
                break;
            }
            quality /= 2;
        }

        selected
    }

    /// The offer shown on a button: the first enchantment rolled.
    pub fn get_offer<R: RandomSource + ?Sized>(
        &self,
        random: &mut R,
        level: i32,
    ) -> Option<EnchantmentOffer> {
        if level < 1 {
            return None;
        }

        self.apply(random, level)
            .into_iter()
            .next()
            .map(|(enchantment, enchantment_level)| {
                EnchantmentOffer::new(enchantment, enchantment_level, level)
            })
    }

    /// Rolls the level cost of each button. A button that ends up below its
    /// own position (1, 2, 3) is unusable and reports 0.
    ///
    /// Bookshelves are clamped to `0..=15`, so every level lies in `0..=30`.
    pub fn get_button_levels<R: RandomSource + ?Sized>(
        random: &mut R,
        shelves: i32,
    ) -> [i32; BUTTONS] {
        let shelves = shelves.clamp(0, MAX_BOOKSHELVES);
        let mut levels = [0; BUTTONS];
        for (button, level) in levels.iter_mut().enumerate() {
            *level = Self::button_level(random, button, shelves);
        }
        levels
    }

    fn button_level<R: RandomSource + ?Sized>(random: &mut R, button: usize, shelves: i32) -> i32 {
        let roll = random.next_int(8) + 1 + (shelves >> 1) + random.next_int(shelves + 1);
        let level = match button {
            0 => (roll / 3).max(1),
            1 => roll * 2 / 3 + 1,
            _ => roll.max(shelves * 2),
        };
        // Button indices are below 3.
        let minimum = button as i32 + 1;
        if level >= minimum {
            level
        } else {
            0
        }
    }

    /// Effective enchanting power for a level cost.
    #[allow(clippy::cast_precision_loss)]
    fn quality<R: RandomSource + ?Sized>(&self, random: &mut R, level: i32) -> i32 {
        // One draw over twice the range stands in for the sum of two draws.
        let spread = 2 * (u64::from(self.enchantability.value()) / 4 + 1) - 1;
        let spread = i32::try_from(spread).unwrap_or(i32::MAX);
        let quality = random.next_int(spread).saturating_add(1).saturating_add(level);

        let bonus = (random.next_float() + random.next_float() - 1.0) * 0.15;
        let quality = quality as f32;
        let jittered = (quality + quality * bonus + 0.5).floor() as i32;
        jittered.max(1)
    }

    fn available(&self, quality: i32) -> Vec<Candidate<'_>> {
        self.enchantments
            .iter()
            .filter_map(|enchantment| {
                let data = self.economics.data(enchantment.key());
                let max_level = (self.max_level)(enchantment);
                let level = (enchantment.start_level()..=max_level).rev().find(|&level| {
                    data.min_quality(level) <= quality && quality <= data.max_quality(level)
                })?;
                Some(Candidate {
                    enchantment,
                    data,
                    level,
                })
            })
            .collect()
    }

    fn select<R: RandomSource + ?Sized>(
        &self,
        random: &mut R,
        selected: &mut Selection,
        available: &mut Vec<Candidate<'_>>,
    ) -> bool {
        let Some(index) = weighted::choose(random, available.as_slice()) else {
            return false;
        };

        let picked = available.remove(index);
        available
            .retain(|candidate| !(self.incompatibility)(candidate.enchantment, picked.enchantment));

        trace!(
            enchantment = %picked.enchantment.key(),
            level = picked.level,
            remaining = available.len(),
            "Selected table enchantment"
        );
        selected.push((picked.enchantment.key().clone(), picked.level));
        true
    }
}

impl fmt::Debug for EnchantingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnchantingTable")
            .field("enchantments", &self.enchantments.len())
            .field("enchantability", &self.enchantability)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enchantry_core::enchant::keys;
    use enchantry_core::item::types;
    use enchantry_core::random::{seeded, SequenceRandom};

    fn sword_table() -> EnchantingTable {
        EnchantingTable::for_item(&types::DIAMOND_SWORD).unwrap()
    }

    #[test]
    fn test_empty_inputs_roll_nothing() {
        let mut random = seeded(1);
        assert!(sword_table().apply(&mut random, 0).is_empty());
        let empty = EnchantingTable::new(Vec::new(), Enchantability::BOOK);
        assert!(empty.apply(&mut random, 30).is_empty());
        assert!(sword_table().get_offer(&mut random, 0).is_none());
    }

    #[test]
    fn test_unenchantable_item_has_no_table() {
        assert!(EnchantingTable::for_item(&types::DIRT).is_none());
    }

    #[test]
    fn test_quality_without_jitter() {
        // Enchantability 10: spread 2 * (2 + 1) - 1 = 5.
        let table = sword_table();
        let mut random = SequenceRandom::new([4], [0.5, 0.5]);
        assert_eq!(table.quality(&mut random, 10), 15);
    }

    #[test]
    fn test_quality_rounds_half_up() {
        let table = EnchantingTable::new(Vec::new(), Enchantability::BOOK);
        // Spread 1, so quality is 1 + level = 10 before jitter.
        let mut random = SequenceRandom::new([0], [1.0 / 3.0, 1.0]);
        // bonus = (1.333 - 1) * 0.15 = 0.05, 10 * 1.05 = 10.5
        assert_eq!(table.quality(&mut random, 9), 11);
    }

    #[test]
    fn test_quality_full_penalty() {
        let table = EnchantingTable::new(Vec::new(), Enchantability::BOOK);
        let mut random = SequenceRandom::new([0], [0.0, 0.0]);
        // 2 * 0.85 = 1.7
        assert_eq!(table.quality(&mut random, 1), 2);
    }

    #[test]
    fn test_first_pick_is_free() {
        // A gate draw of 49 never passes at low quality.
        let table = sword_table();
        let mut random = SequenceRandom::new([0, 0, 49], [0.5, 0.5]);
        let selection = table.apply(&mut random, 1);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_single_enchantment_table() {
        let registry = EnchantmentRegistry::vanilla();
        let table = EnchantingTable::new(
            vec![registry.get(&keys::UNBREAKING).unwrap().clone()],
            Enchantability::IRON_TOOL,
        );
        let mut random = seeded(5);
        let selection = table.apply(&mut random, 30);
        assert_eq!(selection.len(), 1);
        assert_eq!(selection[0].0, keys::UNBREAKING);
    }

    #[test]
    fn test_custom_max_level() {
        let registry = EnchantmentRegistry::vanilla();
        let table = EnchantingTable::new(
            vec![registry.get(&keys::SHARPNESS).unwrap().clone()],
            Enchantability::BOOK,
        )
        .with_max_level(|_| 1);
        let mut random = seeded(11);
        for _ in 0..50 {
            assert_eq!(table.apply(&mut random, 10), vec![(keys::SHARPNESS, 1)]);
        }
    }

    #[test]
    fn test_incompatibility_override_keeps_self_conflict() {
        let registry = EnchantmentRegistry::vanilla();
        let table = EnchantingTable::new(
            vec![
                registry.get(&keys::SHARPNESS).unwrap().clone(),
                registry.get(&keys::SMITE).unwrap().clone(),
            ],
            Enchantability::GOLD_TOOL,
        )
        .with_incompatibility(|_, _| false);
        let mut random = seeded(3);
        let mut both = false;
        for _ in 0..200 {
            let selection = table.apply(&mut random, 30);
            let mut keys: Vec<_> = selection.iter().map(|(key, _)| key.clone()).collect();
            keys.dedup();
            assert_eq!(keys.len(), selection.len());
            both |= selection.len() == 2;
        }
        assert!(both, "lifting the damage conflict should allow both");
    }

    #[test]
    fn test_button_levels_full_shelves() {
        // Max rolls: 7 + 1 + 7 + 15 = 30.
        let mut random = SequenceRandom::new([7, 15], []);
        assert_eq!(EnchantingTable::get_button_levels(&mut random, 40), [10, 21, 30]);
    }

    #[test]
    fn test_button_levels_no_shelves() {
        // Min rolls: 0 + 1 + 0 + 0 = 1.
        let mut random = SequenceRandom::new([0], []);
        assert_eq!(EnchantingTable::get_button_levels(&mut random, 0), [1, 0, 0]);
    }

    #[test]
    fn test_offer_cost_is_button_level() {
        let table = sword_table();
        let mut random = seeded(21);
        let offer = table.get_offer(&mut random, 17).unwrap();
        assert_eq!(offer.cost(), 17);
        assert!(table
            .enchantments()
            .iter()
            .any(|enchantment| enchantment.key() == offer.enchantment()));
    }
}
