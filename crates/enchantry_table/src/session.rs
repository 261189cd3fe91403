//! # Enchanting Session
//!
//! Ties table rolls to a per-player seed so the offers a player sees are
//! exactly what they receive:
//!
//! - button levels roll with `seed`
//! - button `i`'s offer rolls with `seed + i`
//! - enchanting through button `i` re-rolls with `seed + i` at the chosen cost
//!
//! Hosts reseed after every completed enchant.

use std::fmt;
use std::sync::Arc;

use enchantry_core::item::ItemStack;
use enchantry_core::random::seeded;
use tracing::debug;

use crate::offer::EnchantmentOffer;
use crate::table::{EnchantingTable, Selection, BUTTONS};

type Ineligible = dyn Fn(&ItemStack) -> bool + Send + Sync;

/// Button levels and the offer behind each button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreparedOffers {
    /// Level cost of each button, 0 if unusable.
    pub button_levels: [i32; BUTTONS],
    /// Preview for each button.
    pub offers: [Option<EnchantmentOffer>; BUTTONS],
}

/// A player's enchanting state.
#[derive(Clone)]
pub struct EnchantingSession {
    seed: u64,
    ineligible: Arc<Ineligible>,
}

impl EnchantingSession {
    /// A session with no extra eligibility rules.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ineligible: Arc::new(|_: &ItemStack| false),
        }
    }

    /// Adds a host rule rejecting items before any roll.
    #[must_use]
    pub fn with_ineligibility(
        mut self,
        ineligible: impl Fn(&ItemStack) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.ineligible = Arc::new(ineligible);
        self
    }

    /// The current seed.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Replaces the seed, invalidating prepared offers.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Whether an item is rejected: stacked, ineligible, or already
    /// enchanted.
    #[must_use]
    pub fn can_not_enchant(&self, item: &ItemStack) -> bool {
        item.amount() != 1
            || (self.ineligible)(item)
            || item
                .item_meta()
                .is_some_and(|meta| !meta.is_enchantment_storage() && !meta.enchants().is_empty())
    }

    /// Rolls the buttons shown for an item. `None` if the item is rejected.
    #[must_use]
    pub fn prepare(
        &self,
        table: &EnchantingTable,
        item: &ItemStack,
        shelves: i32,
    ) -> Option<PreparedOffers> {
        if self.can_not_enchant(item) {
            debug!(item = %item.item_type().key(), "Item rejected by enchanting session");
            return None;
        }

        let button_levels = EnchantingTable::get_button_levels(&mut seeded(self.seed), shelves);
        let mut offers: [Option<EnchantmentOffer>; BUTTONS] = Default::default();
        for (button, offer) in offers.iter_mut().enumerate() {
            let mut random = seeded(self.button_seed(button));
            *offer = table.get_offer(&mut random, button_levels[button]);
        }

        Some(PreparedOffers {
            button_levels,
            offers,
        })
    }

    /// Rolls the enchantments granted by a button at its level cost.
    /// `None` if the item is rejected.
    #[must_use]
    pub fn enchant(
        &self,
        table: &EnchantingTable,
        item: &ItemStack,
        button: usize,
        level_cost: i32,
    ) -> Option<Selection> {
        if self.can_not_enchant(item) {
            return None;
        }
        Some(table.apply(&mut seeded(self.button_seed(button)), level_cost))
    }

    fn button_seed(&self, button: usize) -> u64 {
        self.seed.wrapping_add(button as u64)
    }
}

impl fmt::Debug for EnchantingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnchantingSession")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
