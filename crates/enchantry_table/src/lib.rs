//! # ENCHANTRY Table
//!
//! Random enchantment generation for enchanting tables.
//!
//! - [`EnchantingTable`]: quality rolls, weighted selection, offers and
//!   button levels
//! - [`Enchantability`]: per-material roll spread
//! - [`EnchantingSession`]: seed bookkeeping so previews match results
//!
//! Every roll takes a caller-supplied [`RandomSource`]; the same draws
//! always produce the same enchantments.
//!
//! [`RandomSource`]: enchantry_core::random::RandomSource

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod enchantability;
pub mod offer;
pub mod session;
pub mod table;
pub mod weighted;

pub use enchantability::{Enchantability, EnchantabilityTable};
pub use offer::EnchantmentOffer;
pub use session::{EnchantingSession, PreparedOffers};
pub use table::{EnchantingTable, Selection, BUTTONS, MAX_BOOKSHELVES};
