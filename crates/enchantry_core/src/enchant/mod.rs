//! # Enchantments
//!
//! Definitions, the vanilla catalog, rarity tiers and the economics table
//! that prices and gates enchantments.

mod definition;
pub mod data;
pub mod economics;
pub mod provider;
pub mod rarity;
pub mod registry;
mod vanilla;

pub use data::{EnchantData, PartialEconomics, QualityFormula};
pub use definition::Enchantment;
pub use economics::EconomicsTable;
pub use provider::{EnchantDataProvider, IntrospectionProvider, StaticProvider};
pub use rarity::EnchantRarity;
pub use registry::EnchantmentRegistry;
pub use vanilla::keys;
