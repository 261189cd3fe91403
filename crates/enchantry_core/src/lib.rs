//! # ENCHANTRY Core
//!
//! Shared vocabulary for the anvil and enchanting table rule engines.
//!
//! ## Design Principles
//!
//! 1. **Pure functions** - Rule engines read items and return new ones; the host owns the world
//! 2. **Compute once** - Catalogs and economics are resolved lazily, then read-only
//! 3. **Never fail at runtime** - Missing data degrades to defaults, errors stop at config loading
//! 4. **External configuration** - Balance overrides live in TOML files
//!
//! ## Example
//!
//! ```rust,ignore
//! use enchantry_core::enchant::{keys, EconomicsTable};
//!
//! let table = EconomicsTable::global();
//! let sharpness = table.data(&keys::SHARPNESS);
//! assert_eq!(sharpness.anvil_cost(), 1);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod enchant;
pub mod error;
pub mod item;
pub mod key;
pub mod random;

pub use config::{AnvilSettings, EnchantryConfig};
pub use enchant::{
    EconomicsTable, EnchantData, EnchantDataProvider, EnchantRarity, Enchantment,
    EnchantmentRegistry, QualityFormula,
};
pub use error::{CoreError, CoreResult, ProviderError};
pub use item::{ItemMeta, ItemStack, ItemTag, ItemType, MetaCachedStack};
pub use key::Key;
pub use random::RandomSource;
