//! # ENCHANTRY
//!
//! Anvil and enchanting table rules, integrating all units.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          ENCHANTRY                            │
//! ├───────────────────────────────────────────────────────────────┤
//! │                                                               │
//! │  ┌─────────────────┐                 ┌─────────────────┐      │
//! │  │  Anvil          │                 │  Table          │      │
//! │  │                 │                 │                 │      │
//! │  │  • Rename       │                 │  • Quality roll │      │
//! │  │  • Repair       │                 │  • Offers       │      │
//! │  │  • Combine      │                 │  • Sessions     │      │
//! │  └────────┬────────┘                 └────────┬────────┘      │
//! │           │        ┌─────────────────┐        │               │
//! │           └───────>│  Core           │<───────┘               │
//! │                    │                 │                        │
//! │                    │  • Items        │                        │
//! │                    │  • Enchantments │                        │
//! │                    │  • Economics    │                        │
//! │                    │  • Config       │                        │
//! │                    └─────────────────┘                        │
//! │                                                               │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `engine`: one configured anvil and table source
//! - `prelude`: the types most hosts need

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod engine;
pub mod prelude;

// Re-export the units
pub use enchantry_anvil as anvil;
pub use enchantry_core as core;
pub use enchantry_table as table;

pub use engine::{ConfiguredBehavior, Enchantry};
