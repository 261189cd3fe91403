//! # ENCHANTRY Anvil
//!
//! Anvil forging: renaming, repair, and enchantment merging, priced in
//! experience levels and consumed materials.
//!
//! ## Pipeline
//!
//! An [`Anvil`] feeds an [`AnvilState`] through a sequence of
//! [`AnvilFunction`]s. Each function decides whether it applies, then adds
//! to the cost and edits the output's metadata. The policy questions a
//! function asks (does this enchantment fit, what repairs what) go to an
//! [`AnvilBehavior`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use enchantry_anvil::{Anvil, AnvilView};
//! use enchantry_core::item::types;
//!
//! let anvil = Anvil::new();
//! let view = AnvilView::new(Some(types::DIAMOND_SWORD.create_item_stack()), None)
//!     .with_rename_text("Blade");
//! assert_eq!(anvil.get_result(view).level_cost(), 1);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod anvil;
pub mod behavior;
pub mod combine;
pub mod function;
pub mod functions;
pub mod repair;
pub mod result;
pub mod state;

pub use anvil::Anvil;
pub use behavior::{AnvilBehavior, VanillaBehavior};
pub use combine::{
    BedrockEdition, CombineEnchantments, Edition, JavaEdition, COMBINE_ENCHANTMENTS_BEDROCK_EDITION,
    COMBINE_ENCHANTMENTS_JAVA_EDITION,
};
pub use function::{AnvilFunction, AnvilFunctionResult, MetaChange};
pub use result::AnvilResult;
pub use state::{AnvilState, AnvilView};
