//! # Item Facade
//!
//! Item types, stacks and their mutable metadata.
//!
//! Reading metadata from a stack always yields an owned copy; changes only
//! take effect when written back. [`MetaCachedStack`] memoizes that copy so a
//! single rule evaluation reads each stack's metadata at most once.

mod cached;
mod meta;
pub mod tags;
pub mod types;

pub use cached::MetaCachedStack;
pub use meta::{canonical_name, repair_cost_of, ItemMeta};
pub use tags::ItemTag;

use crate::key::Key;

/// A kind of item, identified by key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemType {
    key: Key,
    max_durability: u16,
}

impl ItemType {
    /// The empty item type.
    pub const AIR: Self = Self::vanilla("air", 0);

    /// Creates a vanilla item type. Usable in `const` items.
    #[inline]
    #[must_use]
    pub const fn vanilla(path: &'static str, max_durability: u16) -> Self {
        Self {
            key: Key::minecraft(path),
            max_durability,
        }
    }

    /// Creates an item type with an arbitrary key.
    #[must_use]
    pub fn new(key: Key, max_durability: u16) -> Self {
        Self {
            key,
            max_durability,
        }
    }

    /// The identifying key.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Maximum durability, or 0 if the type does not wear down.
    #[inline]
    #[must_use]
    pub const fn max_durability(&self) -> u16 {
        self.max_durability
    }

    /// Returns true for the empty item type.
    #[inline]
    #[must_use]
    pub fn is_air(&self) -> bool {
        self.key == Self::AIR.key
    }

    /// Creates a stack of one item of this type with default metadata.
    #[must_use]
    pub fn create_item_stack(&self) -> ItemStack {
        ItemStack::new(self.clone(), 1)
    }
}

/// A stack of items with optional metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStack {
    item_type: ItemType,
    amount: u32,
    meta: Option<ItemMeta>,
}

impl ItemStack {
    /// The empty stack.
    pub const AIR: Self = Self {
        item_type: ItemType::AIR,
        amount: 0,
        meta: None,
    };

    /// Creates a stack with the default metadata for its type.
    #[must_use]
    pub fn new(item_type: ItemType, amount: u32) -> Self {
        let meta = ItemMeta::for_type(&item_type);
        Self {
            item_type,
            amount,
            meta,
        }
    }

    /// The item type.
    #[inline]
    #[must_use]
    pub fn item_type(&self) -> &ItemType {
        &self.item_type
    }

    /// Number of items in the stack.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    /// Sets the number of items in the stack.
    pub fn set_amount(&mut self, amount: u32) {
        self.amount = amount;
    }

    /// Returns true if the stack holds nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amount < 1 || self.item_type.is_air()
    }

    /// Returns an owned copy of the stack's metadata.
    ///
    /// Empty stacks have no metadata.
    #[must_use]
    pub fn item_meta(&self) -> Option<ItemMeta> {
        if self.item_type.is_air() {
            return None;
        }
        self.meta.clone()
    }

    /// Replaces the stack's metadata. Ignored for air.
    pub fn set_item_meta(&mut self, meta: Option<ItemMeta>) {
        if !self.item_type.is_air() {
            self.meta = meta;
        }
    }

    /// Edits the metadata in place and returns the stack.
    #[must_use]
    pub fn with_meta(mut self, edit: impl FnOnce(&mut ItemMeta)) -> Self {
        if let Some(meta) = self.meta.as_mut() {
            edit(meta);
        }
        self
    }

    /// Sets the amount and returns the stack.
    #[must_use]
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::AIR
    }
}
