//! Memoized metadata view over a stack.

use std::cell::OnceCell;

use crate::item::{ItemMeta, ItemStack};

/// An [`ItemStack`] whose metadata copy is fetched on first access and
/// reused afterwards.
///
/// Edits made through [`MetaCachedStack::meta_mut`] live in the cache until
/// [`MetaCachedStack::into_item`] writes them back.
#[derive(Debug)]
pub struct MetaCachedStack {
    item: ItemStack,
    meta: OnceCell<Option<ItemMeta>>,
}

impl MetaCachedStack {
    /// Wraps a stack. `None` is treated as air.
    #[must_use]
    pub fn new(item: Option<ItemStack>) -> Self {
        Self {
            item: item.unwrap_or(ItemStack::AIR),
            meta: OnceCell::new(),
        }
    }

    /// The wrapped stack. Its metadata does not reflect cached edits.
    #[inline]
    #[must_use]
    pub fn item(&self) -> &ItemStack {
        &self.item
    }

    /// The cached metadata, fetched on first access.
    #[must_use]
    pub fn meta(&self) -> Option<&ItemMeta> {
        self.meta.get_or_init(|| self.item.item_meta()).as_ref()
    }

    /// Mutable access to the cached metadata.
    pub fn meta_mut(&mut self) -> Option<&mut ItemMeta> {
        if self.meta.get_or_init(|| self.item.item_meta()).is_none() {
            return None;
        }
        self.meta.get_mut().and_then(Option::as_mut)
    }

    /// Unwraps the stack, writing any cached metadata back into it.
    #[must_use]
    pub fn into_item(self) -> ItemStack {
        let Self { mut item, meta } = self;
        if let Some(meta) = meta.into_inner() {
            item.set_item_meta(meta);
        }
        item
    }
}

impl From<ItemStack> for MetaCachedStack {
    fn from(item: ItemStack) -> Self {
        Self::new(Some(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::types;

    #[test]
    fn test_none_is_air() {
        let stack = MetaCachedStack::new(None);
        assert!(stack.item().is_empty());
        assert!(stack.meta().is_none());
    }

    #[test]
    fn test_edits_write_back() {
        let mut stack = MetaCachedStack::from(types::DIAMOND_PICKAXE.create_item_stack());
        stack.meta_mut().unwrap().set_damage(100);
        assert_eq!(stack.item().item_meta().unwrap().damage(), Some(0));
        assert_eq!(stack.meta().unwrap().damage(), Some(100));

        let item = stack.into_item();
        assert_eq!(item.item_meta().unwrap().damage(), Some(100));
    }

    #[test]
    fn test_meta_mut_after_read_keeps_cache() {
        let mut stack = MetaCachedStack::from(types::DIAMOND_PICKAXE.create_item_stack());
        assert_eq!(stack.meta().unwrap().damage(), Some(0));
        stack.meta_mut().unwrap().set_damage(7);
        assert_eq!(stack.meta_mut().unwrap().damage(), Some(7));
        assert!(MetaCachedStack::new(None).meta_mut().is_none());
    }
}
