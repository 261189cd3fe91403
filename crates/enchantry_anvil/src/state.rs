//! # Anvil State
//!
//! The inputs of one forge ([`AnvilView`]) and the working state the
//! pipeline accumulates while processing them ([`AnvilState`]).

use enchantry_core::config::DEFAULT_MAXIMUM_REPAIR_COST;
use enchantry_core::item::{ItemStack, MetaCachedStack};

/// What the player put into the anvil.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnvilView {
    base: Option<ItemStack>,
    addition: Option<ItemStack>,
    rename_text: Option<String>,
    maximum_repair_cost: i32,
}

impl AnvilView {
    /// A view with no rename text and the default cost ceiling.
    #[must_use]
    pub fn new(base: Option<ItemStack>, addition: Option<ItemStack>) -> Self {
        Self {
            base,
            addition,
            rename_text: None,
            maximum_repair_cost: DEFAULT_MAXIMUM_REPAIR_COST,
        }
    }

    /// Sets the rename field.
    #[must_use]
    pub fn with_rename_text(mut self, text: impl Into<String>) -> Self {
        self.rename_text = Some(text.into());
        self
    }

    /// Sets the "too expensive" ceiling.
    #[must_use]
    pub fn with_maximum_repair_cost(mut self, cost: i32) -> Self {
        self.maximum_repair_cost = cost;
        self
    }

    /// The item being worked.
    #[inline]
    #[must_use]
    pub fn base(&self) -> Option<&ItemStack> {
        self.base.as_ref()
    }

    /// The item consumed.
    #[inline]
    #[must_use]
    pub fn addition(&self) -> Option<&ItemStack> {
        self.addition.as_ref()
    }

    /// The rename field, if any.
    #[inline]
    #[must_use]
    pub fn rename_text(&self) -> Option<&str> {
        self.rename_text.as_deref()
    }

    /// The "too expensive" ceiling.
    #[inline]
    #[must_use]
    pub const fn maximum_repair_cost(&self) -> i32 {
        self.maximum_repair_cost
    }
}

/// Working state of one forge.
///
/// The result starts as a copy of the base. Costs only grow while functions
/// apply, except for the rename-only cap.
#[derive(Debug)]
pub struct AnvilState {
    rename_text: Option<String>,
    maximum_repair_cost: i32,
    base: MetaCachedStack,
    addition: MetaCachedStack,
    result: MetaCachedStack,
    level_cost: i32,
    material_cost: i32,
}

impl AnvilState {
    /// Starts a forge from a view.
    #[must_use]
    pub fn new(view: AnvilView) -> Self {
        let AnvilView {
            base,
            addition,
            rename_text,
            maximum_repair_cost,
        } = view;
        Self {
            rename_text,
            maximum_repair_cost,
            result: MetaCachedStack::new(base.clone()),
            base: MetaCachedStack::new(base),
            addition: MetaCachedStack::new(addition),
            level_cost: 0,
            material_cost: 0,
        }
    }

    /// The rename field, if any.
    #[inline]
    #[must_use]
    pub fn rename_text(&self) -> Option<&str> {
        self.rename_text.as_deref()
    }

    /// The "too expensive" ceiling.
    #[inline]
    #[must_use]
    pub const fn maximum_repair_cost(&self) -> i32 {
        self.maximum_repair_cost
    }

    /// The item being worked. Air if absent.
    #[inline]
    #[must_use]
    pub fn base(&self) -> &MetaCachedStack {
        &self.base
    }

    /// The item consumed. Air if absent.
    #[inline]
    #[must_use]
    pub fn addition(&self) -> &MetaCachedStack {
        &self.addition
    }

    /// The output under construction.
    #[inline]
    #[must_use]
    pub fn result(&self) -> &MetaCachedStack {
        &self.result
    }

    /// Mutable access to the output under construction.
    #[inline]
    pub fn result_mut(&mut self) -> &mut MetaCachedStack {
        &mut self.result
    }

    /// Accumulated experience level cost.
    #[inline]
    #[must_use]
    pub const fn level_cost(&self) -> i32 {
        self.level_cost
    }

    /// Overwrites the level cost.
    #[inline]
    pub fn set_level_cost(&mut self, cost: i32) {
        self.level_cost = cost;
    }

    /// Accumulated material cost.
    #[inline]
    #[must_use]
    pub const fn material_cost(&self) -> i32 {
        self.material_cost
    }

    /// Overwrites the material cost.
    #[inline]
    pub fn set_material_cost(&mut self, cost: i32) {
        self.material_cost = cost;
    }

    /// Unwraps the output stack with all metadata edits written back.
    #[must_use]
    pub fn into_result(self) -> ItemStack {
        self.result.into_item()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enchantry_core::item::types;

    #[test]
    fn test_result_starts_as_base() {
        let sword = types::IRON_SWORD
            .create_item_stack()
            .with_meta(|meta| meta.set_damage(10));
        let state = AnvilState::new(AnvilView::new(Some(sword.clone()), None));
        assert_eq!(state.result().item(), &sword);
        assert!(state.addition().item().is_empty());
        assert_eq!(state.level_cost(), 0);
        assert_eq!(state.maximum_repair_cost(), DEFAULT_MAXIMUM_REPAIR_COST);
    }

    #[test]
    fn test_result_edits_do_not_touch_base() {
        let sword = types::IRON_SWORD.create_item_stack();
        let mut state = AnvilState::new(AnvilView::new(Some(sword), None));
        if let Some(meta) = state.result_mut().meta_mut() {
            meta.set_display_name(Some("Edge"));
        }
        assert_eq!(state.base().meta().and_then(|m| m.display_name()), None);
        let result = state.into_result();
        assert_eq!(result.item_meta().unwrap().display_name(), Some("Edge"));
    }
}
