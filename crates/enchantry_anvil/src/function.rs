//! # Anvil Functions
//!
//! One step of the forging pipeline. A function is asked whether it applies
//! to the current state and, if so, describes its effect as cost increases
//! plus a [`MetaChange`] to the output metadata.

use std::collections::BTreeMap;

use enchantry_core::item::ItemMeta;
use enchantry_core::key::Key;

use crate::behavior::AnvilBehavior;
use crate::state::AnvilState;

/// A pipeline step.
pub trait AnvilFunction: Send + Sync {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    /// Whether the step applies to the current state.
    fn can_apply(&self, behavior: &dyn AnvilBehavior, state: &AnvilState) -> bool;

    /// The step's effect. Only called when [`AnvilFunction::can_apply`]
    /// returned true.
    fn result(&self, behavior: &dyn AnvilBehavior, state: &AnvilState) -> AnvilFunctionResult;
}

/// An edit to the output metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MetaChange {
    /// Leave the metadata alone.
    #[default]
    None,
    /// Set the display name and, where supported, the repair cost.
    Rename {
        /// New name. `None` clears it.
        name: Option<String>,
        /// New prior work penalty.
        repair_cost: i32,
    },
    /// Set the prior work penalty where supported.
    SetRepairCost(i32),
    /// Set the damage where supported.
    SetDamage(i32),
    /// Add enchantments, replacing existing levels.
    AddEnchants(BTreeMap<Key, i32>),
}

impl MetaChange {
    /// Applies the edit.
    pub fn apply_to(&self, meta: &mut ItemMeta) {
        match self {
            Self::None => {}
            Self::Rename { name, repair_cost } => {
                meta.set_display_name(name.as_deref());
                meta.set_repair_cost(*repair_cost);
            }
            Self::SetRepairCost(cost) => meta.set_repair_cost(*cost),
            Self::SetDamage(damage) => meta.set_damage(*damage),
            Self::AddEnchants(enchants) => meta.add_enchants(enchants),
        }
    }
}

/// What one step adds to the forge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnvilFunctionResult {
    /// Added experience level cost.
    pub level_cost_increase: i32,
    /// Added material cost.
    pub material_cost_increase: i32,
    /// Output metadata edit.
    pub change: MetaChange,
}

impl AnvilFunctionResult {
    /// No cost, no change.
    pub const EMPTY: Self = Self {
        level_cost_increase: 0,
        material_cost_increase: 0,
        change: MetaChange::None,
    };

    /// A pure level cost.
    #[inline]
    #[must_use]
    pub const fn level_cost(level_cost_increase: i32) -> Self {
        Self {
            level_cost_increase,
            material_cost_increase: 0,
            change: MetaChange::None,
        }
    }

    /// Attaches a metadata edit.
    #[must_use]
    pub fn with_change(mut self, change: MetaChange) -> Self {
        self.change = change;
        self
    }

    /// Edits the output metadata, if the output has any.
    pub fn modify_result(&self, meta: Option<&mut ItemMeta>) {
        if let Some(meta) = meta {
            self.change.apply_to(meta);
        }
    }
}
