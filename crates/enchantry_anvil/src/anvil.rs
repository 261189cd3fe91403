//! # Anvil
//!
//! Runs the vanilla forging pipeline:
//!
//! 1. Charge prior work on both inputs
//! 2. Without an addition: rename only, capped just under the ceiling
//! 3. With an addition: rename, bump prior work, repair, merge enchantments
//! 4. Forge: reject outputs indistinguishable from the base
//!
//! Custom pipelines drive [`Anvil::apply`] and [`Anvil::forge`] directly.

use tracing::trace;

use crate::behavior::{AnvilBehavior, VanillaBehavior};
use crate::combine::COMBINE_ENCHANTMENTS_JAVA_EDITION;
use crate::function::AnvilFunction;
use crate::functions::{
    PRIOR_WORK_LEVEL_COST, RENAME, REPAIR_WITH_COMBINATION, REPAIR_WITH_MATERIAL,
    UPDATE_PRIOR_WORK_COST,
};
use crate::result::AnvilResult;
use crate::state::{AnvilState, AnvilView};

/// An anvil bound to a behavior.
#[derive(Clone, Debug, Default)]
pub struct Anvil<B = VanillaBehavior> {
    behavior: B,
}

impl Anvil {
    /// An anvil with vanilla behavior.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            behavior: VanillaBehavior,
        }
    }
}

impl<B: AnvilBehavior> Anvil<B> {
    /// An anvil with custom behavior.
    #[must_use]
    pub const fn with_behavior(behavior: B) -> Self {
        Self { behavior }
    }

    /// The behavior in use.
    #[inline]
    #[must_use]
    pub const fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Computes the output for the given inputs.
    #[must_use]
    pub fn get_result(&self, view: AnvilView) -> AnvilResult {
        let mut state = AnvilState::new(view);

        if state.base().item().is_empty() {
            return AnvilResult::EMPTY;
        }

        self.apply(&mut state, &PRIOR_WORK_LEVEL_COST);

        if state.addition().item().is_empty() {
            if self.apply(&mut state, &RENAME) {
                let capped = state
                    .level_cost()
                    .min(state.maximum_repair_cost().saturating_sub(1));
                state.set_level_cost(capped);
            }
            return self.forge(state);
        }

        if state.base().item().amount() != 1 {
            return AnvilResult::EMPTY;
        }

        self.apply(&mut state, &RENAME);
        self.apply(&mut state, &UPDATE_PRIOR_WORK_COST);
        if !self.apply(&mut state, &REPAIR_WITH_MATERIAL) {
            self.apply(&mut state, &REPAIR_WITH_COMBINATION);
        }
        self.apply(&mut state, &COMBINE_ENCHANTMENTS_JAVA_EDITION);

        self.forge(state)
    }

    /// Runs one function against the state. Returns whether it applied.
    pub fn apply(&self, state: &mut AnvilState, function: &dyn AnvilFunction) -> bool {
        if !function.can_apply(&self.behavior, state) {
            return false;
        }

        let result = function.result(&self.behavior, state);
        result.modify_result(state.result_mut().meta_mut());
        state.set_level_cost(state.level_cost().saturating_add(result.level_cost_increase));
        state.set_material_cost(
            state
                .material_cost()
                .saturating_add(result.material_cost_increase),
        );

        trace!(
            function = function.name(),
            level_cost = state.level_cost(),
            material_cost = state.material_cost(),
            "Applied anvil function"
        );
        true
    }

    /// Finalizes the state into a result.
    ///
    /// The output is discarded if, ignoring the prior work penalty and a
    /// name that only changed through the addition, it equals the base.
    #[must_use]
    pub fn forge(&self, state: AnvilState) -> AnvilResult {
        let unchanged = {
            let (Some(base_meta), Some(result_meta)) = (state.base().meta(), state.result().meta())
            else {
                return AnvilResult::EMPTY;
            };

            let mut cleaned = result_meta.clone();
            if let Some(cost) = base_meta.repair_cost() {
                cleaned.set_repair_cost(cost);
            }
            if !state.addition().item().is_empty() {
                cleaned.set_display_name(base_meta.display_name());
            }
            cleaned == *base_meta
        };

        if unchanged {
            trace!("Anvil output matches base");
            return AnvilResult::EMPTY;
        }

        let level_cost = state.level_cost();
        let material_cost = state.material_cost();
        AnvilResult::new(state.into_result(), level_cost, material_cost)
    }
}
