//! The status lifecycle: passive rewrites, active ticks, turn
//! countdown, and death checks.
//!
//! A held status is active while its slot's countdown is above zero.
//! It leaves the mage one of two ways: expiry (countdown hits zero
//! during [`Resolver::decrease_status_turns`], firing its on-destroy
//! actions) or an early burn (no on-destroy). Death-check statuses are
//! the exception: their on-destroy list fires when their trigger
//! consumes them.

use crate::catalog::{Status, StatusId, StatusMode};
use crate::core::{Effect, Mage};

use super::Resolver;

impl Resolver<'_> {
    /// Run the mage's passive statuses over a pending effect.
    ///
    /// Statuses rewrite in slot order, each status's mutations in list
    /// order, every mutation observing its predecessor's output. The
    /// mage itself is never modified here.
    #[must_use]
    pub fn run_passive_statuses(&self, mage: &Mage, mut effect: Effect) -> Effect {
        for slot in &mage.statuses {
            let status = self.catalogs.status(slot.status);
            if status.mode != StatusMode::Passive {
                continue;
            }
            for &mutation_id in &status.mutations {
                let mutation = self.catalogs.mutation(mutation_id);
                self.run_mutation(&mutation, &mut effect, mage);
            }
        }
        effect
    }

    /// Run the mage's active statuses for this turn.
    ///
    /// Each active status's actions are interpreted with the holder as
    /// the acting mage and applied to the holder immediately, so later
    /// actions see earlier results. The opponent is read-only context
    /// for opponent-side preconditions.
    pub fn run_active_statuses(&mut self, mage: &mut Mage, opponent: &Mage, turn: u32) {
        let held: Vec<StatusId> = mage.statuses.iter().map(|slot| slot.status).collect();

        for status_id in held {
            // an earlier effect may have burned or replaced this slot
            if !mage.has_status(status_id) {
                continue;
            }
            let status = self.catalogs.status(status_id);
            if status.mode != StatusMode::Active {
                continue;
            }
            for &action_id in &status.actions {
                let action = self.catalogs.action(action_id);
                if let Some(effect) = self.run_action_from(&action, mage, opponent, status_id) {
                    self.apply_effect(&effect, mage, turn);
                }
            }
        }
    }

    /// Tick every held status's countdown down by one.
    ///
    /// Slots reaching zero are removed first (survivors keep their
    /// order), then each expired status's on-destroy actions run in the
    /// order the slots were held.
    pub fn decrease_status_turns(&mut self, mage: &mut Mage, turn: u32) {
        let mut expired: Vec<StatusId> = Vec::new();

        for slot in &mut mage.statuses {
            slot.turns = slot.turns.saturating_sub(1);
            if slot.turns == 0 {
                expired.push(slot.status);
            }
        }
        mage.statuses.retain(|slot| slot.turns > 0);

        for status_id in expired {
            let status = self.catalogs.status(status_id);
            self.run_on_destroy(&status, mage, turn);
        }
    }

    /// Fire death-check statuses for a mage at lethal health.
    ///
    /// Each death-check slot whose holder is at zero health is consumed
    /// and its on-destroy actions run; a resurrection there stops any
    /// remaining death checks from firing. Returns the last effect the
    /// on-destroy actions produced, for the caller's bookkeeping.
    pub fn run_death_check_statuses(&mut self, mage: &mut Mage, turn: u32) -> Effect {
        let held: Vec<StatusId> = mage.statuses.iter().map(|slot| slot.status).collect();
        let mut last = Effect::blank();

        for status_id in held {
            if !mage.is_dead() {
                break;
            }
            let status = self.catalogs.status(status_id);
            if status.mode != StatusMode::DeathCheck {
                continue;
            }
            mage.remove_status(status_id);
            last = self.run_on_destroy(&status, mage, turn);
        }

        last
    }

    /// Run a status's on-destroy actions against its (former) holder.
    ///
    /// Expiry paths carry no opponent, so opponent-side preconditions
    /// read the holder as well.
    fn run_on_destroy(&mut self, status: &Status, mage: &mut Mage, turn: u32) -> Effect {
        let mut last = Effect::blank();

        for &action_id in &status.on_destroy {
            let action = self.catalogs.action(action_id);
            if let Some(effect) = self.run_action_from(&action, mage, mage, status.id) {
                self.apply_effect(&effect, mage, turn);
                last = effect;
            }
        }

        last
    }
}
