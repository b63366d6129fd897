//! The spell resolver: a cast resolves in two halves.
//!
//! The self half runs first and leaves the spell queued, so the
//! caster's own buffs land before the opponent half is interpreted.
//! The opponent half routes every effect through the defender's
//! passive statuses, then consumes the spell from the caster's queue.

use crate::core::Mage;

use super::Resolver;

impl Resolver<'_> {
    /// Resolve the caster-side half of the caster's next queued spell.
    ///
    /// Peeks (does not dequeue) the front of the queue. Each self
    /// action is interpreted, rewritten by the caster's own passive
    /// statuses, and applied to the caster. Does nothing when the
    /// queue is empty.
    pub fn run_next_spell_self(&mut self, caster: &mut Mage, opponent: &Mage, turn: u32) {
        let Some(spell_id) = caster.next_spell() else {
            return;
        };
        let spell = self.catalogs.spell(spell_id);

        for &action_id in &spell.self_actions {
            let action = self.catalogs.action(action_id);
            if let Some(effect) = self.run_action(&action, caster, opponent) {
                let effect = self.run_passive_statuses(caster, effect);
                self.apply_effect(&effect, caster, turn);
            }
        }
    }

    /// Resolve the opponent-side half of the caster's next queued
    /// spell, then consume the spell.
    ///
    /// Self checks keep reading the caster and opponent checks the
    /// defender. Each effect passes through the defender's passive
    /// statuses before landing on the defender. The spell leaves the
    /// caster's queue only after every opponent action has resolved.
    pub fn run_next_spell_opponent(&mut self, caster: &mut Mage, opponent: &mut Mage, turn: u32) {
        let Some(spell_id) = caster.next_spell() else {
            return;
        };
        let spell = self.catalogs.spell(spell_id);

        for &action_id in &spell.opponent_actions {
            let action = self.catalogs.action(action_id);
            if let Some(effect) = self.run_action(&action, caster, opponent) {
                let effect = self.run_passive_statuses(opponent, effect);
                self.apply_effect(&effect, opponent, turn);
            }
        }

        caster.remove_spell(spell_id);
    }
}
