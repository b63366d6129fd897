//! The state applier: resolved effects land on mage state here.
//!
//! Clamping rules are fixed: health lives in `0..=MAX_HEALTH`, shields
//! gain up to `MAX_SHIELDS`, and only a set-shields overwrite may step
//! outside that range. Status and spell bookkeeping preserves the
//! relative order of untouched entries.

use crate::core::{DamageKind, Effect, Mage, StatusSlot, MAX_HEALTH, MAX_SHIELDS};

use super::Resolver;

impl Resolver<'_> {
    /// Apply a resolved effect to a mage.
    ///
    /// `turn` stamps newly attached statuses with their countdown seed.
    /// The damage math, the shields overwrite, and each bookkeeping
    /// field are handled independently, in that order.
    pub fn apply_effect(&mut self, effect: &Effect, mage: &mut Mage, turn: u32) {
        match effect.damage {
            DamageKind::None => {}
            DamageKind::Classic => {
                let spill = effect.points.saturating_sub(mage.shields);
                mage.shields = mage.shields.saturating_sub(effect.points);
                mage.health = mage.health.saturating_sub(spill);
            }
            DamageKind::Piercing => {
                mage.health = mage.health.saturating_sub(effect.points);
            }
            DamageKind::ShieldBreaking => {
                mage.shields = mage.shields.saturating_sub(effect.points);
            }
            DamageKind::Healing => {
                mage.health = (mage.health + effect.points).min(MAX_HEALTH);
            }
            DamageKind::IncreaseShields => {
                mage.shields = (mage.shields + effect.points).min(MAX_SHIELDS);
            }
        }

        if effect.set_shields {
            mage.shields = effect.points;
        }

        if effect.skip {
            mage.is_pass = true;
        }

        if effect.change_status {
            if !effect.add_status.is_blank() {
                let slot = StatusSlot::new(effect.add_status, turn);
                if mage.statuses.is_empty() {
                    mage.statuses.push(slot);
                } else {
                    let index = self.rng.pick(mage.statuses.len());
                    mage.statuses[index] = slot;
                }
            }
        } else if !effect.add_status.is_blank() {
            mage.add_status(effect.add_status, turn);
        }

        if !effect.burn_status.is_blank() {
            mage.remove_status(effect.burn_status);
        }

        if !effect.burn_all_statuses.is_empty() {
            mage.remove_statuses(&effect.burn_all_statuses);
        }

        if !effect.add_spell.is_blank() {
            mage.add_spell(effect.add_spell);
        }

        if !effect.burn_spell.is_blank() {
            mage.remove_spell(effect.burn_spell);
        }
    }
}
