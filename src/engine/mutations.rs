//! The mutation interpreter: passive rewrites of pending effects.
//!
//! Mutations form a pipeline: each one observes the output of the
//! previous one, so ordering inside a status's mutation list (and
//! across a mage's passive statuses) is semantically load-bearing.

use crate::catalog::{Mutation, MutationCheck, MutationCheckKind, MutationKind, StatusId};
use crate::core::{DamageKind, Effect, Mage};

use super::Resolver;

impl Resolver<'_> {
    /// Apply one mutation to a pending effect.
    ///
    /// `holder` is the mage whose passive status contributed the
    /// mutation (the effect's eventual target); its shields gate the
    /// shield-ward and lethal-cap rewrites. No-op when any check fails.
    pub fn run_mutation(&self, mutation: &Mutation, effect: &mut Effect, holder: &Mage) {
        if !mutation.checks.iter().all(|check| check_passes(check, effect)) {
            return;
        }

        match mutation.kind {
            MutationKind::BlockAllStatuses => {
                effect.add_status = StatusId::BLANK;
                effect.burn_status = StatusId::BLANK;
                effect.change_status = false;
            }
            MutationKind::DecreaseDamage => {
                effect.points = effect.points.saturating_sub(mutation.points);
            }
            MutationKind::ChangeDamageKind => {
                effect.damage = mutation.damage;
            }
            MutationKind::CapLethalDamage => match effect.damage {
                // Leave at most one net health point on the table:
                // piercing collapses to 1, classic to shields + 1.
                DamageKind::Piercing => effect.points = effect.points.min(1),
                DamageKind::Classic => effect.points = effect.points.min(holder.shields + 1),
                _ => {}
            },
            MutationKind::IncreaseDamage => {
                effect.points += mutation.points;
            }
            MutationKind::SetDamage => {
                effect.points = mutation.points;
            }
            MutationKind::BlockStatus => {
                if effect.add_status == mutation.status {
                    effect.add_status = StatusId::BLANK;
                }
            }
            MutationKind::BlockShieldDamage => {
                if holder.shields > 0 && effect.damage.hits_shields() {
                    effect.points = 0;
                }
            }
        }
    }
}

fn check_passes(check: &MutationCheck, effect: &Effect) -> bool {
    match check.kind {
        MutationCheckKind::DamageKindIs => effect.damage == check.damage,
        MutationCheckKind::DamagePointsMore => effect.points > check.points,
        MutationCheckKind::SchoolIs => effect.school == check.school,
    }
}
