//! The action interpreter: catalog actions in, pending effects out.
//!
//! Interpretation is read-only with respect to mage state. Every
//! precondition is evaluated first (all must pass); only then is the
//! effect assembled. Side-effect kinds (status and spell bookkeeping)
//! resolve their blank-id fallbacks here, against the acting mage, so
//! the applier never has to guess.

use crate::catalog::{Action, ActionCheck, ActionKind, CheckKind, StatusId};
use crate::core::{Effect, Mage, School};

use super::Resolver;

impl Resolver<'_> {
    /// Interpret an action against an acting mage and its opponent.
    ///
    /// Returns `None` when any precondition fails. Self checks read the
    /// actor, opponent checks read the opponent; luck checks consume a
    /// draw from the duel RNG.
    pub fn run_action(&mut self, action: &Action, actor: &Mage, opponent: &Mage) -> Option<Effect> {
        self.run_action_from(action, actor, opponent, StatusId::BLANK)
    }

    /// Interpret an action executed from within a held status.
    ///
    /// `source` is the status whose action list is running; a mass-burn
    /// produced here spares that status so it cannot purge itself.
    pub(crate) fn run_action_from(
        &mut self,
        action: &Action,
        actor: &Mage,
        opponent: &Mage,
        source: StatusId,
    ) -> Option<Effect> {
        if !self.checks_pass(&action.self_checks, actor) {
            return None;
        }
        if !self.checks_pass(&action.opponent_checks, opponent) {
            return None;
        }

        let effect = match action.kind {
            ActionKind::Damage => {
                let mut points = self.policy.pick(&action.points, self.rng);
                if action.school != School::None && action.school == actor.school {
                    points += 1;
                }
                Effect::damage(points, action.damage, action.school)
            }
            ActionKind::SetShields => Effect::set_shields(self.policy.pick(&action.points, self.rng)),
            ActionKind::SkipTurn => Effect::skip(),
            ActionKind::AddStatus => Effect::add_status(action.status),
            ActionKind::BurnStatus => {
                let target = if action.status.is_blank() {
                    actor
                        .statuses
                        .first()
                        .map(|slot| slot.status)
                        .unwrap_or(StatusId::BLANK)
                } else {
                    action.status
                };
                Effect::burn_status(target)
            }
            ActionKind::ChangeStatus => Effect {
                change_status: true,
                add_status: action.status,
                ..Effect::default()
            },
            ActionKind::BurnAllStatuses => Effect {
                burn_all_statuses: actor
                    .statuses
                    .iter()
                    .map(|slot| slot.status)
                    .filter(|&status| status != source)
                    .collect(),
                ..Effect::default()
            },
            ActionKind::AddSpell => Effect {
                add_spell: action.spell,
                ..Effect::default()
            },
            ActionKind::BurnSpell => Effect {
                burn_spell: if action.spell.is_blank() {
                    actor.next_spell().unwrap_or_default()
                } else {
                    action.spell
                },
                ..Effect::default()
            },
        };

        Some(effect)
    }

    fn checks_pass(&mut self, checks: &[ActionCheck], mage: &Mage) -> bool {
        checks.iter().all(|check| self.check_passes(check, mage))
    }

    fn check_passes(&mut self, check: &ActionCheck, mage: &Mage) -> bool {
        match check.kind {
            CheckKind::HealthMore => mage.health > check.points,
            CheckKind::HealthLess => mage.health < check.points,
            CheckKind::ShieldsMore => mage.shields > check.points,
            CheckKind::ShieldsLess => mage.shields < check.points,
            CheckKind::HasStatus => mage.has_status(check.status),
            CheckKind::NoStatus => !mage.has_status(check.status),
            CheckKind::Pass => mage.is_pass,
            CheckKind::Luck => self.rng.percent() < check.chance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalogs, SpellId};
    use crate::core::{DamageKind, DuelRng, School};

    fn resolver_fixture() -> (Catalogs, DuelRng) {
        (Catalogs::new(), DuelRng::new(42))
    }

    fn fire_mage() -> Mage {
        let mut mage = Mage::new(1, "caster", School::Fire);
        mage.health = 10;
        mage.shields = 10;
        mage
    }

    #[test]
    fn test_unconditional_damage() {
        let (catalogs, mut rng) = resolver_fixture();
        let mut resolver = Resolver::new(&catalogs, &mut rng);

        let action = Action::new(ActionKind::Damage, "Deal 2 piercing")
            .with_points([2])
            .with_damage(DamageKind::Piercing);

        let effect = resolver
            .run_action(&action, &fire_mage(), &fire_mage())
            .unwrap();
        assert_eq!(effect.points, 2);
        assert_eq!(effect.damage, DamageKind::Piercing);
    }

    #[test]
    fn test_school_affinity_bonus() {
        let (catalogs, mut rng) = resolver_fixture();
        let mut resolver = Resolver::new(&catalogs, &mut rng);

        let action = Action::new(ActionKind::Damage, "Deal 2 classic air")
            .with_points([2])
            .with_damage(DamageKind::Classic)
            .with_school(School::Air);

        let mut air_caster = fire_mage();
        air_caster.school = School::Air;

        let boosted = resolver
            .run_action(&action, &air_caster, &fire_mage())
            .unwrap();
        assert_eq!(boosted.points, 3);

        let plain = resolver
            .run_action(&action, &fire_mage(), &fire_mage())
            .unwrap();
        assert_eq!(plain.points, 2);
    }

    #[test]
    fn test_no_affinity_for_schoolless_actions() {
        let (catalogs, mut rng) = resolver_fixture();
        let mut resolver = Resolver::new(&catalogs, &mut rng);

        let action = Action::new(ActionKind::Damage, "Deal 9 classic")
            .with_points([9])
            .with_damage(DamageKind::Classic);

        let effect = resolver
            .run_action(&action, &fire_mage(), &fire_mage())
            .unwrap();
        assert_eq!(effect.points, 9);
    }

    #[test]
    fn test_set_shields_takes_no_affinity() {
        let (catalogs, mut rng) = resolver_fixture();
        let mut resolver = Resolver::new(&catalogs, &mut rng);

        let action = Action::new(ActionKind::SetShields, "Break all shields")
            .with_points([0])
            .with_school(School::Air);

        let mut air_caster = fire_mage();
        air_caster.school = School::Air;

        let effect = resolver
            .run_action(&action, &air_caster, &fire_mage())
            .unwrap();
        assert!(effect.set_shields);
        assert_eq!(effect.points, 0);
    }

    #[test]
    fn test_failing_self_check_yields_nothing() {
        let (catalogs, mut rng) = resolver_fixture();
        let mut resolver = Resolver::new(&catalogs, &mut rng);

        let action = Action::new(ActionKind::Damage, "Heal if dead")
            .with_points([1])
            .with_damage(DamageKind::Healing)
            .with_self_check(ActionCheck::health_less(1));

        assert!(resolver
            .run_action(&action, &fire_mage(), &fire_mage())
            .is_none());

        let mut dead = fire_mage();
        dead.health = 0;
        assert!(resolver.run_action(&action, &dead, &fire_mage()).is_some());
    }

    #[test]
    fn test_opponent_checks_read_the_opponent() {
        let (catalogs, mut rng) = resolver_fixture();
        let mut resolver = Resolver::new(&catalogs, &mut rng);

        let marker = StatusId::new(4);
        let action = Action::new(ActionKind::Damage, "Deal 3 if marked")
            .with_points([3])
            .with_damage(DamageKind::Classic)
            .with_opponent_check(ActionCheck::has_status(marker));

        let mut marked = fire_mage();
        marked.add_status(marker, 2);

        assert!(resolver
            .run_action(&action, &fire_mage(), &marked)
            .is_some());
        assert!(resolver
            .run_action(&action, &fire_mage(), &fire_mage())
            .is_none());
    }

    #[test]
    fn test_health_threshold_is_strict() {
        let (catalogs, mut rng) = resolver_fixture();
        let mut resolver = Resolver::new(&catalogs, &mut rng);

        let action = Action::new(ActionKind::Damage, "Deal 1 if health > 6")
            .with_points([1])
            .with_damage(DamageKind::Piercing)
            .with_self_check(ActionCheck::health_more(6));

        let mut at_threshold = fire_mage();
        at_threshold.health = 6;
        assert!(resolver
            .run_action(&action, &at_threshold, &fire_mage())
            .is_none());

        let mut above = fire_mage();
        above.health = 7;
        assert!(resolver.run_action(&action, &above, &fire_mage()).is_some());
    }

    #[test]
    fn test_pass_check() {
        let (catalogs, mut rng) = resolver_fixture();
        let mut resolver = Resolver::new(&catalogs, &mut rng);

        let action = Action::new(ActionKind::Damage, "Punish skipping")
            .with_points([1])
            .with_damage(DamageKind::Piercing)
            .with_self_check(ActionCheck::pass());

        assert!(resolver
            .run_action(&action, &fire_mage(), &fire_mage())
            .is_none());

        let mut skipping = fire_mage();
        skipping.is_pass = true;
        assert!(resolver
            .run_action(&action, &skipping, &fire_mage())
            .is_some());
    }

    #[test]
    fn test_luck_check_extremes() {
        let (catalogs, mut rng) = resolver_fixture();
        let mut resolver = Resolver::new(&catalogs, &mut rng);

        let never = Action::new(ActionKind::SkipTurn, "0% skip")
            .with_self_check(ActionCheck::luck(0));
        let always = Action::new(ActionKind::SkipTurn, "100% skip")
            .with_self_check(ActionCheck::luck(100));

        for _ in 0..50 {
            assert!(resolver
                .run_action(&never, &fire_mage(), &fire_mage())
                .is_none());
            assert!(resolver
                .run_action(&always, &fire_mage(), &fire_mage())
                .is_some());
        }
    }

    #[test]
    fn test_luck_check_eventually_passes() {
        let (catalogs, mut rng) = resolver_fixture();
        let mut resolver = Resolver::new(&catalogs, &mut rng);

        let action = Action::new(ActionKind::SkipTurn, "30% skip")
            .with_self_check(ActionCheck::luck(30));

        let fired = (0..100)
            .any(|_| resolver.run_action(&action, &fire_mage(), &fire_mage()).is_some());
        assert!(fired);
    }

    #[test]
    fn test_burn_spell_blank_falls_back_to_queue_head() {
        let (catalogs, mut rng) = resolver_fixture();
        let mut resolver = Resolver::new(&catalogs, &mut rng);

        let action = Action::new(ActionKind::BurnSpell, "Burn a spell");

        let mut caster = fire_mage();
        caster.add_spell(SpellId::new(6));
        caster.add_spell(SpellId::new(9));

        let effect = resolver.run_action(&action, &caster, &fire_mage()).unwrap();
        assert_eq!(effect.burn_spell, SpellId::new(6));

        let empty_handed = resolver
            .run_action(&action, &fire_mage(), &fire_mage())
            .unwrap();
        assert!(empty_handed.burn_spell.is_blank());
    }

    #[test]
    fn test_burn_all_spares_the_source_status() {
        let (catalogs, mut rng) = resolver_fixture();
        let mut resolver = Resolver::new(&catalogs, &mut rng);

        let action = Action::new(ActionKind::BurnAllStatuses, "Purge");

        let mut holder = fire_mage();
        holder.add_status(StatusId::new(1), 4);
        holder.add_status(StatusId::new(2), 3);
        holder.add_status(StatusId::new(3), 2);

        let effect = resolver
            .run_action_from(&action, &holder, &fire_mage(), StatusId::new(1))
            .unwrap();
        assert_eq!(
            effect.burn_all_statuses,
            vec![StatusId::new(2), StatusId::new(3)]
        );
    }
}
