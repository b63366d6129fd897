//! Property tests for the clamping and compaction laws.

use proptest::prelude::*;

use mage_duel::{
    Catalogs, DamageKind, DuelRng, Effect, Mage, Resolver, School, StatusId, MAX_HEALTH,
    MAX_SHIELDS,
};

fn mage(health: u32, shields: u32) -> Mage {
    let mut mage = Mage::new(1, "prop", School::Fire);
    mage.health = health;
    mage.shields = shields;
    mage
}

fn apply(effect: &Effect, target: &mut Mage) {
    let catalogs = Catalogs::new();
    let mut rng = DuelRng::new(0);
    let mut resolver = Resolver::new(&catalogs, &mut rng);
    resolver.apply_effect(effect, target, 1);
}

proptest! {
    /// Classic damage conserves points across shields and health until
    /// the health floor absorbs the rest.
    #[test]
    fn classic_damage_conserves_points(
        health in 0u32..=MAX_HEALTH,
        shields in 0u32..=MAX_SHIELDS,
        points in 0u32..=40,
    ) {
        let mut target = mage(health, shields);
        apply(&Effect::damage(points, DamageKind::Classic, School::None), &mut target);

        let absorbed = (health + shields) - (target.health + target.shields);
        prop_assert_eq!(absorbed, points.min(shields + health));
        // shields always drain before health does
        prop_assert!(target.shields == 0 || target.health == health);
    }

    /// Piercing damage never touches shields.
    #[test]
    fn piercing_leaves_shields_alone(
        health in 0u32..=MAX_HEALTH,
        shields in 0u32..=MAX_SHIELDS,
        points in 0u32..=40,
    ) {
        let mut target = mage(health, shields);
        apply(&Effect::damage(points, DamageKind::Piercing, School::None), &mut target);

        prop_assert_eq!(target.shields, shields);
        prop_assert_eq!(target.health, health.saturating_sub(points));
    }

    /// Shield-breaking damage never spills into health.
    #[test]
    fn shield_breaking_never_spills(
        health in 0u32..=MAX_HEALTH,
        shields in 0u32..=MAX_SHIELDS,
        points in 0u32..=40,
    ) {
        let mut target = mage(health, shields);
        apply(&Effect::damage(points, DamageKind::ShieldBreaking, School::None), &mut target);

        prop_assert_eq!(target.health, health);
        prop_assert_eq!(target.shields, shields.saturating_sub(points));
    }

    /// Healing is exactly min(cap, health + points).
    #[test]
    fn healing_caps_at_max_health(
        health in 0u32..=MAX_HEALTH,
        points in 0u32..=40,
    ) {
        let mut target = mage(health, 0);
        apply(&Effect::damage(points, DamageKind::Healing, School::None), &mut target);

        prop_assert_eq!(target.health, (health + points).min(MAX_HEALTH));
    }

    /// Shield gain is exactly min(cap, shields + points).
    #[test]
    fn shield_gain_caps_at_max_shields(
        shields in 0u32..=MAX_SHIELDS,
        points in 0u32..=40,
    ) {
        let mut target = mage(MAX_HEALTH, shields);
        apply(&Effect::damage(points, DamageKind::IncreaseShields, School::None), &mut target);

        prop_assert_eq!(target.shields, (shields + points).min(MAX_SHIELDS));
    }

    /// A set-shields overwrite ignores both the cap and whatever was
    /// there before; the last overwrite wins.
    #[test]
    fn set_shields_overwrites_absolutely(
        shields in 0u32..=MAX_SHIELDS,
        first in 0u32..=40,
        second in 0u32..=40,
    ) {
        let mut target = mage(MAX_HEALTH, shields);
        apply(&Effect::set_shields(first), &mut target);
        apply(&Effect::set_shields(second), &mut target);

        prop_assert_eq!(target.shields, second);
    }

    /// Burning one status preserves the relative order of the rest and
    /// keeps ids paired with their counters.
    #[test]
    fn burn_preserves_survivor_order(
        ids in proptest::collection::vec(1u32..=20, 1..8),
        victim_index in 0usize..8,
    ) {
        prop_assume!(victim_index < ids.len());

        let mut target = mage(MAX_HEALTH, 0);
        for (i, &id) in ids.iter().enumerate() {
            target.add_status(StatusId::new(id), i as u32 + 1);
        }
        let victim = StatusId::new(ids[victim_index]);

        apply(&Effect::burn_status(victim), &mut target);

        prop_assert_eq!(target.statuses.len(), ids.len() - 1);
        // the survivors are the original sequence minus the first match
        let first_match = ids.iter().position(|&id| StatusId::new(id) == victim).unwrap();
        let expected: Vec<(u32, u32)> = ids
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != first_match)
            .map(|(i, &id)| (id, i as u32 + 1))
            .collect();
        let actual: Vec<(u32, u32)> = target
            .statuses
            .iter()
            .map(|slot| (slot.status.raw(), slot.turns))
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
