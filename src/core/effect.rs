//! Pending effects: the currency between interpreter, statuses, and
//! state applier.
//!
//! An `Effect` is ephemeral. The action interpreter produces one, the
//! defender's passive statuses may rewrite it in flight, and the state
//! applier consumes it. It never outlives a single resolution call.

use serde::{Deserialize, Serialize};

use crate::catalog::{SpellId, StatusId};

use super::school::{DamageKind, School};

/// A pending change to one mage, produced by interpreting an action.
///
/// The numeric payload (`points` + `damage` + `school`) and the
/// bookkeeping fields (status/spell adds and burns, skip) are
/// independent; the applier handles each populated field in turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// Damage, healing, or shield points, per `damage`.
    pub points: u32,
    /// How `points` land; `DamageKind::None` skips damage math.
    pub damage: DamageKind,
    /// School the points were rolled under, visible to mutation checks.
    pub school: School,
    /// Overwrite shields to exactly `points`, bypassing cap and floor.
    pub set_shields: bool,
    /// Status to append (or the replacement when `change_status` is set).
    pub add_status: StatusId,
    /// Status to remove (first instance).
    pub burn_status: StatusId,
    /// Replace a randomly chosen held status with `add_status`.
    pub change_status: bool,
    /// Statuses to mass-remove, order of survivors preserved.
    pub burn_all_statuses: Vec<StatusId>,
    /// Spell to append to the queue.
    pub add_spell: SpellId,
    /// Spell to remove from the queue (first occurrence).
    pub burn_spell: SpellId,
    /// Force the mage to skip the coming turn.
    pub skip: bool,
}

impl Effect {
    /// An effect that changes nothing.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// A damage-bearing effect.
    #[must_use]
    pub fn damage(points: u32, damage: DamageKind, school: School) -> Self {
        Self {
            points,
            damage,
            school,
            ..Self::default()
        }
    }

    /// A shields-overwrite effect.
    #[must_use]
    pub fn set_shields(points: u32) -> Self {
        Self {
            points,
            set_shields: true,
            ..Self::default()
        }
    }

    /// A skip-turn effect.
    #[must_use]
    pub fn skip() -> Self {
        Self {
            skip: true,
            ..Self::default()
        }
    }

    /// A status-granting effect.
    #[must_use]
    pub fn add_status(status: StatusId) -> Self {
        Self {
            add_status: status,
            ..Self::default()
        }
    }

    /// A status-removing effect.
    #[must_use]
    pub fn burn_status(status: StatusId) -> Self {
        Self {
            burn_status: status,
            ..Self::default()
        }
    }

    /// Whether the effect carries any status bookkeeping at all.
    #[must_use]
    pub fn touches_statuses(&self) -> bool {
        !self.add_status.is_blank()
            || !self.burn_status.is_blank()
            || self.change_status
            || !self.burn_all_statuses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_effect() {
        let effect = Effect::blank();
        assert_eq!(effect.points, 0);
        assert_eq!(effect.damage, DamageKind::None);
        assert!(!effect.touches_statuses());
    }

    #[test]
    fn test_damage_constructor() {
        let effect = Effect::damage(3, DamageKind::Classic, School::Air);
        assert_eq!(effect.points, 3);
        assert_eq!(effect.damage, DamageKind::Classic);
        assert_eq!(effect.school, School::Air);
        assert!(!effect.set_shields);
    }

    #[test]
    fn test_touches_statuses() {
        assert!(Effect::add_status(StatusId::new(1)).touches_statuses());
        assert!(Effect::burn_status(StatusId::new(1)).touches_statuses());

        let mass_burn = Effect {
            burn_all_statuses: vec![StatusId::new(2)],
            ..Effect::default()
        };
        assert!(mass_burn.touches_statuses());

        assert!(!Effect::skip().touches_statuses());
    }

    #[test]
    fn test_effect_serde_roundtrip() {
        let effect = Effect {
            points: 4,
            damage: DamageKind::Piercing,
            school: School::Ice,
            burn_all_statuses: vec![StatusId::new(1), StatusId::new(3)],
            ..Effect::default()
        };

        let json = serde_json::to_string(&effect).unwrap();
        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, back);
    }
}
