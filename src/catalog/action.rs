//! Action definitions: precondition-gated primitive effects.
//!
//! An action is an immutable catalog entry. Interpreting one against a
//! pair of mage states either yields a pending [`Effect`] or nothing
//! (when a precondition fails).
//!
//! [`Effect`]: crate::core::Effect

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DamageKind, School};

use super::ids::{ActionId, SpellId, StatusId};

/// What an action does when its preconditions hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Roll points from the range and deal them per the damage kind.
    #[default]
    Damage,
    /// Overwrite the target's shields to the rolled points.
    SetShields,
    /// Force the target to skip the coming turn.
    SkipTurn,
    /// Attach the named status to the target.
    AddStatus,
    /// Remove the named status (or the oldest one when unnamed).
    BurnStatus,
    /// Replace a random held status with the named one.
    ChangeStatus,
    /// Remove every status the target holds.
    BurnAllStatuses,
    /// Queue the named spell on the target.
    AddSpell,
    /// Remove the named spell (or the queued head when unnamed).
    BurnSpell,
}

/// Predicate kind for an [`ActionCheck`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckKind {
    /// health > points
    HealthMore,
    /// health < points
    HealthLess,
    /// shields > points
    ShieldsMore,
    /// shields < points
    ShieldsLess,
    /// the named status is held
    HasStatus,
    /// the named status is absent
    NoStatus,
    /// the skip flag is set
    Pass,
    /// a fresh percent roll lands below `chance`
    Luck,
}

/// One precondition over a mage state.
///
/// Only the field its kind reads is meaningful; the rest stay at their
/// blank defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCheck {
    /// Which predicate to evaluate.
    pub kind: CheckKind,
    /// Threshold for the health/shields comparisons.
    pub points: u32,
    /// Target of the status presence checks.
    pub status: StatusId,
    /// Pass probability (percent) for luck checks.
    pub chance: u32,
}

impl ActionCheck {
    fn new(kind: CheckKind) -> Self {
        Self {
            kind,
            points: 0,
            status: StatusId::BLANK,
            chance: 0,
        }
    }

    /// health > points
    #[must_use]
    pub fn health_more(points: u32) -> Self {
        Self {
            points,
            ..Self::new(CheckKind::HealthMore)
        }
    }

    /// health < points
    #[must_use]
    pub fn health_less(points: u32) -> Self {
        Self {
            points,
            ..Self::new(CheckKind::HealthLess)
        }
    }

    /// shields > points
    #[must_use]
    pub fn shields_more(points: u32) -> Self {
        Self {
            points,
            ..Self::new(CheckKind::ShieldsMore)
        }
    }

    /// shields < points
    #[must_use]
    pub fn shields_less(points: u32) -> Self {
        Self {
            points,
            ..Self::new(CheckKind::ShieldsLess)
        }
    }

    /// the named status is held
    #[must_use]
    pub fn has_status(status: StatusId) -> Self {
        Self {
            status,
            ..Self::new(CheckKind::HasStatus)
        }
    }

    /// the named status is absent
    #[must_use]
    pub fn no_status(status: StatusId) -> Self {
        Self {
            status,
            ..Self::new(CheckKind::NoStatus)
        }
    }

    /// the skip flag is set
    #[must_use]
    pub fn pass() -> Self {
        Self::new(CheckKind::Pass)
    }

    /// passes with the given percent chance
    #[must_use]
    pub fn luck(chance: u32) -> Self {
        Self {
            chance,
            ..Self::new(CheckKind::Luck)
        }
    }
}

/// Immutable catalog action.
///
/// Built with the constructor plus `with_*` builders; the catalog stamps
/// the id at registration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Catalog id; blank until registered.
    pub id: ActionId,
    /// Human-readable description.
    pub description: String,
    /// What the action does.
    pub kind: ActionKind,
    /// Preconditions over the acting mage. All must pass.
    pub self_checks: SmallVec<[ActionCheck; 2]>,
    /// Preconditions over the other mage. All must pass.
    pub opponent_checks: SmallVec<[ActionCheck; 2]>,
    /// Point range the roll is drawn from; empty for point-less kinds.
    pub points: SmallVec<[u32; 3]>,
    /// Damage kind of the produced effect.
    pub damage: DamageKind,
    /// School of the produced effect; grants the affinity bonus when it
    /// matches the acting mage's school.
    pub school: School,
    /// Status payload for the status kinds.
    pub status: StatusId,
    /// Spell payload for the spell kinds.
    pub spell: SpellId,
}

impl Action {
    /// Create an action of the given kind.
    #[must_use]
    pub fn new(kind: ActionKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            ..Self::default()
        }
    }

    /// Set the point range (builder).
    #[must_use]
    pub fn with_points(mut self, points: impl IntoIterator<Item = u32>) -> Self {
        self.points = points.into_iter().collect();
        self
    }

    /// Set the damage kind (builder).
    #[must_use]
    pub fn with_damage(mut self, damage: DamageKind) -> Self {
        self.damage = damage;
        self
    }

    /// Set the school (builder).
    #[must_use]
    pub fn with_school(mut self, school: School) -> Self {
        self.school = school;
        self
    }

    /// Add a self precondition (builder).
    #[must_use]
    pub fn with_self_check(mut self, check: ActionCheck) -> Self {
        self.self_checks.push(check);
        self
    }

    /// Add an opponent precondition (builder).
    #[must_use]
    pub fn with_opponent_check(mut self, check: ActionCheck) -> Self {
        self.opponent_checks.push(check);
        self
    }

    /// Set the status payload (builder).
    #[must_use]
    pub fn with_status(mut self, status: StatusId) -> Self {
        self.status = status;
        self
    }

    /// Set the spell payload (builder).
    #[must_use]
    pub fn with_spell(mut self, spell: SpellId) -> Self {
        self.spell = spell;
        self
    }
}
