//! Mutation definitions: precondition-gated rewrites of in-flight
//! effects.
//!
//! Mutations never touch mage state directly; they only rewrite a
//! pending [`Effect`] before the applier sees it. Passive statuses list
//! the mutations they contribute.
//!
//! [`Effect`]: crate::core::Effect

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DamageKind, School};

use super::ids::{MutationId, StatusId};

/// How a mutation rewrites a pending effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationKind {
    /// Strip every status field off the effect.
    #[default]
    BlockAllStatuses,
    /// Subtract `points` from the effect's points (saturating).
    DecreaseDamage,
    /// Overwrite the effect's damage kind, leaving points alone.
    ChangeDamageKind,
    /// Clamp the effect so it can take at most one net health point.
    CapLethalDamage,
    /// Add `points` to the effect's points.
    IncreaseDamage,
    /// Overwrite the effect's points (0 is a full block).
    SetDamage,
    /// Clear the add-status field when it names this mutation's status.
    BlockStatus,
    /// Zero shield-bound damage while the holder still has shields up.
    BlockShieldDamage,
}

/// Predicate kind for a [`MutationCheck`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationCheckKind {
    /// effect damage kind equals `damage`
    DamageKindIs,
    /// effect points > `points`
    DamagePointsMore,
    /// effect school equals `school`
    SchoolIs,
}

/// One precondition over a pending effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationCheck {
    /// Which predicate to evaluate.
    pub kind: MutationCheckKind,
    /// Expected damage kind for [`MutationCheckKind::DamageKindIs`].
    pub damage: DamageKind,
    /// Expected school for [`MutationCheckKind::SchoolIs`].
    pub school: School,
    /// Threshold for [`MutationCheckKind::DamagePointsMore`].
    pub points: u32,
}

impl MutationCheck {
    /// effect damage kind equals the given kind
    #[must_use]
    pub fn damage_kind_is(damage: DamageKind) -> Self {
        Self {
            kind: MutationCheckKind::DamageKindIs,
            damage,
            school: School::None,
            points: 0,
        }
    }

    /// effect points exceed the given threshold
    #[must_use]
    pub fn points_more(points: u32) -> Self {
        Self {
            kind: MutationCheckKind::DamagePointsMore,
            damage: DamageKind::None,
            school: School::None,
            points,
        }
    }

    /// effect school equals the given school
    #[must_use]
    pub fn school_is(school: School) -> Self {
        Self {
            kind: MutationCheckKind::SchoolIs,
            damage: DamageKind::None,
            school,
            points: 0,
        }
    }
}

/// Immutable catalog mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutation {
    /// Catalog id; blank until registered.
    pub id: MutationId,
    /// Human-readable description.
    pub description: String,
    /// How the rewrite works.
    pub kind: MutationKind,
    /// Preconditions over the pending effect. All must pass.
    pub checks: SmallVec<[MutationCheck; 2]>,
    /// Replacement damage kind for [`MutationKind::ChangeDamageKind`].
    pub damage: DamageKind,
    /// Delta or replacement points, per the kind.
    pub points: u32,
    /// Status target for [`MutationKind::BlockStatus`].
    pub status: StatusId,
}

impl Mutation {
    /// Create a mutation of the given kind.
    #[must_use]
    pub fn new(kind: MutationKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            ..Self::default()
        }
    }

    /// Add a precondition (builder).
    #[must_use]
    pub fn with_check(mut self, check: MutationCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// Set the replacement damage kind (builder).
    #[must_use]
    pub fn with_damage(mut self, damage: DamageKind) -> Self {
        self.damage = damage;
        self
    }

    /// Set the points payload (builder).
    #[must_use]
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    /// Set the status target (builder).
    #[must_use]
    pub fn with_status(mut self, status: StatusId) -> Self {
        self.status = status;
        self
    }
}
