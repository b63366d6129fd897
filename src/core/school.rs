//! Magic schools and damage kinds.
//!
//! Both vocabularies are closed: the resolver dispatches on them with
//! exhaustive matches, so adding a variant is a compile-checked change.

use serde::{Deserialize, Serialize};

/// Thematic school of a mage, spell, or action.
///
/// Used by preconditions, mutation targeting, and the affinity bonus:
/// a damage action of the caster's own school lands one point harder.
/// `None` marks school-less catalog entries and never matches affinity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum School {
    #[default]
    None,
    Fire,
    Water,
    Air,
    Earth,
    Lightning,
    Ice,
    Light,
    Shadow,
}

/// How an effect's points land on the defender.
///
/// `None` marks effects without damage math (pure status or spell
/// bookkeeping); the applier skips numeric handling for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    #[default]
    None,
    /// Shields absorb first, remainder hits health.
    Classic,
    /// Straight to health, ignoring shields.
    Piercing,
    /// Shields only, never spills into health.
    ShieldBreaking,
    /// Restores health up to the cap.
    Healing,
    /// Restores shields up to the cap.
    IncreaseShields,
}

impl DamageKind {
    /// Whether this kind is absorbed by shields (and therefore subject
    /// to shield-ward mutations).
    #[must_use]
    pub fn hits_shields(self) -> bool {
        matches!(self, Self::Classic | Self::ShieldBreaking)
    }
}
