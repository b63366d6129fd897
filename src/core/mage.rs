//! Mage state: the per-actor record the resolver transforms.
//!
//! A `Mage` is a plain value: the orchestrator owns it, hands it to the
//! resolver for the duration of one call, and keeps whatever comes back.
//! Nothing here is persisted by the engine itself.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{SpellId, StatusId};

use super::school::School;

/// Health cap for every mage.
pub const MAX_HEALTH: u32 = 12;

/// Shield cap for ordinary shield gains. A set-shields effect may
/// overwrite past this.
pub const MAX_SHIELDS: u32 = 20;

/// One held status instance: which status, and how many turns remain.
///
/// Keeping the id and its counter in one slot means removals can never
/// desynchronize them; every list operation moves both together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSlot {
    /// The catalog status this slot instantiates.
    pub status: StatusId,
    /// Remaining turns; the slot expires when this reaches 0.
    pub turns: u32,
}

impl StatusSlot {
    /// Create a new slot.
    #[must_use]
    pub const fn new(status: StatusId, turns: u32) -> Self {
        Self { status, turns }
    }
}

/// Full state of one duelist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mage {
    /// Caller-assigned identity; opaque to the resolver.
    pub id: u32,
    /// Display name; opaque to the resolver.
    pub name: String,
    /// Race tag; opaque to the resolver.
    pub race: u8,
    /// The mage's own school, matched against action schools for the
    /// affinity bonus.
    pub school: School,
    /// Current health in `0..=MAX_HEALTH`.
    pub health: u32,
    /// Current shields, normally in `0..=MAX_SHIELDS`.
    pub shields: u32,
    /// Queued spells, front of the queue first.
    pub spells: SmallVec<[SpellId; 8]>,
    /// Held status instances in application order.
    pub statuses: SmallVec<[StatusSlot; 8]>,
    /// Set when the mage must skip the coming turn.
    pub is_pass: bool,
}

impl Mage {
    /// Create a mage at full health with no shields, spells, or statuses.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, school: School) -> Self {
        Self {
            id,
            name: name.into(),
            race: 0,
            school,
            health: MAX_HEALTH,
            shields: 0,
            spells: SmallVec::new(),
            statuses: SmallVec::new(),
            is_pass: false,
        }
    }

    /// Whether the mage currently holds the given status.
    #[must_use]
    pub fn has_status(&self, status: StatusId) -> bool {
        self.statuses.iter().any(|slot| slot.status == status)
    }

    /// Append a status instance with the given countdown.
    pub fn add_status(&mut self, status: StatusId, turns: u32) {
        self.statuses.push(StatusSlot::new(status, turns));
    }

    /// Remove the first instance of a status, keeping survivor order.
    ///
    /// Returns whether an instance was removed.
    pub fn remove_status(&mut self, status: StatusId) -> bool {
        match self.statuses.iter().position(|slot| slot.status == status) {
            Some(index) => {
                self.statuses.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every instance of the listed statuses, keeping survivor
    /// order.
    pub fn remove_statuses(&mut self, statuses: &[StatusId]) {
        self.statuses.retain(|slot| !statuses.contains(&slot.status));
    }

    /// The first queued spell, if any.
    #[must_use]
    pub fn next_spell(&self) -> Option<SpellId> {
        self.spells.first().copied()
    }

    /// Append a spell to the back of the queue.
    pub fn add_spell(&mut self, spell: SpellId) {
        self.spells.push(spell);
    }

    /// Remove the first occurrence of a spell, keeping queue order.
    ///
    /// Returns whether an occurrence was removed.
    pub fn remove_spell(&mut self, spell: SpellId) -> bool {
        match self.spells.iter().position(|&held| held == spell) {
            Some(index) => {
                self.spells.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether the mage is at lethal health.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}
