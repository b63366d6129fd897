//! Status definitions: timed modifiers attached to a mage.
//!
//! A status instance lives on a mage as a [`StatusSlot`] with a turn
//! countdown. Its catalog definition decides what it does while held
//! and when it goes away.
//!
//! [`StatusSlot`]: crate::core::StatusSlot

use serde::{Deserialize, Serialize};

use super::ids::{ActionId, MutationId, StatusId};

/// When a held status participates in resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusMode {
    /// Rewrites incoming effects through its mutation list; never
    /// touches the holder directly.
    #[default]
    Passive,
    /// Runs its action list against the holder once per turn, before
    /// the spell resolves.
    Active,
    /// Watches for lethal health; fires its on-destroy actions once
    /// when the holder hits 0.
    DeathCheck,
}

/// Immutable catalog status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Catalog id; blank until registered.
    pub id: StatusId,
    /// Display name.
    pub name: String,
    /// When the status participates in resolution.
    pub mode: StatusMode,
    /// Nominal lifetime in turns.
    pub turns: u32,
    /// Actions run each turn while held (active mode).
    pub actions: Vec<ActionId>,
    /// Mutations applied to in-flight effects (passive mode).
    pub mutations: Vec<MutationId>,
    /// Actions run once when the status expires or a death check fires.
    pub on_destroy: Vec<ActionId>,
}

impl Status {
    /// Create a status of the given mode and lifetime.
    #[must_use]
    pub fn new(mode: StatusMode, name: impl Into<String>, turns: u32) -> Self {
        Self {
            mode,
            name: name.into(),
            turns,
            ..Self::default()
        }
    }

    /// Set the per-turn action list (builder).
    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = ActionId>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    /// Set the passive mutation list (builder).
    #[must_use]
    pub fn with_mutations(mut self, mutations: impl IntoIterator<Item = MutationId>) -> Self {
        self.mutations = mutations.into_iter().collect();
        self
    }

    /// Set the on-destroy action list (builder).
    #[must_use]
    pub fn with_on_destroy(mut self, actions: impl IntoIterator<Item = ActionId>) -> Self {
        self.on_destroy = actions.into_iter().collect();
        self
    }
}
