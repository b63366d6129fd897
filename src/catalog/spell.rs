//! Spell definitions: ordered action lists for each side of a cast.

use serde::{Deserialize, Serialize};

use crate::core::School;

use super::ids::{ActionId, SpellId};

/// Immutable catalog spell.
///
/// A cast resolves in two halves: the self actions run against the
/// caster first, then the opponent actions run against the defender.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    /// Catalog id; blank until registered.
    pub id: SpellId,
    /// Display name.
    pub name: String,
    /// School tag.
    pub school: School,
    /// Actions targeting the caster.
    pub self_actions: Vec<ActionId>,
    /// Actions targeting the defender.
    pub opponent_actions: Vec<ActionId>,
}

impl Spell {
    /// Create a spell of the given school.
    #[must_use]
    pub fn new(school: School, name: impl Into<String>) -> Self {
        Self {
            school,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the caster-side action list (builder).
    #[must_use]
    pub fn with_self_actions(mut self, actions: impl IntoIterator<Item = ActionId>) -> Self {
        self.self_actions = actions.into_iter().collect();
        self
    }

    /// Set the defender-side action list (builder).
    #[must_use]
    pub fn with_opponent_actions(mut self, actions: impl IntoIterator<Item = ActionId>) -> Self {
        self.opponent_actions = actions.into_iter().collect();
        self
    }
}
