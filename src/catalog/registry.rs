//! Append-only catalogs with blank-on-miss lookup.
//!
//! Every definition kind (actions, mutations, statuses, spells) lives
//! in a [`Catalog`]: entries are registered once, assigned the next id
//! (starting at 1), and never change afterwards. Lookups return an
//! `Option` at the boundary; `get` normalizes a miss to the blank
//! record so resolver call sites need no null handling. An unknown id
//! simply does nothing.

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::ids::{ActionId, MutationId, SpellId, StatusId};
use super::mutation::Mutation;
use super::spell::Spell;
use super::status::Status;

/// A definition type storable in a [`Catalog`].
pub trait CatalogEntry: Clone + Default {
    /// The typed id keying this entry kind.
    type Id: Copy + Eq + From<u32> + Into<u32>;

    /// Stamp the catalog-assigned id onto the entry.
    fn stamp(&mut self, id: Self::Id);
}

impl CatalogEntry for Action {
    type Id = ActionId;

    fn stamp(&mut self, id: ActionId) {
        self.id = id;
    }
}

impl CatalogEntry for Mutation {
    type Id = MutationId;

    fn stamp(&mut self, id: MutationId) {
        self.id = id;
    }
}

impl CatalogEntry for Status {
    type Id = StatusId;

    fn stamp(&mut self, id: StatusId) {
        self.id = id;
    }
}

impl CatalogEntry for Spell {
    type Id = SpellId;

    fn stamp(&mut self, id: SpellId) {
        self.id = id;
    }
}

/// Append-only id-keyed storage for one definition kind.
///
/// Entry `n` holds id `n + 1`; id 0 is the blank record.
///
/// ## Example
///
/// ```
/// use mage_duel::catalog::{Action, ActionId, ActionKind, Catalog};
///
/// let mut catalog: Catalog<Action> = Catalog::new();
///
/// let bolt = catalog.add(Action::new(ActionKind::Damage, "Bolt").with_points([3]));
/// assert_eq!(bolt, ActionId::new(1));
///
/// // unknown ids resolve to the inert blank record
/// assert!(catalog.get(ActionId::new(99)).id.is_blank());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog<T: CatalogEntry> {
    entries: Vec<T>,
}

impl<T: CatalogEntry> Catalog<T> {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register an entry, assigning and returning the next id.
    pub fn add(&mut self, mut entry: T) -> T::Id {
        let id = T::Id::from(self.entries.len() as u32 + 1);
        entry.stamp(id);
        self.entries.push(entry);
        id
    }

    /// Look up an entry, `None` on miss.
    #[must_use]
    pub fn find(&self, id: T::Id) -> Option<&T> {
        let raw: u32 = id.into();
        if raw == 0 {
            return None;
        }
        self.entries.get(raw as usize - 1)
    }

    /// Look up an entry, falling back to the blank record on miss.
    #[must_use]
    pub fn get(&self, id: T::Id) -> T {
        self.find(id).cloned().unwrap_or_default()
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the registered entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

/// The four catalogs a duel resolves against.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalogs {
    /// Registered actions.
    pub actions: Catalog<Action>,
    /// Registered mutations.
    pub mutations: Catalog<Mutation>,
    /// Registered statuses.
    pub statuses: Catalog<Status>,
    /// Registered spells.
    pub spells: Catalog<Spell>,
}

impl Catalogs {
    /// Create an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Action by id, blank on miss.
    #[must_use]
    pub fn action(&self, id: ActionId) -> Action {
        self.actions.get(id)
    }

    /// Mutation by id, blank on miss.
    #[must_use]
    pub fn mutation(&self, id: MutationId) -> Mutation {
        self.mutations.get(id)
    }

    /// Status by id, blank on miss.
    #[must_use]
    pub fn status(&self, id: StatusId) -> Status {
        self.statuses.get(id)
    }

    /// Spell by id, blank on miss.
    #[must_use]
    pub fn spell(&self, id: SpellId) -> Spell {
        self.spells.get(id)
    }
}
