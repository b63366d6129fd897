//! # mage-duel
//!
//! A deterministic rules engine for turn-based duels between two mages.
//!
//! ## Design Principles
//!
//! 1. **Closed vocabularies**: Action kinds, mutation kinds, check
//!    kinds, and status modes are tagged enums dispatched with
//!    exhaustive matches. Adding a kind is a compile-checked change.
//!
//! 2. **Blank on miss**: Catalog lookups never fail. An unknown id
//!    resolves to an inert blank record, so resolution always completes
//!    and returns a well-formed state.
//!
//! 3. **Injected randomness**: Luck checks, ranged rolls, and random
//!    status replacement draw from a caller-supplied seeded RNG. The
//!    same seed replays the same duel.
//!
//! ## Architecture
//!
//! The resolution pipeline for one cast:
//!
//! ```text
//! Spell -> Action interpreter -> passive statuses (Mutations) -> State applier
//! ```
//!
//! The status lifecycle runs separately once per turn: active statuses
//! tick, countdowns decrease (expiry fires on-destroy actions), and
//! death-check statuses watch for lethal health. Sequencing across a
//! turn belongs to the caller; each entry point only guarantees its own
//! semantics.
//!
//! ## Modules
//!
//! - `core`: Mage state, effects, schools, RNG port
//! - `catalog`: Action/Mutation/Status/Spell definitions and registries
//! - `engine`: Interpreters, status lifecycle, applier, spell resolver

pub mod catalog;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    DamageKind, DuelRng, DuelRngState, Effect, Mage, RangePolicy, School, StatusSlot, MAX_HEALTH,
    MAX_SHIELDS,
};

pub use crate::catalog::{
    Action, ActionCheck, ActionId, ActionKind, Catalog, CatalogEntry, Catalogs, CheckKind,
    Mutation, MutationCheck, MutationCheckKind, MutationId, MutationKind, Spell, SpellId, Status,
    StatusId, StatusMode,
};

pub use crate::engine::Resolver;
