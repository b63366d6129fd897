//! The resolution engine: interpreters, status lifecycle, state
//! applier, and spell resolver.
//!
//! All entry points hang off [`Resolver`], which borrows the catalogs
//! and the injected RNG for the duration of one resolution call. The
//! orchestrator owns the sequencing across a full turn (spell self →
//! spell opponent → active ticks → turn countdown → death checks); the
//! engine only guarantees the semantics of each individual call.

mod actions;
mod applier;
mod mutations;
mod spells;
mod statuses;

use crate::catalog::Catalogs;
use crate::core::{DuelRng, RangePolicy};

/// Resolution context for one or more engine calls.
///
/// Holds the immutable catalogs and the caller-supplied RNG. Mage
/// states are passed into each call explicitly; the resolver never
/// retains them.
pub struct Resolver<'a> {
    catalogs: &'a Catalogs,
    rng: &'a mut DuelRng,
    policy: RangePolicy,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with the default (uniform) range policy.
    pub fn new(catalogs: &'a Catalogs, rng: &'a mut DuelRng) -> Self {
        Self {
            catalogs,
            rng,
            policy: RangePolicy::default(),
        }
    }

    /// Override the point-range sampling policy (builder).
    #[must_use]
    pub fn with_policy(mut self, policy: RangePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The catalogs this resolver reads.
    #[must_use]
    pub fn catalogs(&self) -> &Catalogs {
        self.catalogs
    }
}
