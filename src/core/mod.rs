//! Core value types: mage state, effects, schools, and the RNG port.

pub mod effect;
pub mod mage;
pub mod rng;
pub mod school;

pub use effect::Effect;
pub use mage::{Mage, StatusSlot, MAX_HEALTH, MAX_SHIELDS};
pub use rng::{DuelRng, DuelRngState, RangePolicy};
pub use school::{DamageKind, School};
