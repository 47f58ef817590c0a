//! Pet vital statistics.
//!
//! A [`Vitals`] record is the single source of truth for a pet's condition.
//! Every mutation goes through a clamping operation so the bounded fields
//! never leave `0..=100`, and weight never drops to zero.

pub mod vitals;

pub use vitals::{StatError, Vital, Vitals};
