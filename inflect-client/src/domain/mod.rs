//! Domain types for word inflection.
//!
//! Values here are validated at construction time: a [`Case`] is always
//! in 1..=6 and an [`InflectionSet`] always has exactly six slots.

mod case;
mod inflection_set;

pub use case::{Case, InvalidCase};
pub use inflection_set::InflectionSet;

/// Number of grammatical cases the service inflects into.
pub const INFLECTIONS_COUNT: usize = 6;
