//! Seasonal systems, run by `Colony::advance_time` in declaration order

mod aging;
mod cleanup;
mod evolution;
mod howling;
mod mating;
mod split;
mod transformation;

pub use aging::age_werewolves;
pub use cleanup::remove_empty_packs;
pub use evolution::evolve_hierarchies;
pub use howling::howl;
pub use mating::mating_season;
pub use split::{check_splits, split_pack};
pub use transformation::transform_werewolves;
