//! Armorica Packs - Werewolf Pack Hierarchy Simulation

pub mod colony;
pub mod core;
pub mod pack;
