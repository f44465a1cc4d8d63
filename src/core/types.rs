//! Core type definitions used throughout the codebase

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for werewolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WerewolfId(pub Uuid);

impl WerewolfId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Derive an id from a simulation rng so seeded runs stay reproducible
    pub fn from_rng(rng: &mut impl Rng) -> Self {
        Self(Uuid::from_u128(rng.gen()))
    }
}

impl Default for WerewolfId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for packs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackId(pub Uuid);

impl PackId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_rng(rng: &mut impl Rng) -> Self {
        Self(Uuid::from_u128(rng.gen()))
    }
}

impl Default for PackId {
    fn default() -> Self {
        Self::new()
    }
}

/// Season counter (colony simulation time unit)
pub type Season = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            Sex::Male
        } else {
            Sex::Female
        }
    }
}

/// Age class gating alpha eligibility and rank assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeClass {
    Young,
    Adult,
    Old,
}

impl AgeClass {
    /// Age at which a werewolf counts as young
    pub const YOUNG_AGE: u32 = 2;
    /// Age at which a werewolf becomes an adult
    pub const ADULT_AGE: u32 = 10;
    /// Age at which a werewolf becomes old
    pub const OLD_AGE: u32 = 20;

    /// Starting class for a werewolf created at the given age
    pub fn for_age(age: u32) -> Self {
        if age >= Self::OLD_AGE {
            AgeClass::Old
        } else if age >= Self::ADULT_AGE {
            AgeClass::Adult
        } else {
            AgeClass::Young
        }
    }

    /// Class reached when the age crosses a boundary, if any
    pub fn transition(previous_age: u32, new_age: u32) -> Option<Self> {
        let crossed = |boundary: u32| previous_age < boundary && new_age >= boundary;

        if crossed(Self::OLD_AGE) {
            Some(AgeClass::Old)
        } else if crossed(Self::ADULT_AGE) {
            Some(AgeClass::Adult)
        } else if crossed(Self::YOUNG_AGE) {
            Some(AgeClass::Young)
        } else {
            None
        }
    }
}
