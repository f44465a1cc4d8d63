//! Individual werewolves and their mutable attributes

use serde::{Deserialize, Serialize};

use crate::core::types::{AgeClass, PackId, Sex, WerewolfId};
use crate::pack::constants::{TRANSFORM_STAMINA_FACTOR, TRANSFORM_STRENGTH_FACTOR};

/// A single werewolf
///
/// The pack back-reference is a non-owning handle; only the pack that
/// holds the werewolf writes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Werewolf {
    id: WerewolfId,
    pub name: String,
    pub sex: Sex,
    pub age: u32,
    pub age_class: AgeClass,
    pub strength: f32,
    pub stamina: f32,
    pub health: f32,
    pub hunger: f32,
    pub belligerence: f32,
    pub domination_score: i32,
    /// Mirror of the current rank's hierarchy level (0 when solitary)
    pub rank_level: i32,
    pub is_human: bool,
    /// Probability weight (0.0 to 1.0) of acting on impulse
    pub impetuosity: f32,
    pack: Option<PackId>,
}

impl Werewolf {
    /// Create a solitary werewolf whose age class follows its age
    pub fn new(name: impl Into<String>, sex: Sex, age: u32) -> Self {
        Self::with_id(WerewolfId::new(), name, sex, age)
    }

    pub fn with_id(id: WerewolfId, name: impl Into<String>, sex: Sex, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            sex,
            age,
            age_class: AgeClass::for_age(age),
            strength: 0.0,
            stamina: 0.0,
            health: 100.0,
            hunger: 0.0,
            belligerence: 0.0,
            domination_score: 0,
            rank_level: 0,
            is_human: false,
            impetuosity: 0.5,
            pack: None,
        }
    }

    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_stamina(mut self, stamina: f32) -> Self {
        self.stamina = stamina;
        self
    }

    pub fn with_health(mut self, health: f32) -> Self {
        self.health = health;
        self
    }

    pub fn with_belligerence(mut self, belligerence: f32) -> Self {
        self.belligerence = belligerence;
        self
    }

    pub fn with_impetuosity(mut self, impetuosity: f32) -> Self {
        self.impetuosity = impetuosity.clamp(0.0, 1.0);
        self
    }

    pub fn with_domination_score(mut self, score: i32) -> Self {
        self.domination_score = score;
        self
    }

    pub fn with_age_class(mut self, age_class: AgeClass) -> Self {
        self.age_class = age_class;
        self
    }

    pub fn id(&self) -> WerewolfId {
        self.id
    }

    /// Pack this werewolf belongs to, if any
    pub fn pack(&self) -> Option<PackId> {
        self.pack
    }

    pub fn is_solitary(&self) -> bool {
        self.pack.is_none()
    }

    pub fn is_adult(&self) -> bool {
        self.age_class == AgeClass::Adult
    }

    pub fn is_young(&self) -> bool {
        self.age_class == AgeClass::Young
    }

    pub(crate) fn set_pack(&mut self, pack: Option<PackId>) {
        self.pack = pack;
    }

    /// Age by one year, returning the new age class if a boundary was crossed
    pub fn age_one_year(&mut self) -> Option<AgeClass> {
        let previous = self.age;
        self.age += 1;
        let transition = AgeClass::transition(previous, self.age);
        if let Some(class) = transition {
            self.age_class = class;
        }
        transition
    }

    /// Take human form. Returns false if already human.
    pub fn transform(&mut self) -> bool {
        if self.is_human {
            return false;
        }
        self.is_human = true;
        self.strength *= TRANSFORM_STRENGTH_FACTOR;
        self.stamina *= TRANSFORM_STAMINA_FACTOR;
        true
    }

    /// Drop every trace of pack standing
    pub(crate) fn reset_standing(&mut self) {
        self.pack = None;
        self.rank_level = 0;
        self.domination_score = 0;
    }
}

impl PartialEq for Werewolf {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Werewolf {}
