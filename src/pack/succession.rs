//! Alpha succession: the distinguished alpha pair of one pack

use crate::core::error::{AlphaRejection, PackError, Result};
use crate::core::types::{Sex, WerewolfId};
use crate::pack::hierarchy::HierarchyStore;
use crate::pack::level::level;
use crate::pack::rank::Rank;
use crate::pack::werewolf::Werewolf;

/// Outcome of a succession, for narration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaChange {
    pub previous_male: WerewolfId,
    pub previous_female: WerewolfId,
    pub new_male: WerewolfId,
    pub new_female: WerewolfId,
}

#[derive(Debug, Clone)]
pub struct AlphaSuccession {
    alpha_male: WerewolfId,
    alpha_female: WerewolfId,
}

/// Check that a werewolf may hold the alpha slot of the given sex
pub fn check_alpha(wolf: &Werewolf, slot: Sex) -> std::result::Result<(), AlphaRejection> {
    if wolf.sex != slot {
        return Err(AlphaRejection::WrongSex { expected: slot });
    }
    if !wolf.is_adult() {
        return Err(AlphaRejection::NotAdult);
    }
    Ok(())
}

impl AlphaSuccession {
    /// Validate a pair and seat it at Alpha. Nothing is inserted on failure.
    pub fn establish(store: &mut HierarchyStore, male: Werewolf, female: Werewolf) -> Result<Self> {
        check_alpha(&male, Sex::Male).map_err(PackError::InvalidAlphaPair)?;
        check_alpha(&female, Sex::Female).map_err(PackError::InvalidAlphaPair)?;

        let succession = Self {
            alpha_male: male.id(),
            alpha_female: female.id(),
        };
        store.add_member(male, Rank::Alpha);
        store.add_member(female, Rank::Alpha);

        Ok(succession)
    }

    pub fn alpha_male(&self) -> WerewolfId {
        self.alpha_male
    }

    pub fn alpha_female(&self) -> WerewolfId {
        self.alpha_female
    }

    pub fn is_alpha(&self, id: WerewolfId) -> bool {
        id == self.alpha_male || id == self.alpha_female
    }

    /// Install a new alpha male and pick the strongest adult female as his mate
    ///
    /// The previous pair drops to Beta. Without any adult female the previous
    /// alpha female keeps her place beside the new male.
    pub fn form_new_alpha_couple(
        &mut self,
        store: &mut HierarchyStore,
        new_male: WerewolfId,
    ) -> Result<AlphaChange> {
        let candidate = store
            .get(new_male)
            .ok_or(PackError::InvalidAlphaPair(AlphaRejection::Missing))?;
        check_alpha(candidate, Sex::Male).map_err(PackError::InvalidAlphaPair)?;

        let previous_male = self.alpha_male;
        let previous_female = self.alpha_female;

        store.relocate(previous_male, Rank::Beta);
        store.relocate(previous_female, Rank::Beta);

        let new_female = strongest_adult_female(store).unwrap_or(previous_female);

        store.relocate(new_male, Rank::Alpha);
        store.relocate(new_female, Rank::Alpha);

        self.alpha_male = new_male;
        self.alpha_female = new_female;

        tracing::debug!(
            "Alpha succession: {:?}/{:?} replaced by {:?}/{:?}",
            previous_male,
            previous_female,
            new_male,
            new_female
        );

        Ok(AlphaChange {
            previous_male,
            previous_female,
            new_male,
            new_female,
        })
    }
}

/// Highest-level adult female in member order; the first maximum wins ties
fn strongest_adult_female(store: &HierarchyStore) -> Option<WerewolfId> {
    let mut best: Option<(WerewolfId, f32)> = None;
    for wolf in store.members() {
        if wolf.sex != Sex::Female || !wolf.is_adult() {
            continue;
        }
        let lvl = level(wolf);
        match best {
            Some((_, best_level)) if lvl <= best_level => {}
            _ => best = Some((wolf.id(), lvl)),
        }
    }
    best.map(|(id, _)| id)
}
