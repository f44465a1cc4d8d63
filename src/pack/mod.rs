//! Werewolf packs
//!
//! A [`Pack`] owns one [`HierarchyStore`] and runs every hierarchy behavior
//! (succession, rank assignment, dominance, omega selection, reproduction,
//! howl reception) as functions over that shared store.

pub mod constants;
pub mod dominance;
pub mod hierarchy;
pub mod howl;
pub mod level;
pub mod omega;
pub mod rank;
pub mod ranking;
pub mod reproduction;
pub mod succession;
pub mod werewolf;

use rand::Rng;

use crate::core::error::Result;
use crate::core::types::{PackId, Sex, WerewolfId};

pub use dominance::{DominationOutcome, Refusal};
pub use hierarchy::HierarchyStore;
pub use howl::{HowlReaction, HowlType, Howler};
pub use rank::Rank;
pub use succession::{AlphaChange, AlphaSuccession};
pub use werewolf::Werewolf;

/// Full result of a dominance contest, including any alpha overthrow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contest {
    pub outcome: DominationOutcome,
    pub succession: Option<AlphaChange>,
}

/// One social unit: an alpha pair and the ranked members around it
#[derive(Debug, Clone)]
pub struct Pack {
    id: PackId,
    name: String,
    store: HierarchyStore,
    succession: AlphaSuccession,
    /// Cubs born so far, for naming
    born: u32,
}

impl Pack {
    /// Found a pack around an alpha pair
    ///
    /// Fails with `InvalidAlphaPair` unless the male is an adult male and
    /// the female an adult female; no pack exists afterwards.
    pub fn new(name: impl Into<String>, alpha_male: Werewolf, alpha_female: Werewolf) -> Result<Self> {
        Self::with_id(PackId::new(), name, alpha_male, alpha_female)
    }

    pub fn with_id(
        id: PackId,
        name: impl Into<String>,
        alpha_male: Werewolf,
        alpha_female: Werewolf,
    ) -> Result<Self> {
        let mut store = HierarchyStore::new(id);
        let succession = AlphaSuccession::establish(&mut store, alpha_male, alpha_female)?;
        let name = name.into();
        tracing::debug!("Pack {} founded", name);

        Ok(Self {
            id,
            name,
            store,
            succession,
            born: 0,
        })
    }

    pub fn id(&self) -> PackId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alpha_male(&self) -> WerewolfId {
        self.succession.alpha_male()
    }

    pub fn alpha_female(&self) -> WerewolfId {
        self.succession.alpha_female()
    }

    pub fn is_alpha(&self, id: WerewolfId) -> bool {
        self.succession.is_alpha(id)
    }

    // === MEMBERSHIP ===

    /// Place a werewolf at a rank, moving it if it is already a member
    ///
    /// Returns false for alpha ids and for the Alpha rank: the alpha pair
    /// changes only through succession.
    pub fn add_member(&mut self, wolf: Werewolf, rank: Rank) -> bool {
        if rank == Rank::Alpha || self.is_alpha(wolf.id()) {
            tracing::warn!("{}: alpha rank is only assigned through succession", self.name);
            return false;
        }
        self.store.remove_member(wolf.id());
        self.store.add_member(wolf, rank);
        true
    }

    /// Remove a non-alpha member. Alphas are never removed.
    pub fn remove_member(&mut self, id: WerewolfId) -> Option<Werewolf> {
        if self.is_alpha(id) {
            tracing::warn!("{}: refusing to remove an alpha", self.name);
            return None;
        }
        self.store.remove_member(id)
    }

    /// Move a non-alpha member into another pack at the given rank
    pub fn transfer_member(&mut self, other: &mut Pack, id: WerewolfId, rank: Rank) -> bool {
        if self.id == other.id || rank == Rank::Alpha || !self.contains(id) || other.is_alpha(id) {
            return false;
        }
        match self.remove_member(id) {
            Some(wolf) => other.add_member(wolf, rank),
            None => false,
        }
    }

    pub fn members(&self) -> &[Werewolf] {
        self.store.members()
    }

    pub fn ids(&self) -> Vec<WerewolfId> {
        self.store.ids()
    }

    pub fn member(&self, id: WerewolfId) -> Option<&Werewolf> {
        self.store.get(id)
    }

    /// Mutable access to a member's attributes
    pub fn member_mut(&mut self, id: WerewolfId) -> Option<&mut Werewolf> {
        self.store.get_mut(id)
    }

    pub(crate) fn members_mut(&mut self) -> impl Iterator<Item = &mut Werewolf> {
        self.store.iter_mut()
    }

    pub fn contains(&self, id: WerewolfId) -> bool {
        self.store.contains(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn rank_of(&self, id: WerewolfId) -> Option<Rank> {
        self.store.rank_of(id)
    }

    pub fn members_of_rank(&self, rank: Rank) -> &[WerewolfId] {
        self.store.members_of_rank(rank)
    }

    pub fn level_of(&self, id: WerewolfId) -> Option<f32> {
        self.store.get(id).map(level::level)
    }

    // === HIERARCHY ===

    /// Rebuild the non-alpha ranks from `members`
    ///
    /// Current members missing from `members` leave the pack and are
    /// returned as solitary werewolves.
    pub fn create_hierarchy(&mut self, members: Vec<Werewolf>) -> Vec<Werewolf> {
        let (male, female) = (self.alpha_male(), self.alpha_female());
        ranking::create_hierarchy(&mut self.store, members, male, female)
    }

    /// Rebuild the non-alpha ranks from the current members
    pub fn rebuild_hierarchy(&mut self) {
        let members = self.store.members().to_vec();
        self.create_hierarchy(members);
    }

    pub fn identify_omegas(&mut self) -> Vec<WerewolfId> {
        omega::identify_omegas(&mut self.store)
    }

    pub fn attempt_domination(
        &mut self,
        aggressor: WerewolfId,
        target: WerewolfId,
        rng: &mut impl Rng,
    ) -> bool {
        self.contest(aggressor, target, rng).outcome.is_success()
    }

    /// Resolve a dominance contest
    ///
    /// An adult male who defeats the alpha male takes his place through
    /// succession.
    pub fn contest(&mut self, aggressor: WerewolfId, target: WerewolfId, rng: &mut impl Rng) -> Contest {
        let outcome = dominance::attempt_domination(
            &mut self.store,
            self.succession.alpha_female(),
            aggressor,
            target,
            rng,
        );

        let overthrow = outcome.is_success()
            && target == self.alpha_male()
            && self
                .store
                .get(aggressor)
                .map_or(false, |w| w.sex == Sex::Male && w.is_adult());

        let succession = if overthrow {
            self.form_new_alpha_male(aggressor).ok()
        } else {
            None
        };

        Contest { outcome, succession }
    }

    pub fn reproduce(&mut self, rng: &mut impl Rng) -> Vec<WerewolfId> {
        reproduction::reproduce(&mut self.store, &self.name, &mut self.born, rng)
    }

    pub fn form_new_alpha_male(&mut self, candidate: WerewolfId) -> Result<AlphaChange> {
        let change = self.succession.form_new_alpha_couple(&mut self.store, candidate)?;
        tracing::info!("{}: new alpha couple", self.name);
        Ok(change)
    }

    /// Replace alphas who are no longer adults
    ///
    /// An aged-out alpha male yields to the highest-level adult male; an
    /// aged-out alpha female is replaced by re-running succession with the
    /// current male. Without an adult successor the old alpha keeps the slot.
    pub fn renew_alphas(&mut self) -> Option<AlphaChange> {
        let male_fit = self.member(self.alpha_male()).map_or(false, |w| w.is_adult());
        let female_fit = self.member(self.alpha_female()).map_or(false, |w| w.is_adult());

        if !male_fit {
            let heir = self
                .members()
                .iter()
                .filter(|w| w.sex == Sex::Male && w.is_adult() && !self.is_alpha(w.id()))
                .fold(None::<(WerewolfId, f32)>, |best, w| {
                    let lvl = level::level(w);
                    match best {
                        Some((_, best_level)) if lvl <= best_level => best,
                        _ => Some((w.id(), lvl)),
                    }
                })
                .map(|(id, _)| id)?;
            return self.form_new_alpha_male(heir).ok();
        }

        let heiress = self
            .members()
            .iter()
            .any(|w| w.sex == Sex::Female && w.is_adult() && !self.is_alpha(w.id()));
        if !female_fit && heiress {
            let male = self.alpha_male();
            return self.form_new_alpha_male(male).ok();
        }
        None
    }

    // === HOWLS ===

    /// Broadcast a howl to every other member, returning who reacted and how
    pub fn notify_howl(
        &mut self,
        sender: WerewolfId,
        howl: HowlType,
        rng: &mut impl Rng,
    ) -> Vec<(WerewolfId, HowlReaction)> {
        let howler = match (self.store.get(sender), self.store.rank_of(sender)) {
            (Some(wolf), Some(rank)) => Howler {
                id: sender,
                rank,
                domination_score: wolf.domination_score,
                pack: wolf.pack(),
            },
            _ => return Vec::new(),
        };

        let mut reactions = Vec::new();
        for id in self.store.ids() {
            if id == sender {
                continue;
            }
            let Some(rank) = self.store.rank_of(id) else { continue };
            let Some(listener) = self.store.get_mut(id) else { continue };
            if let Some(reaction) = howl::receive_howl(listener, rank, &howler, howl, rng) {
                reactions.push((id, reaction));
            }
        }
        reactions
    }

    /// Drop every member, alphas included
    #[cfg(test)]
    pub(crate) fn clear_members(&mut self) {
        self.store = HierarchyStore::new(self.id);
    }

    // === INVARIANTS ===

    /// Partition invariant plus a male/female alpha pair seated at Alpha
    ///
    /// Adulthood is checked when an alpha is seated, not here: an alpha who
    /// aged out without an heir keeps the slot.
    pub fn is_consistent(&self) -> bool {
        let alphas = self.store.members_of_rank(Rank::Alpha);
        let seated = alphas.len() == 2
            && alphas.contains(&self.alpha_male())
            && alphas.contains(&self.alpha_female());

        let valid = match (self.member(self.alpha_male()), self.member(self.alpha_female())) {
            (Some(male), Some(female)) => male.sex == Sex::Male && female.sex == Sex::Female,
            _ => false,
        };

        seated && valid && self.store.is_partition_consistent()
    }
}
