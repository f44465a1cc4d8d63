//! Hierarchy store: pack members and their partition into rank buckets
//!
//! The store owns the werewolves of one pack. Every member sits in exactly
//! one rank bucket; callers keep that true by removing a member before
//! adding it again (see [`HierarchyStore::relocate`]).

use ahash::AHashSet;

use crate::core::types::{PackId, WerewolfId};
use crate::pack::rank::Rank;
use crate::pack::werewolf::Werewolf;

#[derive(Debug, Clone)]
pub struct HierarchyStore {
    pack: PackId,
    /// Flat member list in insertion order
    members: Vec<Werewolf>,
    /// One bucket per rank, indexed by `Rank::index`
    ranks: [Vec<WerewolfId>; Rank::COUNT],
}

impl HierarchyStore {
    pub fn new(pack: PackId) -> Self {
        Self {
            pack,
            members: Vec::new(),
            ranks: Default::default(),
        }
    }

    /// Place a werewolf at a rank
    ///
    /// The werewolf joins the flat list unless a member with the same id is
    /// already there, in which case the stored record is replaced in place.
    pub fn add_member(&mut self, mut wolf: Werewolf, rank: Rank) {
        wolf.rank_level = rank.hierarchy_level();
        wolf.set_pack(Some(self.pack));
        self.ranks[rank.index()].push(wolf.id());

        match self.index_of(wolf.id()) {
            Some(idx) => self.members[idx] = wolf,
            None => self.members.push(wolf),
        }
    }

    /// Take a werewolf out of every bucket and the flat list
    pub fn remove_member(&mut self, id: WerewolfId) -> Option<Werewolf> {
        for bucket in &mut self.ranks {
            bucket.retain(|&member| member != id);
        }

        let idx = self.index_of(id)?;
        let mut wolf = self.members.remove(idx);
        wolf.set_pack(None);
        Some(wolf)
    }

    /// Remove then re-add at a new rank. Returns false for non-members.
    ///
    /// The member moves to the back of the flat list and of the bucket.
    pub fn relocate(&mut self, id: WerewolfId, rank: Rank) -> bool {
        match self.remove_member(id) {
            Some(wolf) => {
                self.add_member(wolf, rank);
                true
            }
            None => false,
        }
    }

    /// First rank (in enumeration order) whose bucket holds the werewolf
    pub fn rank_of(&self, id: WerewolfId) -> Option<Rank> {
        Rank::all()
            .iter()
            .copied()
            .find(|rank| self.ranks[rank.index()].contains(&id))
    }

    pub fn members(&self) -> &[Werewolf] {
        &self.members
    }

    pub fn members_of_rank(&self, rank: Rank) -> &[WerewolfId] {
        &self.ranks[rank.index()]
    }

    pub fn ids(&self) -> Vec<WerewolfId> {
        self.members.iter().map(|w| w.id()).collect()
    }

    pub fn get(&self, id: WerewolfId) -> Option<&Werewolf> {
        self.members.iter().find(|w| w.id() == id)
    }

    pub fn get_mut(&mut self, id: WerewolfId) -> Option<&mut Werewolf> {
        self.members.iter_mut().find(|w| w.id() == id)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Werewolf> {
        self.members.iter_mut()
    }

    pub fn contains(&self, id: WerewolfId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Empty every bucket except Alpha
    pub fn clear_non_alpha_ranks(&mut self) {
        for rank in Rank::all().iter().filter(|&&r| r != Rank::Alpha) {
            self.ranks[rank.index()].clear();
        }
    }

    /// Prune the flat list down to the alpha pair, handing back the rest
    pub fn retain_only_alphas(
        &mut self,
        alpha_male: WerewolfId,
        alpha_female: WerewolfId,
    ) -> Vec<Werewolf> {
        let (kept, mut pruned): (Vec<_>, Vec<_>) = std::mem::take(&mut self.members)
            .into_iter()
            .partition(|w| w.id() == alpha_male || w.id() == alpha_female);

        self.members = kept;
        for wolf in &mut pruned {
            wolf.set_pack(None);
        }
        pruned
    }

    /// Every member in exactly one bucket, every bucket entry a member,
    /// no duplicates in the flat list
    pub fn is_partition_consistent(&self) -> bool {
        let mut flat = AHashSet::with_capacity(self.members.len());
        if !self.members.iter().all(|w| flat.insert(w.id())) {
            return false;
        }

        let mut bucketed = AHashSet::with_capacity(self.members.len());
        for bucket in &self.ranks {
            for id in bucket {
                if !bucketed.insert(*id) {
                    return false;
                }
            }
        }

        flat == bucketed
    }

    fn index_of(&self, id: WerewolfId) -> Option<usize> {
        self.members.iter().position(|w| w.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Sex;

    fn store() -> HierarchyStore {
        HierarchyStore::new(PackId::new())
    }

    #[test]
    fn test_add_member_sets_rank_level_and_pack() {
        let mut store = store();
        let wolf = Werewolf::new("Fenris", Sex::Male, 12);
        let id = wolf.id();

        store.add_member(wolf, Rank::Gamma);

        let stored = store.get(id).unwrap();
        assert_eq!(stored.rank_level, Rank::Gamma.hierarchy_level());
        assert!(stored.pack().is_some());
        assert_eq!(store.rank_of(id), Some(Rank::Gamma));
        assert!(store.is_partition_consistent());
    }

    #[test]
    fn test_remove_member_clears_every_bucket() {
        let mut store = store();
        let wolf = Werewolf::new("Skoll", Sex::Female, 14);
        let id = wolf.id();
        store.add_member(wolf, Rank::Delta);

        let removed = store.remove_member(id).unwrap();
        assert!(removed.is_solitary());
        assert_eq!(store.rank_of(id), None);
        assert!(store.is_empty());
        assert!(store.remove_member(id).is_none());
    }

    #[test]
    fn test_relocate_moves_to_back_of_list() {
        let mut store = store();
        let a = Werewolf::new("A", Sex::Male, 12);
        let b = Werewolf::new("B", Sex::Male, 12);
        let (a_id, b_id) = (a.id(), b.id());
        store.add_member(a, Rank::Beta);
        store.add_member(b, Rank::Beta);

        assert!(store.relocate(a_id, Rank::Omega));
        assert_eq!(store.ids(), vec![b_id, a_id]);
        assert_eq!(store.rank_of(a_id), Some(Rank::Omega));
        assert_eq!(store.members_of_rank(Rank::Beta), &[b_id]);
        assert!(store.is_partition_consistent());
    }

    #[test]
    fn test_re_adding_replaces_record_in_place() {
        let mut store = store();
        let wolf = Werewolf::new("Hati", Sex::Male, 12).with_strength(10.0);
        let id = wolf.id();
        store.add_member(wolf.clone(), Rank::Alpha);
        store.ranks[Rank::Alpha.index()].clear();

        store.add_member(wolf.with_strength(40.0), Rank::Beta);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().strength, 40.0);
    }

    #[test]
    fn test_retain_only_alphas() {
        let mut store = store();
        let male = Werewolf::new("M", Sex::Male, 12);
        let female = Werewolf::new("F", Sex::Female, 12);
        let other = Werewolf::new("O", Sex::Male, 12);
        let (m, f, o) = (male.id(), female.id(), other.id());
        store.add_member(male, Rank::Alpha);
        store.add_member(female, Rank::Alpha);
        store.add_member(other, Rank::Gamma);

        store.clear_non_alpha_ranks();
        let pruned = store.retain_only_alphas(m, f);

        assert_eq!(pruned.len(), 1);
        assert_eq!(pruned[0].id(), o);
        assert!(pruned[0].is_solitary());
        assert_eq!(store.ids(), vec![m, f]);
        assert!(store.is_partition_consistent());
    }

    #[test]
    fn test_partition_check_detects_double_bucket() {
        let mut store = store();
        let wolf = Werewolf::new("Twice", Sex::Male, 12);
        store.add_member(wolf.clone(), Rank::Beta);
        store.add_member(wolf, Rank::Gamma);
        assert!(!store.is_partition_consistent());
    }
}
