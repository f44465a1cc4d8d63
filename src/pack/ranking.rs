//! Rank assignment: rebuilds the non-alpha ranks from a member list

use std::cmp::Reverse;

use ahash::AHashSet;
use ordered_float::OrderedFloat;

use crate::core::types::{Sex, WerewolfId};
use crate::pack::hierarchy::HierarchyStore;
use crate::pack::level::level;
use crate::pack::rank::Rank;
use crate::pack::werewolf::Werewolf;

/// Rebuild the hierarchy around the alpha pair
///
/// Adults (old members included) are split by sex, sorted by level and
/// spread over Beta..=Epsilon; every young member goes to Gamma. Members
/// carrying an alpha id are skipped, as are repeated ids. Werewolves that were in the store but
/// are absent from `members` are handed back.
pub fn create_hierarchy(
    store: &mut HierarchyStore,
    members: Vec<Werewolf>,
    alpha_male: WerewolfId,
    alpha_female: WerewolfId,
) -> Vec<Werewolf> {
    store.clear_non_alpha_ranks();
    let pruned = store.retain_only_alphas(alpha_male, alpha_female);

    let mut adult_males = Vec::new();
    let mut adult_females = Vec::new();
    let mut young = Vec::new();
    let mut rebuilt = AHashSet::with_capacity(members.len());

    for wolf in members {
        if wolf.id() == alpha_male || wolf.id() == alpha_female {
            continue;
        }
        // First occurrence of an id wins
        if !rebuilt.insert(wolf.id()) {
            continue;
        }
        if wolf.is_young() {
            young.push(wolf);
        } else if wolf.sex == Sex::Male {
            adult_males.push(wolf);
        } else {
            adult_females.push(wolf);
        }
    }

    distribute(store, adult_males);
    distribute(store, adult_females);

    for wolf in young {
        store.add_member(wolf, Rank::Gamma);
    }

    pruned
        .into_iter()
        .filter(|w| !rebuilt.contains(&w.id()))
        .collect()
}

/// Spread a group over the distributed ranks, strongest first
///
/// `sort_by_cached_key` is stable, so among equal levels the earlier member
/// keeps its place (the first maximum wins).
fn distribute(store: &mut HierarchyStore, mut group: Vec<Werewolf>) {
    group.sort_by_cached_key(|w| Reverse(OrderedFloat(level(w))));

    let ranks = Rank::distributed();
    let per_rank = (group.len() / ranks.len()).max(1);
    let mut current = 0;
    let mut placed = 0;

    for wolf in group {
        if placed == per_rank && current < ranks.len() - 1 {
            current += 1;
            placed = 0;
        }
        store.add_member(wolf, ranks[current]);
        placed += 1;
    }
}
