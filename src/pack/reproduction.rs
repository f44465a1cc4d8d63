//! Reproduction: litters born to the alpha pair

use rand::Rng;

use crate::core::types::{Sex, WerewolfId};
use crate::pack::constants::{
    CUB_HEALTH, CUB_HUNGER, CUB_STAMINA_MAX, CUB_STAMINA_MIN, CUB_STRENGTH_MAX,
    CUB_STRENGTH_MIN, MAX_LITTER_SIZE, MIN_LITTER_SIZE,
};
use crate::pack::hierarchy::HierarchyStore;
use crate::pack::rank::Rank;
use crate::pack::werewolf::Werewolf;

/// Rank for a new litter: Beta when that rank is empty, otherwise Gamma
pub fn litter_rank(store: &HierarchyStore) -> Rank {
    if store.members_of_rank(Rank::Beta).is_empty() {
        Rank::Beta
    } else {
        Rank::Gamma
    }
}

/// Roll a fresh cub
pub fn spawn_cub(name: String, rng: &mut impl Rng) -> Werewolf {
    let mut cub = Werewolf::with_id(WerewolfId::from_rng(rng), name, Sex::random(rng), 0)
        .with_strength(rng.gen_range(CUB_STRENGTH_MIN..CUB_STRENGTH_MAX))
        .with_stamina(rng.gen_range(CUB_STAMINA_MIN..CUB_STAMINA_MAX))
        .with_health(CUB_HEALTH)
        .with_impetuosity(rng.gen());
    cub.hunger = CUB_HUNGER;
    cub
}

/// Produce one litter and seat it in the hierarchy
///
/// The whole litter shares the rank picked before the first cub is added.
/// `born` numbers cubs across litters for naming.
pub fn reproduce(
    store: &mut HierarchyStore,
    pack_name: &str,
    born: &mut u32,
    rng: &mut impl Rng,
) -> Vec<WerewolfId> {
    let litter_size = rng.gen_range(MIN_LITTER_SIZE..=MAX_LITTER_SIZE);
    let rank = litter_rank(store);

    let mut litter = Vec::with_capacity(litter_size);
    for _ in 0..litter_size {
        *born += 1;
        let cub = spawn_cub(format!("{}-cub-{}", pack_name, born), rng);
        litter.push(cub.id());
        store.add_member(cub, rank);
    }

    tracing::debug!("{} bore a litter of {} at {}", pack_name, litter_size, rank.name());
    litter
}
