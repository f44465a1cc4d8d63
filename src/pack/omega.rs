//! Omega selection: weak adults sink to the bottom rank

use crate::core::types::WerewolfId;
use crate::pack::constants::OMEGA_STRENGTH_RATIO;
use crate::pack::hierarchy::HierarchyStore;
use crate::pack::rank::Rank;

/// Strength below which an adult is demoted, or None without adults
pub fn omega_threshold(store: &HierarchyStore) -> Option<f32> {
    let (total, count) = store
        .members()
        .iter()
        .filter(|w| w.is_adult())
        .fold((0.0f32, 0usize), |(total, count), w| (total + w.strength, count + 1));

    if count == 0 {
        return None;
    }
    Some(total / count as f32 * OMEGA_STRENGTH_RATIO)
}

/// Demote adults below the threshold to Omega, returning who was demoted
///
/// The threshold is taken once before the pass. Alpha and Omega buckets are
/// not scanned.
pub fn identify_omegas(store: &mut HierarchyStore) -> Vec<WerewolfId> {
    let threshold = match omega_threshold(store) {
        Some(threshold) => threshold,
        None => return Vec::new(),
    };

    let mut demoted = Vec::new();
    for &rank in Rank::all() {
        if rank == Rank::Alpha || rank == Rank::Omega {
            continue;
        }

        let weak: Vec<WerewolfId> = store
            .members_of_rank(rank)
            .iter()
            .copied()
            .filter(|&id| {
                store
                    .get(id)
                    .map_or(false, |w| w.is_adult() && w.strength < threshold)
            })
            .collect();

        for id in weak {
            store.relocate(id, Rank::Omega);
            demoted.push(id);
        }
    }

    if !demoted.is_empty() {
        tracing::debug!(
            "{} werewolves fell to omega (threshold {:.1})",
            demoted.len(),
            threshold
        );
    }
    demoted
}
