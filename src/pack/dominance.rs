//! Dominance contests between two pack members

use rand::Rng;

use crate::core::types::WerewolfId;
use crate::pack::constants::FAILED_DOMINATION_BELLIGERENCE;
use crate::pack::hierarchy::HierarchyStore;
use crate::pack::level::level;
use crate::pack::rank::Rank;

/// Why an attempt never took place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    SelfTarget,
    NotMember,
    /// The alpha female cannot be challenged
    ProtectedTarget,
    /// Facing a stronger target, the aggressor lost its nerve
    LostNerve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominationOutcome {
    Refused(Refusal),
    Succeeded { ranks_swapped: bool },
    Failed,
}

impl DominationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DominationOutcome::Succeeded { .. })
    }
}

/// Resolve one contest and apply its consequences
///
/// Refusals leave everything untouched. A win moves one point of domination
/// score from target to aggressor and swaps their ranks when they differ;
/// the Alpha bucket never takes part in a swap. A loss angers the target and
/// costs the aggressor a point.
pub fn attempt_domination(
    store: &mut HierarchyStore,
    protected: WerewolfId,
    aggressor: WerewolfId,
    target: WerewolfId,
    rng: &mut impl Rng,
) -> DominationOutcome {
    if aggressor == target {
        return DominationOutcome::Refused(Refusal::SelfTarget);
    }

    let (aggressor_wolf, target_wolf) = match (store.get(aggressor), store.get(target)) {
        (Some(a), Some(t)) => (a, t),
        _ => return DominationOutcome::Refused(Refusal::NotMember),
    };

    if target == protected {
        return DominationOutcome::Refused(Refusal::ProtectedTarget);
    }

    if target_wolf.strength > aggressor_wolf.strength {
        let draw: f32 = rng.gen();
        if draw > aggressor_wolf.impetuosity {
            return DominationOutcome::Refused(Refusal::LostNerve);
        }
    }

    let aggressor_level = level(aggressor_wolf);
    let target_level = level(target_wolf);
    let aggressor_rank = store.rank_of(aggressor);
    let target_rank = store.rank_of(target);

    if aggressor_level > target_level || target_rank == Some(Rank::Omega) {
        if let Some(wolf) = store.get_mut(aggressor) {
            wolf.domination_score += 1;
        }
        if let Some(wolf) = store.get_mut(target) {
            wolf.domination_score -= 1;
        }

        let ranks_swapped = match (aggressor_rank, target_rank) {
            (Some(a), Some(t)) if a != t && a != Rank::Alpha && t != Rank::Alpha => {
                store.relocate(aggressor, t);
                store.relocate(target, a);
                true
            }
            _ => false,
        };

        tracing::debug!(
            "Domination: {:?} ({:.1}) over {:?} ({:.1}), swapped={}",
            aggressor,
            aggressor_level,
            target,
            target_level,
            ranks_swapped
        );
        DominationOutcome::Succeeded { ranks_swapped }
    } else {
        if let Some(wolf) = store.get_mut(target) {
            wolf.belligerence += FAILED_DOMINATION_BELLIGERENCE;
        }
        if let Some(wolf) = store.get_mut(aggressor) {
            wolf.domination_score -= 1;
        }
        DominationOutcome::Failed
    }
}
