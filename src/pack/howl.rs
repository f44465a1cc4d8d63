//! Howls and how a listener reacts to them

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{PackId, WerewolfId};
use crate::pack::constants::AGGRESSION_HOWL_BELLIGERENCE;
use crate::pack::rank::Rank;
use crate::pack::werewolf::Werewolf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HowlType {
    Domination,
    Submission,
    Aggression,
    Belonging,
    Joy,
    Sadness,
}

impl HowlType {
    pub fn all() -> &'static [HowlType] {
        &[
            HowlType::Domination,
            HowlType::Submission,
            HowlType::Aggression,
            HowlType::Belonging,
            HowlType::Joy,
            HowlType::Sadness,
        ]
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        let all = Self::all();
        all[rng.gen_range(0..all.len())]
    }
}

/// What the listeners know about the howler
#[derive(Debug, Clone, Copy)]
pub struct Howler {
    pub id: WerewolfId,
    pub rank: Rank,
    pub domination_score: i32,
    pub pack: Option<PackId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HowlReaction {
    /// Lowered its own domination score
    Cowed,
    /// Raised its own domination score
    Emboldened,
    /// Grew more belligerent
    Provoked,
    /// Recognized a packmate
    Acknowledged,
}

/// Apply a howl to one listener
///
/// Joy and sadness howls are heard but change nothing.
pub fn receive_howl(
    listener: &mut Werewolf,
    listener_rank: Rank,
    howler: &Howler,
    howl: HowlType,
    rng: &mut impl Rng,
) -> Option<HowlReaction> {
    match howl {
        HowlType::Domination if listener.rank_level < howler.domination_score => {
            listener.domination_score -= 1;
            Some(HowlReaction::Cowed)
        }
        HowlType::Submission if listener_rank.outranks(howler.rank) => {
            listener.domination_score += 1;
            Some(HowlReaction::Emboldened)
        }
        HowlType::Aggression => {
            let draw: f32 = rng.gen();
            if draw < listener.impetuosity {
                listener.belligerence += AGGRESSION_HOWL_BELLIGERENCE;
                Some(HowlReaction::Provoked)
            } else {
                None
            }
        }
        HowlType::Belonging if howler.pack.is_some() && listener.pack() == howler.pack => {
            Some(HowlReaction::Acknowledged)
        }
        _ => None,
    }
}
