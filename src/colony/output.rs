//! Run statistics and the human-readable summary

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::colony::events::ColonyEvent;
use crate::colony::Colony;
use crate::core::types::Season;
use crate::pack::Rank;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColonySummary {
    pub colony: String,
    pub seasons: Season,
    pub simulation_time_ms: u64,
    pub packs: Vec<PackSummary>,
    pub werewolves: usize,
    pub solitary: usize,
    pub splits: usize,
    pub litters: usize,
    pub cubs_born: usize,
    pub dominations_won: usize,
    pub dominations_lost: usize,
    pub successions: usize,
    pub transformations: usize,
    pub departures: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PackSummary {
    pub name: String,
    pub members: usize,
    pub alpha_male: String,
    pub alpha_female: String,
    pub omegas: usize,
}

impl ColonySummary {
    pub fn new(colony: &Colony, elapsed: Duration) -> Self {
        let chronicle = colony.chronicle();

        let packs = colony
            .packs()
            .iter()
            .map(|pack| {
                let name_of = |id| {
                    pack.member(id)
                        .map(|w| w.name.clone())
                        .unwrap_or_default()
                };
                PackSummary {
                    name: pack.name().to_string(),
                    members: pack.len(),
                    alpha_male: name_of(pack.alpha_male()),
                    alpha_female: name_of(pack.alpha_female()),
                    omegas: pack.members_of_rank(Rank::Omega).len(),
                }
            })
            .collect();

        let cubs_born = chronicle
            .entries
            .iter()
            .map(|e| match e.event {
                ColonyEvent::LitterBorn { cubs, .. } => cubs,
                _ => 0,
            })
            .sum();

        Self {
            colony: colony.name().to_string(),
            seasons: colony.season(),
            simulation_time_ms: elapsed.as_millis() as u64,
            packs,
            werewolves: colony.total_werewolf_count(),
            solitary: colony.solitary().len(),
            splits: chronicle.count(|e| matches!(e, ColonyEvent::PackSplit { .. })),
            litters: chronicle.count(|e| matches!(e, ColonyEvent::LitterBorn { .. })),
            cubs_born,
            dominations_won: chronicle
                .count(|e| matches!(e, ColonyEvent::Domination { succeeded: true, .. })),
            dominations_lost: chronicle
                .count(|e| matches!(e, ColonyEvent::Domination { succeeded: false, .. })),
            successions: chronicle.count(|e| matches!(e, ColonyEvent::AlphaSuccession { .. })),
            transformations: chronicle.count(|e| matches!(e, ColonyEvent::Transformed { .. })),
            departures: chronicle.count(|e| matches!(e, ColonyEvent::LeftPack { .. })),
        }
    }

    pub fn summary(&self) -> String {
        let mut text = format!(
            "{}: {} seasons in {}ms\n{} werewolves in {} packs, {} solitary\n\
             {} splits, {} litters ({} cubs), {} successions\n\
             dominations: {} won / {} lost; {} transformations, {} departures",
            self.colony,
            self.seasons,
            self.simulation_time_ms,
            self.werewolves,
            self.packs.len(),
            self.solitary,
            self.splits,
            self.litters,
            self.cubs_born,
            self.successions,
            self.dominations_won,
            self.dominations_lost,
            self.transformations,
            self.departures,
        );

        for pack in &self.packs {
            text.push_str(&format!(
                "\n  {} ({} members, {} omega) led by {} and {}",
                pack.name, pack.members, pack.omegas, pack.alpha_male, pack.alpha_female
            ));
        }
        text
    }
}
