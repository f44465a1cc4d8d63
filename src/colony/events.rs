//! Colony events and the chronicle that records them
//!
//! State transitions never print; they record structured events here and a
//! display collaborator turns them into narration.

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{AgeClass, PackId, Season, WerewolfId};
use crate::pack::HowlType;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChronicleEntry {
    pub id: u32,
    pub season: Season,
    pub event: ColonyEvent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColonyEvent {
    // Packs
    PackFounded { pack: PackId, name: String },
    PackSplit { parent: PackId, offspring: PackId, name: String, transferred: usize },
    PackDisbanded { pack: PackId, name: String },

    // Hierarchy
    LitterBorn { pack: PackId, cubs: usize },
    Domination { pack: PackId, aggressor: WerewolfId, target: WerewolfId, succeeded: bool },
    AlphaSuccession { pack: PackId, alpha_male: WerewolfId, alpha_female: WerewolfId },
    OmegasIdentified { pack: PackId, demoted: Vec<WerewolfId> },

    // Individuals
    AgeClassChanged { werewolf: WerewolfId, class: AgeClass },
    Howl { pack: PackId, sender: WerewolfId, howl: HowlType, reactions: usize },
    Transformed { werewolf: WerewolfId, pack: PackId },
    LeftPack { werewolf: WerewolfId, pack: PackId },
}

impl ColonyEvent {
    /// Pack the event happened in, if it concerns one
    pub fn pack(&self) -> Option<PackId> {
        match self {
            ColonyEvent::PackFounded { pack, .. }
            | ColonyEvent::PackDisbanded { pack, .. }
            | ColonyEvent::LitterBorn { pack, .. }
            | ColonyEvent::Domination { pack, .. }
            | ColonyEvent::AlphaSuccession { pack, .. }
            | ColonyEvent::OmegasIdentified { pack, .. }
            | ColonyEvent::Howl { pack, .. }
            | ColonyEvent::Transformed { pack, .. }
            | ColonyEvent::LeftPack { pack, .. } => Some(*pack),
            ColonyEvent::PackSplit { parent, .. } => Some(*parent),
            ColonyEvent::AgeClassChanged { .. } => None,
        }
    }
}

/// The complete event log of a colony
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Chronicle {
    pub entries: Vec<ChronicleEntry>,
    next_entry_id: u32,
}

impl Chronicle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, season: Season, event: ColonyEvent) -> u32 {
        let id = self.next_entry_id;
        self.next_entry_id += 1;
        self.entries.push(ChronicleEntry { id, season, event });
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries_for_season(&self, season: Season) -> impl Iterator<Item = &ChronicleEntry> {
        self.entries.iter().filter(move |e| e.season == season)
    }

    pub fn entries_for_pack(&self, pack: PackId) -> impl Iterator<Item = &ChronicleEntry> {
        self.entries.iter().filter(move |e| e.event.pack() == Some(pack))
    }

    /// Number of entries whose event satisfies the predicate
    pub fn count(&self, predicate: impl Fn(&ColonyEvent) -> bool) -> usize {
        self.entries.iter().filter(|e| predicate(&e.event)).count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_assigns_sequential_ids() {
        let mut chronicle = Chronicle::new();
        let pack = PackId::new();
        let a = chronicle.record(1, ColonyEvent::LitterBorn { pack, cubs: 3 });
        let b = chronicle.record(2, ColonyEvent::PackDisbanded { pack, name: "Gone".into() });
        assert_eq!((a, b), (0, 1));
        assert_eq!(chronicle.len(), 2);
    }

    #[test]
    fn test_filters_by_season_and_pack() {
        let mut chronicle = Chronicle::new();
        let pack = PackId::new();
        let other = PackId::new();
        chronicle.record(1, ColonyEvent::LitterBorn { pack, cubs: 3 });
        chronicle.record(1, ColonyEvent::LitterBorn { pack: other, cubs: 2 });
        chronicle.record(2, ColonyEvent::AgeClassChanged { werewolf: WerewolfId::new(), class: AgeClass::Adult });

        assert_eq!(chronicle.entries_for_season(1).count(), 2);
        assert_eq!(chronicle.entries_for_pack(pack).count(), 1);
        assert_eq!(chronicle.count(|e| matches!(e, ColonyEvent::LitterBorn { .. })), 2);
    }

    #[test]
    fn test_to_json_lists_entries() {
        let mut chronicle = Chronicle::new();
        chronicle.record(4, ColonyEvent::PackFounded { pack: PackId::new(), name: "Carnac".into() });
        let json = chronicle.to_json().unwrap();
        assert!(json.contains("PackFounded"));
        assert!(json.contains("Carnac"));
    }
}
