//! Colony simulation
//!
//! A colony owns a set of packs plus the werewolves who left them, and
//! advances them one season at a time. Each season runs a fixed sequence of
//! systems (see [`systems`]) against a single seeded random source.

pub mod events;
pub mod generation;
pub mod output;
pub mod systems;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::ColonyConfig;
use crate::core::error::{PackError, Result};
use crate::core::types::{PackId, Season, WerewolfId};
use crate::pack::{Pack, Rank, Werewolf};

pub use events::{Chronicle, ChronicleEntry, ColonyEvent};
pub use output::ColonySummary;

pub struct Colony {
    name: String,
    /// Packs in registration order
    pub(crate) packs: Vec<Pack>,
    /// Werewolves who left their pack
    pub(crate) solitary: Vec<Werewolf>,
    pub(crate) season: Season,
    /// Random number generator (deterministic)
    pub(crate) rng: ChaCha8Rng,
    pub(crate) config: ColonyConfig,
    pub(crate) chronicle: Chronicle,
}

impl Colony {
    /// Create an empty colony. Fails with `InvalidConfig` on a bad config.
    pub fn new(name: impl Into<String>, config: ColonyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(name.into(), config))
    }

    /// Colony with default settings and the given seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::build(
            name.into(),
            ColonyConfig {
                seed,
                ..ColonyConfig::default()
            },
        )
    }

    fn build(name: String, config: ColonyConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            name,
            packs: Vec::new(),
            solitary: Vec::new(),
            season: 0,
            rng,
            config,
            chronicle: Chronicle::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Replace the settings between seasons
    ///
    /// The seed only matters at construction; the random source keeps its
    /// state. An invalid config is rejected and the current one kept.
    pub fn set_config(&mut self, config: ColonyConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn chronicle(&self) -> &Chronicle {
        &self.chronicle
    }

    // === PACK REGISTRY ===

    /// Register an externally built pack
    pub fn add_pack(&mut self, pack: Pack) -> Result<PackId> {
        let id = pack.id();
        if self.pack(id).is_some() {
            return Err(PackError::DuplicatePack(id));
        }
        self.chronicle.record(
            self.season,
            ColonyEvent::PackFounded {
                pack: id,
                name: pack.name().to_string(),
            },
        );
        tracing::info!("{}: pack {} joined the colony", self.name, pack.name());
        self.packs.push(pack);
        Ok(id)
    }

    /// Found and register a pack around an alpha pair
    pub fn found_pack(
        &mut self,
        name: impl Into<String>,
        alpha_male: Werewolf,
        alpha_female: Werewolf,
    ) -> Result<PackId> {
        let id = PackId::from_rng(&mut self.rng);
        let pack = Pack::with_id(id, name, alpha_male, alpha_female)?;
        self.add_pack(pack)
    }

    pub fn packs(&self) -> &[Pack] {
        &self.packs
    }

    pub fn pack(&self, id: PackId) -> Option<&Pack> {
        self.packs.iter().find(|p| p.id() == id)
    }

    pub fn pack_mut(&mut self, id: PackId) -> Option<&mut Pack> {
        self.packs.iter_mut().find(|p| p.id() == id)
    }

    /// A pack together with the colony's random source, for direct pack
    /// operations that need randomness
    pub fn pack_with_rng(&mut self, id: PackId) -> Option<(&mut Pack, &mut ChaCha8Rng)> {
        let pack = self.packs.iter_mut().find(|p| p.id() == id)?;
        Some((pack, &mut self.rng))
    }

    /// Move a non-alpha werewolf between two registered packs
    ///
    /// Returns Ok(false) when the pack refuses the move (alpha, non-member,
    /// same pack or Alpha rank).
    pub fn transfer_member(
        &mut self,
        from: PackId,
        to: PackId,
        werewolf: WerewolfId,
        rank: Rank,
    ) -> Result<bool> {
        let src = self.index_of(from).ok_or(PackError::UnknownPack(from))?;
        let dst = self.index_of(to).ok_or(PackError::UnknownPack(to))?;
        if src == dst {
            return Ok(false);
        }

        let (source, target) = if src < dst {
            let (left, right) = self.packs.split_at_mut(dst);
            (&mut left[src], &mut right[0])
        } else {
            let (left, right) = self.packs.split_at_mut(src);
            (&mut right[0], &mut left[dst])
        };
        Ok(source.transfer_member(target, werewolf, rank))
    }

    fn index_of(&self, id: PackId) -> Option<usize> {
        self.packs.iter().position(|p| p.id() == id)
    }

    /// Pack holding the werewolf, if any
    pub fn pack_of(&self, werewolf: WerewolfId) -> Option<&Pack> {
        self.packs.iter().find(|p| p.contains(werewolf))
    }

    pub fn solitary(&self) -> &[Werewolf] {
        &self.solitary
    }

    /// Werewolves currently belonging to a pack
    pub fn total_werewolf_count(&self) -> usize {
        self.packs.iter().map(Pack::len).sum()
    }

    // === TIME ===

    /// Advance one season and return the new season number
    pub fn advance_time(&mut self) -> Season {
        self.season += 1;
        tracing::debug!("{}: season {}", self.name, self.season);

        systems::check_splits(self);
        systems::mating_season(self);
        systems::evolve_hierarchies(self);
        systems::age_werewolves(self);
        systems::howl(self);
        systems::transform_werewolves(self);
        systems::remove_empty_packs(self);

        self.season
    }

    /// Advance several seasons
    pub fn run(&mut self, seasons: u32) {
        for _ in 0..seasons {
            self.advance_time();
        }
    }
}
