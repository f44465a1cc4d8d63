//! Werewolf and colony generation
//!
//! Stands in for the character-creation collaborator: it rolls starting
//! attributes and seeds a colony with ranked packs.

use rand::Rng;

use crate::colony::Colony;
use crate::core::config::ColonyConfig;
use crate::core::error::Result;
use crate::core::types::{AgeClass, PackId, Sex, WerewolfId};
use crate::pack::{Pack, Rank, Werewolf};

const PACK_NAMES: &[&str] = &[
    "Broceliande",
    "Carnac",
    "Huelgoat",
    "Paimpont",
    "Kerlescan",
    "Morbihan",
    "Monts d'Arree",
    "Crozon",
];

const WEREWOLF_NAMES: &[&str] = &[
    "Bleiz", "Gwenn", "Loeiz", "Morgan", "Tanguy", "Nolwenn", "Erwan", "Maiwenn", "Ronan",
    "Enora", "Yann", "Soazig", "Gwilherm", "Azenor", "Konan", "Rozenn",
];

/// Roll a werewolf of the given sex and age
pub fn generate_werewolf(rng: &mut impl Rng, name: String, sex: Sex, age: u32) -> Werewolf {
    Werewolf::with_id(WerewolfId::from_rng(rng), name, sex, age)
        .with_strength(rng.gen_range(20.0..80.0))
        .with_stamina(rng.gen_range(10.0..50.0))
        .with_health(rng.gen_range(60.0..100.0))
        .with_belligerence(rng.gen_range(0.0..30.0))
        .with_impetuosity(rng.gen())
}

/// Roll an adult of the given sex
pub fn generate_adult(rng: &mut impl Rng, name: String, sex: Sex) -> Werewolf {
    let age = rng.gen_range(AgeClass::ADULT_AGE..AgeClass::OLD_AGE);
    generate_werewolf(rng, name, sex, age)
}

fn werewolf_name(rng: &mut impl Rng, pack_name: &str, index: usize) -> String {
    let given = WEREWOLF_NAMES[rng.gen_range(0..WEREWOLF_NAMES.len())];
    format!("{} of {} #{}", given, pack_name, index)
}

/// Build a ranked pack of `size` members, alphas included
pub fn generate_pack(rng: &mut impl Rng, name: &str, size: usize) -> Result<Pack> {
    let male_name = werewolf_name(rng, name, 0);
    let male = generate_adult(rng, male_name, Sex::Male);
    let female_name = werewolf_name(rng, name, 1);
    let female = generate_adult(rng, female_name, Sex::Female);
    let mut pack = Pack::with_id(PackId::from_rng(rng), name, male, female)?;

    for index in 2..size {
        let age = rng.gen_range(0..25);
        let sex = Sex::random(rng);
        let wolf_name = werewolf_name(rng, name, index);
        let wolf = generate_werewolf(rng, wolf_name, sex, age);
        pack.add_member(wolf, Rank::Gamma);
    }
    pack.rebuild_hierarchy();

    Ok(pack)
}

/// Seed a fresh colony with the configured number of packs
pub fn seed_colony(name: &str, config: ColonyConfig) -> Result<Colony> {
    let pack_count = config.starting_packs;
    let pack_size = config.starting_pack_size;
    let mut colony = Colony::new(name, config)?;

    for i in 0..pack_count {
        let base = PACK_NAMES[i % PACK_NAMES.len()];
        let pack_name = if i < PACK_NAMES.len() {
            base.to_string()
        } else {
            format!("{} {}", base, i / PACK_NAMES.len() + 1)
        };
        let pack = generate_pack(&mut colony.rng, &pack_name, pack_size)?;
        colony.add_pack(pack)?;
    }

    Ok(colony)
}
