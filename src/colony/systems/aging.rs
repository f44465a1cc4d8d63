//! Aging: werewolves grow older one year at a time

use rand::Rng;

use crate::colony::events::ColonyEvent;
use crate::colony::Colony;

/// Age each werewolf with the configured chance
///
/// Packs whose alphas aged out of adulthood hand the slot to an adult heir.
pub fn age_werewolves(colony: &mut Colony) {
    let Colony {
        packs,
        solitary,
        season,
        config,
        chronicle,
        rng,
        ..
    } = colony;

    for pack in packs.iter_mut() {
        for wolf in pack.members_mut() {
            if !rng.gen_bool(config.aging_chance) {
                continue;
            }
            if let Some(class) = wolf.age_one_year() {
                tracing::debug!("{} is now {:?}", wolf.name, class);
                chronicle.record(
                    *season,
                    ColonyEvent::AgeClassChanged {
                        werewolf: wolf.id(),
                        class,
                    },
                );
            }
        }

        if let Some(change) = pack.renew_alphas() {
            chronicle.record(
                *season,
                ColonyEvent::AlphaSuccession {
                    pack: pack.id(),
                    alpha_male: change.new_male,
                    alpha_female: change.new_female,
                },
            );
        }
    }

    for wolf in solitary.iter_mut() {
        if !rng.gen_bool(config.aging_chance) {
            continue;
        }
        if let Some(class) = wolf.age_one_year() {
            chronicle.record(
                *season,
                ColonyEvent::AgeClassChanged {
                    werewolf: wolf.id(),
                    class,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{AgeClass, Sex};
    use crate::pack::{Rank, Werewolf};

    #[test]
    fn test_certain_aging_moves_everyone_a_year() {
        let mut colony = Colony::with_seed("Armorica", 3);
        colony.config.aging_chance = 1.0;
        let id = colony
            .found_pack(
                "Carnac",
                Werewolf::new("M", Sex::Male, 12),
                Werewolf::new("F", Sex::Female, 12),
            )
            .unwrap();
        let pup = Werewolf::new("Pup", Sex::Female, 9);
        let pup_id = pup.id();
        colony.pack_mut(id).unwrap().add_member(pup, Rank::Gamma);

        age_werewolves(&mut colony);

        let pack = colony.pack(id).unwrap();
        assert!(pack.members().iter().all(|w| w.age == 13 || w.id() == pup_id));
        assert_eq!(pack.member(pup_id).unwrap().age_class, AgeClass::Adult);
        assert_eq!(
            colony.chronicle().count(|e| matches!(e, ColonyEvent::AgeClassChanged { .. })),
            1
        );
    }

    #[test]
    fn test_aging_disabled_changes_nothing() {
        let mut colony = Colony::with_seed("Armorica", 3);
        colony.config.aging_chance = 0.0;
        let id = colony
            .found_pack(
                "Carnac",
                Werewolf::new("M", Sex::Male, 12),
                Werewolf::new("F", Sex::Female, 12),
            )
            .unwrap();

        age_werewolves(&mut colony);

        assert!(colony.pack(id).unwrap().members().iter().all(|w| w.age == 12));
    }

    #[test]
    fn test_alpha_aging_out_is_replaced() {
        let mut colony = Colony::with_seed("Armorica", 3);
        colony.config.aging_chance = 1.0;
        let id = colony
            .found_pack(
                "Carnac",
                Werewolf::new("Grey King", Sex::Male, 19),
                Werewolf::new("F", Sex::Female, 12),
            )
            .unwrap();
        let heir = Werewolf::new("Heir", Sex::Male, 12);
        let heir_id = heir.id();
        colony.pack_mut(id).unwrap().add_member(heir, Rank::Beta);

        age_werewolves(&mut colony);

        let pack = colony.pack(id).unwrap();
        assert_eq!(pack.alpha_male(), heir_id);
        assert!(pack.is_consistent());
    }
}
