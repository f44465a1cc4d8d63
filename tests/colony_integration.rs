//! Integration tests for the colony season loop

use armorica_packs::colony::generation::seed_colony;
use armorica_packs::colony::{Colony, ColonyEvent, ColonySummary};
use armorica_packs::core::config::ColonyConfig;
use armorica_packs::core::error::PackError;
use armorica_packs::core::types::Sex;
use armorica_packs::pack::{Rank, Werewolf};
use std::time::Duration;

fn crowded_colony() -> Colony {
    let mut colony = Colony::with_seed("Armorica", 21);
    let id = colony
        .found_pack(
            "Broceliande",
            Werewolf::new("Bleiz", Sex::Male, 12).with_strength(90.0),
            Werewolf::new("Gwenn", Sex::Female, 12).with_strength(90.0),
        )
        .unwrap();

    let pack = colony.pack_mut(id).unwrap();
    for i in 0..20 {
        pack.add_member(
            Werewolf::new(format!("Male {}", i), Sex::Male, 12).with_strength(80.0),
            Rank::Gamma,
        );
        pack.add_member(
            Werewolf::new(format!("Female {}", i), Sex::Female, 12).with_strength(80.0),
            Rank::Gamma,
        );
    }
    assert!(pack.level_of(pack.ids()[5]).unwrap() > 30.0);
    colony
}

#[test]
fn test_oversized_pack_splits_in_one_season() {
    let mut colony = crowded_colony();
    let original = colony.packs()[0].len();
    assert_eq!(original, 42);

    colony.advance_time();

    assert_eq!(colony.packs().len(), 2);
    for pack in colony.packs() {
        assert!(pack.len() < original);
        assert!(pack.is_consistent());
    }
    let offspring = &colony.packs()[1];
    assert_eq!(offspring.name(), "Broceliande-Split-1");
    assert_eq!(
        colony.chronicle().count(|e| matches!(e, ColonyEvent::PackSplit { .. })),
        1
    );
    assert!(colony.total_werewolf_count() + colony.solitary().len() <= original);
}

#[test]
fn test_pack_without_candidates_does_not_split() {
    let mut colony = Colony::new(
        "Armorica",
        ColonyConfig {
            seed: 3,
            domination_chance: 0.0,
            transform_chance: 0.0,
            ..ColonyConfig::default()
        },
    )
    .unwrap();
    let id = colony
        .found_pack(
            "Huelgoat",
            Werewolf::new("Bleiz", Sex::Male, 12),
            Werewolf::new("Gwenn", Sex::Female, 12),
        )
        .unwrap();
    for i in 0..20 {
        colony
            .pack_mut(id)
            .unwrap()
            .add_member(Werewolf::new(format!("Cub {}", i), Sex::Male, 0), Rank::Gamma);
    }

    colony.advance_time();

    assert_eq!(colony.packs().len(), 1);
    assert_eq!(colony.pack(id).unwrap().len(), 22);
}

#[test]
fn test_mating_season_adds_litters() {
    let mut colony = Colony::with_seed("Armorica", 8);
    let config = ColonyConfig {
        mating_interval: 1,
        transform_chance: 0.0,
        ..colony.config().clone()
    };
    colony.set_config(config).unwrap();
    let id = colony
        .found_pack(
            "Carnac",
            Werewolf::new("Bleiz", Sex::Male, 12),
            Werewolf::new("Gwenn", Sex::Female, 12),
        )
        .unwrap();

    colony.advance_time();

    let pack = colony.pack(id).unwrap();
    assert!(pack.len() >= 3);
    assert!(pack.members().iter().any(|w| w.name.starts_with("Carnac-cub-")));
    assert_eq!(
        colony.chronicle().count(|e| matches!(e, ColonyEvent::LitterBorn { .. })),
        1
    );
}

#[test]
fn test_invalid_config_never_reaches_the_season_loop() {
    let config = ColonyConfig {
        mating_interval: 0,
        ..ColonyConfig::default()
    };
    assert!(matches!(
        Colony::new("Armorica", config),
        Err(PackError::InvalidConfig(_))
    ));

    let mut colony = Colony::with_seed("Armorica", 5);
    let config = ColonyConfig {
        aging_chance: -0.5,
        ..ColonyConfig::default()
    };
    assert!(colony.set_config(config).is_err());
    colony.run(3);
    assert_eq!(colony.season(), 3);
}

#[test]
fn test_long_run_keeps_every_pack_consistent() {
    let config = ColonyConfig {
        seed: 1234,
        starting_packs: 4,
        starting_pack_size: 12,
        ..ColonyConfig::default()
    };
    let mut colony = seed_colony("Armorica", config).unwrap();

    for _ in 0..60 {
        colony.advance_time();
        for pack in colony.packs() {
            assert!(pack.is_consistent(), "{} lost consistency", pack.name());
            assert!(!pack.is_empty());
            assert!(pack.members().iter().all(|w| w.pack() == Some(pack.id())));
        }
        assert!(colony.solitary().iter().all(|w| w.is_solitary()));
    }

    assert_eq!(colony.season(), 60);
    assert!(colony.packs().len() >= 4);
}

#[test]
fn test_same_seed_same_history() {
    let config = ColonyConfig {
        seed: 777,
        ..ColonyConfig::default()
    };
    let mut a = seed_colony("Armorica", config.clone()).unwrap();
    let mut b = seed_colony("Armorica", config).unwrap();

    a.run(36);
    b.run(36);

    assert_eq!(a.chronicle().len(), b.chronicle().len());
    assert_eq!(a.chronicle().to_json().unwrap(), b.chronicle().to_json().unwrap());
    let sizes = |c: &Colony| c.packs().iter().map(|p| (p.name().to_string(), p.len())).collect::<Vec<_>>();
    assert_eq!(sizes(&a), sizes(&b));
}

#[test]
fn test_summary_counts_match_chronicle() {
    let mut colony = seed_colony("Armorica", ColonyConfig::default()).unwrap();
    colony.run(24);

    let summary = ColonySummary::new(&colony, Duration::from_millis(1));

    assert_eq!(summary.seasons, 24);
    assert_eq!(summary.packs.len(), colony.packs().len());
    assert_eq!(summary.werewolves, colony.total_werewolf_count());
    assert_eq!(summary.solitary, colony.solitary().len());
    // Mating seasons 12 and 24 for every pack alive at the time
    assert!(summary.litters >= 2 * ColonyConfig::default().starting_packs);
    assert!(summary.cubs_born >= summary.litters);
}
