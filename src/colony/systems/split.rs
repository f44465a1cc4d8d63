//! Splitting oversized packs

use rand::Rng;

use crate::colony::events::ColonyEvent;
use crate::colony::Colony;
use crate::core::config::ColonyConfig;
use crate::core::types::{PackId, Season, Sex};
use crate::pack::level::level;
use crate::pack::{Pack, Rank};

/// Split every pack larger than the threshold
///
/// Packs created during this pass are not checked again until next season.
pub fn check_splits(colony: &mut Colony) {
    let Colony {
        packs,
        season,
        config,
        chronicle,
        rng,
        ..
    } = colony;

    let existing = packs.len();
    for idx in 0..existing {
        if packs[idx].len() <= config.split_threshold {
            continue;
        }

        let parent = &mut packs[idx];
        let before = parent.len();
        let Some(offspring) = split_pack(parent, *season, config, rng) else {
            continue;
        };

        tracing::info!(
            "{} split: {} leaves with {} members",
            parent.name(),
            offspring.name(),
            offspring.len()
        );
        chronicle.record(
            *season,
            ColonyEvent::PackSplit {
                parent: parent.id(),
                offspring: offspring.id(),
                name: offspring.name().to_string(),
                transferred: before - parent.len(),
            },
        );
        packs.push(offspring);
    }
}

/// Carve a new pack out of `parent`
///
/// Alpha candidates are non-alpha adults above the candidate level; the
/// first male and first female among them lead the new pack, which also
/// takes the first half of the remaining non-alpha members. Both packs are
/// re-ranked afterwards. Returns None, changing nothing, when fewer than
/// two candidates exist or either sex is missing among them.
pub fn split_pack(
    parent: &mut Pack,
    season: Season,
    config: &ColonyConfig,
    rng: &mut impl Rng,
) -> Option<Pack> {
    let candidates: Vec<_> = parent
        .members()
        .iter()
        .filter(|w| {
            w.is_adult() && !parent.is_alpha(w.id()) && level(w) > config.alpha_candidate_level
        })
        .collect();

    if candidates.len() < 2 {
        return None;
    }

    let male = candidates.iter().find(|w| w.sex == Sex::Male)?;
    let female = candidates.iter().find(|w| w.sex == Sex::Female)?;

    let name = format!("{}-Split-{}", parent.name(), season);
    let mut offspring = match Pack::with_id(
        PackId::from_rng(rng),
        name,
        (*male).clone(),
        (*female).clone(),
    ) {
        Ok(pack) => pack,
        Err(err) => {
            tracing::warn!("{}: split aborted: {}", parent.name(), err);
            return None;
        }
    };
    let (male_id, female_id) = (male.id(), female.id());
    parent.remove_member(male_id);
    parent.remove_member(female_id);

    let movers: Vec<_> = parent
        .ids()
        .into_iter()
        .filter(|&id| !parent.is_alpha(id))
        .collect();
    let half = movers.len() / 2;
    for id in movers.into_iter().take(half) {
        parent.transfer_member(&mut offspring, id, Rank::Gamma);
    }

    parent.rebuild_hierarchy();
    offspring.rebuild_hierarchy();
    Some(offspring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Sex;
    use crate::pack::Werewolf;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pack_with(extra: Vec<Werewolf>) -> Pack {
        let mut pack = Pack::new(
            "Carnac",
            Werewolf::new("Old King", Sex::Male, 12).with_strength(60.0),
            Werewolf::new("Old Queen", Sex::Female, 12).with_strength(60.0),
        )
        .unwrap();
        for wolf in extra {
            pack.add_member(wolf, Rank::Gamma);
        }
        pack
    }

    fn strong(sex: Sex, i: usize) -> Werewolf {
        Werewolf::new(format!("S{}", i), sex, 12).with_strength(80.0)
    }

    fn weak(sex: Sex, i: usize) -> Werewolf {
        Werewolf::new(format!("W{}", i), sex, 12)
            .with_strength(5.0)
            .with_health(10.0)
    }

    #[test]
    fn test_split_moves_half_and_keeps_both_consistent() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let config = ColonyConfig::default();
        let mut extra = Vec::new();
        for i in 0..10 {
            extra.push(strong(Sex::Male, i));
            extra.push(strong(Sex::Female, i));
        }
        let mut parent = pack_with(extra);
        let total = parent.len();

        let offspring = split_pack(&mut parent, 3, &config, &mut rng).unwrap();

        assert_eq!(offspring.name(), "Carnac-Split-3");
        assert_eq!(parent.len() + offspring.len(), total);
        // 20 extras - 2 new alphas = 18 movable, 9 move
        assert_eq!(offspring.len(), 11);
        assert!(parent.is_consistent());
        assert!(offspring.is_consistent());
        for wolf in offspring.members() {
            assert!(!parent.contains(wolf.id()));
            assert_eq!(wolf.pack(), Some(offspring.id()));
        }
    }

    #[test]
    fn test_split_needs_both_sexes_among_candidates() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let config = ColonyConfig::default();
        let mut extra: Vec<_> = (0..5).map(|i| strong(Sex::Male, i)).collect();
        extra.extend((0..12).map(|i| weak(Sex::Female, i)));
        let mut parent = pack_with(extra);
        let before = parent.ids();

        assert!(split_pack(&mut parent, 1, &config, &mut rng).is_none());
        assert_eq!(parent.ids(), before);
    }

    #[test]
    fn test_split_needs_two_candidates() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let config = ColonyConfig::default();
        let mut extra = vec![strong(Sex::Male, 0)];
        extra.extend((0..16).map(|i| weak(Sex::Female, i)));
        let mut parent = pack_with(extra);

        assert!(split_pack(&mut parent, 1, &config, &mut rng).is_none());
    }

    #[test]
    fn test_small_pack_never_split() {
        let mut colony = Colony::with_seed("Armorica", 4);
        let mut extra = Vec::new();
        for i in 0..6 {
            extra.push(strong(Sex::Male, i));
            extra.push(strong(Sex::Female, i));
        }
        let pack = pack_with(extra);
        assert!(pack.len() <= colony.config.split_threshold);
        colony.add_pack(pack).unwrap();

        check_splits(&mut colony);

        assert_eq!(colony.packs().len(), 1);
    }
}
