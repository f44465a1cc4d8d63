//! Hierarchy evolution: random dominance contests, then omega selection

use rand::Rng;

use crate::colony::events::ColonyEvent;
use crate::colony::Colony;
use crate::pack::DominationOutcome;

pub fn evolve_hierarchies(colony: &mut Colony) {
    let Colony {
        packs,
        season,
        config,
        chronicle,
        rng,
        ..
    } = colony;

    for pack in packs.iter_mut() {
        for _ in 0..config.domination_attempts {
            if !rng.gen_bool(config.domination_chance) {
                continue;
            }

            let ids = pack.ids();
            if ids.len() < 2 {
                break;
            }
            // Two distinct indices
            let a = rng.gen_range(0..ids.len());
            let mut t = rng.gen_range(0..ids.len() - 1);
            if t >= a {
                t += 1;
            }

            let contest = pack.contest(ids[a], ids[t], rng);
            if let DominationOutcome::Refused(_) = contest.outcome {
                continue;
            }

            chronicle.record(
                *season,
                ColonyEvent::Domination {
                    pack: pack.id(),
                    aggressor: ids[a],
                    target: ids[t],
                    succeeded: contest.outcome.is_success(),
                },
            );
            if let Some(change) = contest.succession {
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

        let demoted = pack.identify_omegas();
        if !demoted.is_empty() {
            chronicle.record(
                *season,
                ColonyEvent::OmegasIdentified {
                    pack: pack.id(),
                    demoted,
                },
            );
        }
    }
}
