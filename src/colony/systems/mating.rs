//! Mating season: every pack produces a litter

use crate::colony::events::ColonyEvent;
use crate::colony::Colony;

pub fn is_mating_season(colony: &Colony) -> bool {
    colony.season % colony.config.mating_interval == 0
}

/// Every pack reproduces when the season is a multiple of the mating interval
pub fn mating_season(colony: &mut Colony) {
    if !is_mating_season(colony) {
        return;
    }

    let Colony {
        packs,
        season,
        chronicle,
        rng,
        ..
    } = colony;

    for pack in packs.iter_mut() {
        let litter = pack.reproduce(rng);
        tracing::info!("{}: {} cubs born", pack.name(), litter.len());
        chronicle.record(
            *season,
            ColonyEvent::LitterBorn {
                pack: pack.id(),
                cubs: litter.len(),
            },
        );
    }
}
