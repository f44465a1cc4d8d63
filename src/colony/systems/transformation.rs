//! Transformation into human form, and departures that follow it

use rand::Rng;

use crate::colony::events::ColonyEvent;
use crate::colony::Colony;
use crate::pack::level::level;

/// Turn werewolves human with the configured chance
///
/// A werewolf whose level before transforming reached the leave level may
/// abandon its pack and become solitary. Alphas always stay.
pub fn transform_werewolves(colony: &mut Colony) {
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
        for id in pack.ids() {
            let Some(wolf) = pack.member(id) else { continue };
            if wolf.is_human || !rng.gen_bool(config.transform_chance) {
                continue;
            }

            let level_before = level(wolf);
            if let Some(wolf) = pack.member_mut(id) {
                wolf.transform();
                tracing::debug!("{} took human form", wolf.name);
            }
            chronicle.record(
                *season,
                ColonyEvent::Transformed {
                    werewolf: id,
                    pack: pack.id(),
                },
            );

            if level_before < config.leave_level || pack.is_alpha(id) {
                continue;
            }
            if !rng.gen_bool(config.leave_chance) {
                continue;
            }
            if let Some(mut wolf) = pack.remove_member(id) {
                wolf.reset_standing();
                tracing::info!("{} left {}", wolf.name, pack.name());
                chronicle.record(
                    *season,
                    ColonyEvent::LeftPack {
                        werewolf: id,
                        pack: pack.id(),
                    },
                );
                solitary.push(wolf);
            }
        }
    }
}
