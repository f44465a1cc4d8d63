//! Howling: werewolves call out to their packmates

use rand::Rng;

use crate::colony::events::ColonyEvent;
use crate::colony::Colony;
use crate::pack::HowlType;

pub fn howl(colony: &mut Colony) {
    let Colony {
        packs,
        season,
        config,
        chronicle,
        rng,
        ..
    } = colony;

    for pack in packs.iter_mut() {
        for sender in pack.ids() {
            if !rng.gen_bool(config.howl_chance) {
                continue;
            }
            let howl = HowlType::random(rng);
            let reactions = pack.notify_howl(sender, howl, rng);
            chronicle.record(
                *season,
                ColonyEvent::Howl {
                    pack: pack.id(),
                    sender,
                    howl,
                    reactions: reactions.len(),
                },
            );
        }
    }
}
