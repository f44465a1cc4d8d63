//! Cleanup: packs without members leave the colony

use crate::colony::events::ColonyEvent;
use crate::colony::Colony;

/// Drop packs left without members
///
/// Alphas never leave their pack, so the season loop cannot empty one by
/// itself; this step guards packs emptied through other means.
pub fn remove_empty_packs(colony: &mut Colony) {
    let Colony {
        packs,
        season,
        chronicle,
        ..
    } = colony;

    packs.retain(|pack| {
        if !pack.is_empty() {
            return true;
        }
        tracing::info!("{} disbanded", pack.name());
        chronicle.record(
            *season,
            ColonyEvent::PackDisbanded {
                pack: pack.id(),
                name: pack.name().to_string(),
            },
        );
        false
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Sex;
    use crate::pack::Werewolf;

    #[test]
    fn test_populated_packs_survive_cleanup() {
        let mut colony = Colony::with_seed("Armorica", 8);
        colony
            .found_pack(
                "Carnac",
                Werewolf::new("M", Sex::Male, 12),
                Werewolf::new("F", Sex::Female, 12),
            )
            .unwrap();

        remove_empty_packs(&mut colony);

        assert_eq!(colony.packs().len(), 1);
        assert_eq!(
            colony.chronicle().count(|e| matches!(e, ColonyEvent::PackDisbanded { .. })),
            0
        );
    }

    #[test]
    fn test_empty_pack_disbanded() {
        let mut colony = Colony::with_seed("Armorica", 8);
        let gone = colony
            .found_pack(
                "Carnac",
                Werewolf::new("M", Sex::Male, 12),
                Werewolf::new("F", Sex::Female, 12),
            )
            .unwrap();
        let kept = colony
            .found_pack(
                "Crozon",
                Werewolf::new("M", Sex::Male, 12),
                Werewolf::new("F", Sex::Female, 12),
            )
            .unwrap();
        colony.pack_mut(gone).unwrap().clear_members();

        remove_empty_packs(&mut colony);

        assert!(colony.pack(gone).is_none());
        assert!(colony.pack(kept).is_some());
        let disbanded: Vec<_> = colony
            .chronicle()
            .entries
            .iter()
            .filter_map(|e| match &e.event {
                ColonyEvent::PackDisbanded { pack, name } => Some((*pack, name.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(disbanded, vec![(gone, "Carnac".to_string())]);
    }
}
