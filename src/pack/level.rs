//! Level calculation: a single scalar summarizing a werewolf's standing

use crate::core::types::AgeClass;
use crate::pack::constants::{
    ADULT_LEVEL_MULTIPLIER, DOMINATION_WEIGHT, HEALTH_WEIGHT, OLD_LEVEL_MULTIPLIER, RANK_WEIGHT,
    STRENGTH_WEIGHT, YOUNG_LEVEL_MULTIPLIER,
};
use crate::pack::werewolf::Werewolf;

/// Multiplier applied to the weighted attribute sum
pub fn age_multiplier(age_class: AgeClass) -> f32 {
    match age_class {
        AgeClass::Young => YOUNG_LEVEL_MULTIPLIER,
        AgeClass::Adult => ADULT_LEVEL_MULTIPLIER,
        AgeClass::Old => OLD_LEVEL_MULTIPLIER,
    }
}

/// Level of a werewolf
///
/// Pure: the same attributes always give the same level, which keeps
/// rank distribution deterministic.
pub fn level(wolf: &Werewolf) -> f32 {
    let weighted = wolf.strength * STRENGTH_WEIGHT
        + wolf.domination_score as f32 * DOMINATION_WEIGHT
        + wolf.rank_level as f32 * RANK_WEIGHT
        + wolf.health * HEALTH_WEIGHT;

    weighted * age_multiplier(wolf.age_class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Sex;
    use proptest::prelude::*;

    fn wolf(strength: f32, score: i32, rank_level: i32, health: f32) -> Werewolf {
        let mut w = Werewolf::new("Probe", Sex::Male, 12)
            .with_strength(strength)
            .with_domination_score(score)
            .with_health(health);
        w.rank_level = rank_level;
        w
    }

    #[test]
    fn test_weighted_sum_for_adult() {
        // 50*0.4 + 2*0.3 + 9*0.2 + 100*0.1 = 20 + 0.6 + 1.8 + 10
        let lvl = level(&wolf(50.0, 2, 9, 100.0));
        assert!((lvl - 32.4).abs() < 1e-4);
    }

    #[test]
    fn test_age_class_multipliers() {
        let base = wolf(50.0, 0, 0, 100.0);
        let adult = level(&base);
        let young = level(&base.clone().with_age_class(AgeClass::Young));
        let old = level(&base.with_age_class(AgeClass::Old));
        assert!((young - adult * 0.8).abs() < 1e-4);
        assert!((old - adult * 0.9).abs() < 1e-4);
    }

    #[test]
    fn test_level_is_stable() {
        let w = wolf(37.5, -3, 4, 88.0);
        assert_eq!(level(&w), level(&w));
    }

    proptest! {
        #[test]
        fn level_never_decreases_when_an_input_grows(
            strength in 0.0f32..200.0,
            score in -100i32..100,
            rank_level in 0i32..10,
            health in 0.0f32..200.0,
            bump in 0.0f32..50.0,
            step in 0i32..20,
        ) {
            let base = level(&wolf(strength, score, rank_level, health));

            prop_assert!(level(&wolf(strength + bump, score, rank_level, health)) >= base);
            prop_assert!(level(&wolf(strength, score + step, rank_level, health)) >= base);
            prop_assert!(level(&wolf(strength, score, rank_level + step, health)) >= base);
            prop_assert!(level(&wolf(strength, score, rank_level, health + bump)) >= base);
        }
    }
}
