//! Pack hierarchy constants - all tunable values in one place

// Level formula weights
pub const STRENGTH_WEIGHT: f32 = 0.4;
pub const DOMINATION_WEIGHT: f32 = 0.3;
pub const RANK_WEIGHT: f32 = 0.2;
pub const HEALTH_WEIGHT: f32 = 0.1;

// Age class multipliers applied to the weighted sum
pub const YOUNG_LEVEL_MULTIPLIER: f32 = 0.8;
pub const ADULT_LEVEL_MULTIPLIER: f32 = 1.0;
pub const OLD_LEVEL_MULTIPLIER: f32 = 0.9;

// Omega selection: adults below this share of the mean adult strength
pub const OMEGA_STRENGTH_RATIO: f32 = 0.7;

// Dominance
pub const FAILED_DOMINATION_BELLIGERENCE: f32 = 15.0;

// Howl reception
pub const AGGRESSION_HOWL_BELLIGERENCE: f32 = 5.0;

// Litters (inclusive bounds)
pub const MIN_LITTER_SIZE: usize = 1;
pub const MAX_LITTER_SIZE: usize = 7;

// Cub starting attributes (half-open ranges)
pub const CUB_STRENGTH_MIN: f32 = 10.0;
pub const CUB_STRENGTH_MAX: f32 = 30.0;
pub const CUB_STAMINA_MIN: f32 = 5.0;
pub const CUB_STAMINA_MAX: f32 = 20.0;
pub const CUB_HEALTH: f32 = 100.0;
pub const CUB_HUNGER: f32 = 50.0;

// Transformation into human form
pub const TRANSFORM_STRENGTH_FACTOR: f32 = 0.5;
pub const TRANSFORM_STAMINA_FACTOR: f32 = 0.7;
