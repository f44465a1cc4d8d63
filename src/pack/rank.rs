//! Social ranks within a pack

use serde::{Deserialize, Serialize};

/// Social position, ordered from Alpha (highest) to Omega (lowest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Alpha,
    Beta,
    Gamma,
    Delta,
    Epsilon,
    Zeta,
    Eta,
    Theta,
    Omega,
}

impl Rank {
    pub const COUNT: usize = 9;

    /// All ranks in enumeration order
    pub fn all() -> &'static [Rank] {
        &[
            Rank::Alpha,
            Rank::Beta,
            Rank::Gamma,
            Rank::Delta,
            Rank::Epsilon,
            Rank::Zeta,
            Rank::Eta,
            Rank::Theta,
            Rank::Omega,
        ]
    }

    /// Ranks filled by level-based distribution, in fill order
    pub fn distributed() -> &'static [Rank] {
        &[Rank::Beta, Rank::Gamma, Rank::Delta, Rank::Epsilon]
    }

    /// Position in enumeration order (Alpha = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Value fed into the level formula; higher for higher ranks
    pub fn hierarchy_level(self) -> i32 {
        (Self::COUNT - self.index()) as i32
    }

    /// Returns true if this rank is strictly above the other
    pub fn outranks(self, other: Rank) -> bool {
        self.index() < other.index()
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Alpha => "alpha",
            Rank::Beta => "beta",
            Rank::Gamma => "gamma",
            Rank::Delta => "delta",
            Rank::Epsilon => "epsilon",
            Rank::Zeta => "zeta",
            Rank::Eta => "eta",
            Rank::Theta => "theta",
            Rank::Omega => "omega",
        }
    }
}
