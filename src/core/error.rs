use thiserror::Error;

use crate::core::types::{PackId, Sex};

/// Why a werewolf cannot hold an alpha slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaRejection {
    /// Candidate is not a member of the pack
    Missing,
    WrongSex { expected: Sex },
    NotAdult,
}

impl std::fmt::Display for AlphaRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlphaRejection::Missing => write!(f, "candidate is not a pack member"),
            AlphaRejection::WrongSex { expected } => write!(f, "slot requires a {:?}", expected),
            AlphaRejection::NotAdult => write!(f, "candidate is not an adult"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PackError {
    #[error("Invalid alpha pair: {0}")]
    InvalidAlphaPair(AlphaRejection),

    #[error("Pack already registered: {0:?}")]
    DuplicatePack(PackId),

    #[error("Pack not found: {0:?}")]
    UnknownPack(PackId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PackError>;
