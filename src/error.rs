use std::fmt;

use crate::surface::AssetSlot;

#[derive(Clone, Debug, PartialEq)]
pub enum GameError {
    TooFewAssets { supplied: usize, required: usize },
    EmptyAsset { slot: AssetSlot },
    Settings(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewAssets { supplied, required } => {
                write!(f, "too few assets: got {supplied}, need {required}")
            }
            Self::EmptyAsset { slot } => write!(f, "asset for {slot:?} has zero width or height"),
            Self::Settings(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for GameError {}
