//! Mistborn asset enumerations.
//!
//! The numeric codes are part of the signed payload and must never be
//! renumbered; the names are what the node expects in wire JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HazeError;

/// How much data an asset carries on chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DensityLevel {
    /// Basic metadata, 5 KiB.
    Ethereal,
    /// Main attributes and textures, 50 KiB.
    Light,
    /// Full set plus 3D model, 5 MiB.
    Dense,
    /// All data plus history, 50 MiB.
    Core,
}

impl DensityLevel {
    pub const ALL: [DensityLevel; 4] = [Self::Ethereal, Self::Light, Self::Dense, Self::Core];

    /// Payload code.
    pub fn code(&self) -> u8 {
        match self {
            Self::Ethereal => 0,
            Self::Light => 1,
            Self::Dense => 2,
            Self::Core => 3,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, HazeError> {
        Self::ALL
            .into_iter()
            .find(|d| d.code() == code)
            .ok_or(HazeError::UnknownDensity(code))
    }

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethereal => "Ethereal",
            Self::Light => "Light",
            Self::Dense => "Dense",
            Self::Core => "Core",
        }
    }

    /// Maximum data size in bytes allowed at this level.
    pub fn max_size(&self) -> usize {
        match self {
            Self::Ethereal => 5 * 1024,
            Self::Light => 50 * 1024,
            Self::Dense => 5 * 1024 * 1024,
            Self::Core => 50 * 1024 * 1024,
        }
    }

    /// The level a Condense action moves to, `None` at `Core`.
    pub fn condensed(&self) -> Option<Self> {
        match self {
            Self::Ethereal => Some(Self::Light),
            Self::Light => Some(Self::Dense),
            Self::Dense => Some(Self::Core),
            Self::Core => None,
        }
    }

    /// The level an Evaporate action moves to, `None` at `Ethereal`.
    pub fn evaporated(&self) -> Option<Self> {
        match self {
            Self::Ethereal => None,
            Self::Light => Some(Self::Ethereal),
            Self::Dense => Some(Self::Light),
            Self::Core => Some(Self::Dense),
        }
    }
}

impl fmt::Display for DensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DensityLevel {
    type Err = HazeError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HazeError::InvalidName(s.to_string()))
    }
}

/// Lifecycle action applied to a Mistborn asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetAction {
    Create,
    Update,
    /// Increase density.
    Condense,
    /// Decrease density.
    Evaporate,
    Merge,
    Split,
}

impl AssetAction {
    pub const ALL: [AssetAction; 6] = [
        Self::Create,
        Self::Update,
        Self::Condense,
        Self::Evaporate,
        Self::Merge,
        Self::Split,
    ];

    /// Payload code.
    pub fn code(&self) -> u8 {
        match self {
            Self::Create => 0,
            Self::Update => 1,
            Self::Condense => 2,
            Self::Evaporate => 3,
            Self::Merge => 4,
            Self::Split => 5,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, HazeError> {
        Self::ALL
            .into_iter()
            .find(|a| a.code() == code)
            .ok_or(HazeError::UnknownAction(code))
    }

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Condense => "Condense",
            Self::Evaporate => "Evaporate",
            Self::Merge => "Merge",
            Self::Split => "Split",
        }
    }
}

impl fmt::Display for AssetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetAction {
    type Err = HazeError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HazeError::InvalidName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_codes_are_fixed() {
        let codes: Vec<u8> = DensityLevel::ALL.iter().map(|d| d.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3]);
        assert_eq!(DensityLevel::from_code(2).unwrap(), DensityLevel::Dense);
        assert_eq!(DensityLevel::from_code(4), Err(HazeError::UnknownDensity(4)));
    }

    #[test]
    fn action_codes_are_fixed() {
        let codes: Vec<u8> = AssetAction::ALL.iter().map(|a| a.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(AssetAction::from_code(5).unwrap(), AssetAction::Split);
        assert_eq!(AssetAction::from_code(6), Err(HazeError::UnknownAction(6)));
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("dense".parse::<DensityLevel>().unwrap(), DensityLevel::Dense);
        assert_eq!("MERGE".parse::<AssetAction>().unwrap(), AssetAction::Merge);
        assert!("Liquid".parse::<DensityLevel>().is_err());
    }

    #[test]
    fn serde_names_match_wire_names() {
        for d in DensityLevel::ALL {
            assert_eq!(serde_json::to_string(&d).unwrap(), format!("\"{}\"", d.as_str()));
        }
        for a in AssetAction::ALL {
            assert_eq!(serde_json::to_string(&a).unwrap(), format!("\"{}\"", a.as_str()));
        }
    }

    #[test]
    fn max_size_grows_with_density() {
        assert_eq!(DensityLevel::Ethereal.max_size(), 5 * 1024);
        assert!(DensityLevel::ALL.windows(2).all(|w| w[0].max_size() < w[1].max_size()));
    }

    #[test]
    fn condense_and_evaporate_walk_the_ladder() {
        assert_eq!(DensityLevel::Ethereal.condensed(), Some(DensityLevel::Light));
        assert_eq!(DensityLevel::Core.condensed(), None);
        assert_eq!(DensityLevel::Ethereal.evaporated(), None);
        for d in DensityLevel::ALL {
            if let Some(up) = d.condensed() {
                assert_eq!(up.evaporated(), Some(d));
            }
        }
    }
}
