use serde::{Deserialize, Serialize};

use crate::utils::error::{GenError, Result};

/// Coarse footprint of a structure, mapped to fixed (radius, range) pairs.
/// Any unrecognized token is treated as a request for custom dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeTier {
    Small,
    Medium,
    Large,
    Custom,
}

impl SizeTier {
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "small" => SizeTier::Small,
            "medium" => SizeTier::Medium,
            "large" => SizeTier::Large,
            _ => SizeTier::Custom,
        }
    }

    /// Fixed (radius, range) for the named tiers; `None` means the operator
    /// supplies both values directly.
    pub fn dimensions(self) -> Option<(i32, i32)> {
        match self {
            SizeTier::Small => Some((1, 3)),
            SizeTier::Medium => Some((3, 5)),
            SizeTier::Large => Some((5, 8)),
            SizeTier::Custom => None,
        }
    }
}

/// How the generated structure conforms to surrounding terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainAdaptation {
    None,
    BeardThin,
    BeardBox,
    Bury,
    Encapsulate,
}

impl TerrainAdaptation {
    pub fn parse(token: &str) -> Result<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(TerrainAdaptation::None),
            "beard_thin" => Ok(TerrainAdaptation::BeardThin),
            "beard_box" => Ok(TerrainAdaptation::BeardBox),
            "bury" => Ok(TerrainAdaptation::Bury),
            "encapsulate" => Ok(TerrainAdaptation::Encapsulate),
            other => Err(GenError::InvalidTerrainAdaptation(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TerrainAdaptation::None => "none",
            TerrainAdaptation::BeardThin => "beard_thin",
            TerrainAdaptation::BeardBox => "beard_box",
            TerrainAdaptation::Bury => "bury",
            TerrainAdaptation::Encapsulate => "encapsulate",
        }
    }
}

/// Everything needed to render one batch of output files. Lives only for the
/// duration of that batch; nothing is persisted besides the emitted JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureConfig {
    pub mod_id: String,
    pub name: String,
    /// Free-form biome specification, substituted verbatim.
    pub biomes: String,
    pub radius: i32,
    pub range: i32,
    /// Pre-rendered start-height JSON fragment.
    pub start_height: String,
    pub terrain_adaptation: TerrainAdaptation,
    pub spacing: i32,
    pub separation: i32,
    pub nether: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_tier_dimensions() {
        assert_eq!(SizeTier::Small.dimensions(), Some((1, 3)));
        assert_eq!(SizeTier::Medium.dimensions(), Some((3, 5)));
        assert_eq!(SizeTier::Large.dimensions(), Some((5, 8)));
        assert_eq!(SizeTier::Custom.dimensions(), None);
    }

    #[test]
    fn test_size_tier_parse_unknown_is_custom() {
        assert_eq!(SizeTier::parse("Medium"), SizeTier::Medium);
        assert_eq!(SizeTier::parse("huge"), SizeTier::Custom);
        assert_eq!(SizeTier::parse(""), SizeTier::Custom);
    }

    #[test]
    fn test_terrain_adaptation_parse() {
        assert_eq!(
            TerrainAdaptation::parse("beard_thin").unwrap(),
            TerrainAdaptation::BeardThin
        );
        assert_eq!(
            TerrainAdaptation::parse(" Bury ").unwrap(),
            TerrainAdaptation::Bury
        );
        assert!(TerrainAdaptation::parse("floating").is_err());
    }

    #[test]
    fn test_terrain_adaptation_round_trip() {
        for mode in [
            TerrainAdaptation::None,
            TerrainAdaptation::BeardThin,
            TerrainAdaptation::BeardBox,
            TerrainAdaptation::Bury,
            TerrainAdaptation::Encapsulate,
        ] {
            assert_eq!(TerrainAdaptation::parse(mode.as_str()).unwrap(), mode);
        }
    }
}
