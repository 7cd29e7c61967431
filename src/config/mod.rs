pub mod structure;

pub use structure::{SizeTier, StructureConfig, TerrainAdaptation};
