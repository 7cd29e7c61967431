pub mod config;
pub mod generator;
pub mod session;
pub mod template;
pub mod utils;

// Re-export commonly used types
pub use config::structure::{SizeTier, StructureConfig, TerrainAdaptation};
pub use generator::{generate_salt, resolve_rarity, resolve_start_height};
pub use template::{render_batch, TemplateKind, TemplateStore};
pub use utils::error::{GenError, Result};
