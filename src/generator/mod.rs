pub mod height;
pub mod params;
pub mod salt;

pub use height::resolve_start_height;
pub use params::{resolve_rarity, resolve_rarity_with};
pub use salt::{generate_salt, generate_salt_with};
