use rand::Rng;

use crate::utils::error::{GenError, Result};

/// Derives (spacing, separation) from a rarity in [1, 10].
///
/// Rarity 1 centers on spacing 20 / separation 5, rarity 10 on 110 / 23;
/// both values get an independent ±10% jitter. Spacing is forced above
/// separation afterwards, since the placement grid rejects the reverse.
pub fn resolve_rarity(rarity: i32) -> Result<(i32, i32)> {
    resolve_rarity_with(rarity, &mut rand::thread_rng())
}

pub fn resolve_rarity_with<R: Rng + ?Sized>(rarity: i32, rng: &mut R) -> Result<(i32, i32)> {
    if !(1..=10).contains(&rarity) {
        return Err(GenError::InvalidRarity(rarity));
    }

    let base_spacing = 20 + (rarity - 1) * 10;
    let base_separation = 5 + (rarity - 1) * 2;

    let mut spacing = (base_spacing as f64 * rng.gen_range(0.9..=1.1)) as i32;
    let separation = (base_separation as f64 * rng.gen_range(0.9..=1.1)) as i32;

    if spacing <= separation {
        spacing = separation + 5;
    }

    Ok((spacing, separation))
}
