use serde_json::json;

use crate::utils::error::{GenError, Result};

/// Turns a start-height answer into the JSON fragment the structure template
/// splices in. `"<a> to <b>"` becomes a uniform height provider, a bare
/// integer becomes a fixed absolute anchor.
///
/// Range bounds are taken as given: no ordering check and no sign
/// restriction, matching the established output format.
pub fn resolve_start_height(spec: &str) -> Result<String> {
    let spec = spec.trim();

    if let Some((min, max)) = spec.split_once(" to ") {
        let (min, max) = (min.trim(), max.trim());
        if !is_integer_literal(min) || !is_integer_literal(max) {
            return Err(GenError::InvalidStartHeight(spec.to_string()));
        }
        let min: i64 = min.parse()?;
        let max: i64 = max.parse()?;
        Ok(json!({
            "type": "minecraft:uniform",
            "max_inclusive": { "absolute": max },
            "min_inclusive": { "absolute": min },
        })
        .to_string())
    } else if is_integer_literal(spec) {
        let value: i64 = spec.parse()?;
        Ok(json!({ "absolute": value }).to_string())
    } else {
        Err(GenError::InvalidStartHeight(spec.to_string()))
    }
}

/// Optional single `-` then digits. A leading `+` is rejected; JSON numbers
/// do not allow one, so it never belonged in a fragment.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
