use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::config::{SizeTier, StructureConfig, TerrainAdaptation};
use crate::generator::{generate_salt, resolve_rarity, resolve_start_height};
use crate::template::{render_batch, TemplateStore};
use crate::utils::error::Result;

/// One interactive session: settings prompts, a batch loop per structure
/// name, and an outer loop for entirely new settings. Nothing persists across
/// invocations besides the emitted files.
pub struct Session {
    store: TemplateStore,
    output_root: PathBuf,
}

impl Session {
    pub fn new(mod_id: &str) -> Self {
        Self {
            store: TemplateStore::default(),
            output_root: Path::new("output").join(mod_id.to_uppercase()),
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }
}

/// Entry point for the interactive flow. Errors abort the whole run; files
/// already written in the current batch are left in place.
pub fn run() -> Result<()> {
    let mod_id = prompt("\nEnter mod_id: ")?;
    let session = Session::new(&mod_id);

    loop {
        println!("\n--- New Structure Settings ---");
        let biomes = prompt("Enter biomes: ")?;
        let mut name = prompt("Enter structure name: ")?;
        let (radius, range) = prompt_size()?;
        let start_height =
            resolve_start_height(&prompt("Enter start height (e.g., '0' or '0 to 10'): ")?)?;
        let terrain_adaptation = TerrainAdaptation::parse(&prompt(
            "Enter terrain adaptation (none, beard_thin, beard_box, bury, encapsulate): ",
        )?)?;
        let rarity: i32 = prompt("Enter rarity (1-10): ")?.parse()?;
        let (spacing, separation) = resolve_rarity(rarity)?;
        let nether = confirm("Is this structure in the nether? (y/n): ")?;

        loop {
            let config = StructureConfig {
                mod_id: mod_id.clone(),
                name: name.clone(),
                biomes: biomes.clone(),
                radius,
                range,
                start_height: start_height.clone(),
                terrain_adaptation,
                spacing,
                separation,
                nether,
            };

            let salt = generate_salt();
            render_batch(&session.store, &session.output_root, &config, &salt)?;
            info!("Generated structure '{name}' with salt {salt}");

            if !confirm("\nDo you want to create another structure with the same settings? (y/n): ")?
            {
                break;
            }
            name = prompt("Enter new structure name: ")?;
        }

        if !confirm("\nDo you want to create another structure with different settings? (y/n): ")? {
            break;
        }
    }

    Ok(())
}

fn prompt_size() -> Result<(i32, i32)> {
    let tier = SizeTier::parse(&prompt("Enter size (small, medium, large, custom): ")?);
    match tier.dimensions() {
        Some(dims) => Ok(dims),
        None => {
            let radius = prompt("Enter custom radius: ")?.parse()?;
            let range = prompt("Enter custom range: ")?.parse()?;
            Ok((radius, range))
        }
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Only a literal `y` (any case) counts as yes, like the original prompts.
fn confirm(message: &str) -> Result<bool> {
    Ok(prompt(message)?.eq_ignore_ascii_case("y"))
}
