use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::config::StructureConfig;
use crate::template::store::{TemplateKind, TemplateStore};
use crate::utils::error::Result;

/// Replaces every recognized placeholder token and validates the result by
/// parsing it. A substitution that does not yield well-formed JSON fails here,
/// before anything touches the filesystem.
pub fn render(template: &str, config: &StructureConfig, salt: &str) -> Result<Value> {
    let text = substitute(template, config, salt);
    Ok(serde_json::from_str(&text)?)
}

fn substitute(template: &str, config: &StructureConfig, salt: &str) -> String {
    template
        .replace("<MOD_ID>", &config.mod_id)
        .replace("<STRUCTURE_NAME>", &config.name)
        .replace("<BIOMES>", &config.biomes)
        .replace("<SALT>", salt)
        .replace("<RADIUS>", &config.radius.to_string())
        .replace("<RANGE>", &config.range.to_string())
        .replace("<START_HEIGHT>", &config.start_height)
        .replace("<TERRAIN_ADAPTATION>", config.terrain_adaptation.as_str())
        .replace("<SPACING>", &config.spacing.to_string())
        .replace("<SEPARATION>", &config.separation.to_string())
        .replace("<NETHER>", if config.nether { "_nether" } else { "" })
}

/// Writes the value with 4-space indentation, overwriting any existing file.
pub fn write_json(value: &Value, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut ser)?;
    // BufWriter's drop discards flush errors.
    writer.flush()?;
    Ok(())
}

/// Renders all three kinds for one structure under `out_root`, sharing one
/// salt across the batch. Creates kind subfolders as needed. The first
/// failure aborts the batch; files already written stay in place.
pub fn render_batch(
    store: &TemplateStore,
    out_root: &Path,
    config: &StructureConfig,
    salt: &str,
) -> Result<()> {
    for kind in TemplateKind::ALL {
        let template = store.load(kind)?;
        let value = render(&template, config, salt)?;

        let folder = out_root.join(kind.subfolder());
        fs::create_dir_all(&folder)?;
        let path = folder.join(kind.output_file_name(&config.name));
        write_json(&value, &path)?;

        info!("JSON file created: {}", path.display());
    }
    Ok(())
}
