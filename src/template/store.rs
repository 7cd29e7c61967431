use std::fs;
use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::utils::error::Result;

/// The three output kinds, in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Structure,
    StructureSet,
    TemplatePool,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Structure,
        TemplateKind::StructureSet,
        TemplateKind::TemplatePool,
    ];

    /// Output subfolder under `output/<MOD_ID>/`.
    pub fn subfolder(self) -> &'static str {
        match self {
            TemplateKind::Structure => "structure",
            TemplateKind::StructureSet => "structure_set",
            TemplateKind::TemplatePool => "template_pool",
        }
    }

    pub fn template_file(self) -> &'static str {
        match self {
            TemplateKind::Structure => "template_structure.txt",
            TemplateKind::StructureSet => "template_structure_set.txt",
            TemplateKind::TemplatePool => "template_template_pool.txt",
        }
    }

    /// The start pool file carries a suffix so it cannot collide with the
    /// structure file when a datapack flattens the folders.
    pub fn output_file_name(self, structure_name: &str) -> String {
        match self {
            TemplateKind::TemplatePool => format!("{structure_name}_start_pool.json"),
            _ => format!("{structure_name}.json"),
        }
    }
}

/// Process-lifetime table of template locations.
static DEFAULT_TEMPLATE_DIR: Lazy<PathBuf> = Lazy::new(|| PathBuf::from("templates"));

pub struct TemplateStore {
    root: PathBuf,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_DIR.as_path())
    }
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, kind: TemplateKind) -> PathBuf {
        self.root.join(kind.template_file())
    }

    /// Loads fresh from disk on every call; templates are small and edits
    /// between batches should take effect immediately.
    pub fn load(&self, kind: TemplateKind) -> Result<String> {
        Ok(fs::read_to_string(self.path_for(kind))?)
    }
}
