use std::path::{Path, PathBuf};

use serde::Deserialize;

use olt_dump_core::DirectiveKind;

/// A required-directive set loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Checklist {
    #[serde(default)]
    pub required: Vec<DirectiveKind>,
}

/// Which migration phase a checklist describes. The after set is a superset
/// of the before set, adding the access-control group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Before,
    After,
}

impl Phase {
    pub fn file_name(self) -> &'static str {
        match self {
            Phase::Before => "before.toml",
            Phase::After => "after.toml",
        }
    }
}

pub fn load_checklist(phase: Phase, checklists_dir: Option<&Path>) -> Checklist {
    load_checklist_with_source(phase, checklists_dir).0
}

/// Load the checklist for a phase, preferring `<dir>/<phase>.toml` when a
/// directory is given and falling back to the embedded defaults.
pub fn load_checklist_with_source(
    phase: Phase,
    checklists_dir: Option<&Path>,
) -> (Checklist, String) {
    if let Some(dir) = checklists_dir {
        let path = checklist_path(dir, phase);
        match load_checklist_file(&path) {
            Ok(checklist) => return (checklist, format!("file:{}", path.display())),
            Err(err) => eprintln!(
                "warning: failed to load checklist from {} ({err}); using embedded defaults",
                path.display()
            ),
        }
    }
    (embedded_checklist(phase), "embedded".to_string())
}

fn embedded_checklist(phase: Phase) -> Checklist {
    let raw = match phase {
        Phase::Before => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/checklists/before.toml"
        )),
        Phase::After => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/checklists/after.toml"
        )),
    };
    toml::from_str(raw).expect("embedded checklist is valid TOML")
}

fn checklist_path(base: &Path, phase: Phase) -> PathBuf {
    base.join(phase.file_name())
}

fn load_checklist_file(path: &Path) -> Result<Checklist, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(Into::into)
}
