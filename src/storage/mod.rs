pub mod wire;

use std::fs;
use std::path::Path;

use crate::error::RosterResult;
use crate::roster::Roster;

use wire::RosterFile;

/// Saves the whole roster as one document. The bytes go to a sibling temp
/// file and are renamed over the target, so a crash mid-write never leaves a
/// half-written file as a valid load target.
pub fn save(roster: &Roster, path: &Path) -> RosterResult<()> {
    let file = wire::encode(roster)?;
    let json = serde_json::to_string_pretty(&file)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load(path: &Path) -> RosterResult<Roster> {
    let json = fs::read_to_string(path)?;
    let file: RosterFile = serde_json::from_str(&json)?;
    wire::decode(file)
}

/// A missing file is a first run, not an error.
pub fn load_or_default(path: &Path) -> RosterResult<Roster> {
    if path.exists() {
        load(path)
    } else {
        Ok(Roster::new())
    }
}
