use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KennelError, Result};
use crate::model::Dog;
use crate::store::DataStore;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use super::helpers::wishlist_dogs;

/// Writes the wish list as a JSON array of dogs.
///
/// Without a target the file lands in the current directory as
/// `wishlist-<timestamp>.json`. A target missing the `.json` extension gets
/// one; an existing file is overwritten.
pub fn run<S: DataStore>(store: &S, target: Option<&Path>) -> Result<CmdResult> {
    let dogs = wishlist_dogs(store)?;

    if dogs.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("Your wish list is empty, nothing to export."));
        return Ok(res);
    }

    let path = match target {
        Some(path) => with_json_extension(path),
        None => PathBuf::from(format!(
            "wishlist-{}.json",
            Local::now().format("%Y-%m-%d_%H-%M-%S")
        )),
    };
    fs::write(&path, wishlist_json(&dogs)?).map_err(KennelError::Io)?;
    tracing::info!(path = %path.display(), dogs = dogs.len(), "exported wish list");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} dog(s) to {}",
        dogs.len(),
        path.display()
    )));
    Ok(result.with_export_path(path))
}

pub fn wishlist_json(dogs: &[Dog]) -> Result<String> {
    serde_json::to_string(dogs).map_err(KennelError::Serialization)
}

fn with_json_extension(path: &Path) -> PathBuf {
    if path.to_string_lossy().to_lowercase().ends_with(".json") {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".json");
    PathBuf::from(name)
}
