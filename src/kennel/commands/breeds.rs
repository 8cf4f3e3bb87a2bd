//! Breed reference data.
//!
//! Breeds are imported from a dogapi.dog v2 `/breeds` document:
//!
//! ```json
//! {"data": [{"id": "...", "attributes": {"name": "...", "description": "...",
//!   "life": {"min": 10, "max": 12}, "male_weight": {...},
//!   "female_weight": {...}, "hypoallergenic": false}}]}
//! ```
//!
//! Entries without `attributes` are skipped.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KennelError, Result};
use crate::model::Breed;
use crate::store::DataStore;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct BreedsDocument {
    #[serde(default)]
    data: Vec<BreedNode>,
}

#[derive(Debug, Deserialize)]
struct BreedNode {
    #[serde(default)]
    id: String,
    attributes: Option<BreedAttributes>,
}

#[derive(Debug, Deserialize)]
struct BreedAttributes {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    life: Range,
    #[serde(default)]
    male_weight: Range,
    #[serde(default)]
    female_weight: Range,
    #[serde(default)]
    hypoallergenic: bool,
}

#[derive(Debug, Default, Deserialize)]
struct Range {
    #[serde(default)]
    min: u32,
    #[serde(default)]
    max: u32,
}

pub fn parse_breeds(json: &str) -> Result<Vec<Breed>> {
    let doc: BreedsDocument = serde_json::from_str(json).map_err(KennelError::Serialization)?;
    Ok(doc
        .data
        .into_iter()
        .filter_map(|node| {
            let attrs = node.attributes?;
            Some(Breed {
                id: node.id,
                name: attrs.name,
                description: attrs.description,
                life_min: attrs.life.min,
                life_max: attrs.life.max,
                male_weight_min: attrs.male_weight.min,
                male_weight_max: attrs.male_weight.max,
                female_weight_min: attrs.female_weight.min,
                female_weight_max: attrs.female_weight.max,
                hypoallergenic: attrs.hypoallergenic,
            })
        })
        .collect())
}

pub fn import<S: DataStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let content = fs::read_to_string(path).map_err(KennelError::Io)?;
    let breeds = parse_breeds(&content)?;
    store.save_breeds(&breeds)?;
    tracing::info!(path = %path.display(), count = breeds.len(), "imported breeds");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} breed(s) from {}",
        breeds.len(),
        path.display()
    )));
    Ok(result.with_breeds(breeds))
}

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let breeds = store.list_breeds()?;
    let mut result = CmdResult::default();
    if breeds.is_empty() {
        result.add_message(CmdMessage::info(
            "No breeds known yet. Run `kennel breeds import <file>` first.",
        ));
    }
    Ok(result.with_breeds(breeds))
}
