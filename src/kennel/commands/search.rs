use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::{FilterSpec, QueryPlanner, SortSpec};
use crate::store::DataStore;

use super::helpers::adoptable_dogs;

/// Filters and orders the dogs that are ready for adoption.
pub fn run<S: DataStore>(store: &S, filter: &FilterSpec, sort: &SortSpec) -> Result<CmdResult> {
    let dogs = adoptable_dogs(store)?;
    let matched: Vec<_> = QueryPlanner::new()
        .plan(&dogs, filter, sort)?
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if matched.is_empty() {
        result.add_message(CmdMessage::info("No dogs match your search."));
    }
    Ok(result.with_listed_dogs(matched))
}
