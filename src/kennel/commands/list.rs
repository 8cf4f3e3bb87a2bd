use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::{Field, FilterSpec, QueryPlanner, SortSpec};
use crate::store::DataStore;

use super::helpers::adoptable_dogs;

/// Lists the catalog: every dog, or only the ones ready for adoption.
pub fn run<S: DataStore>(store: &S, include_unready: bool) -> Result<CmdResult> {
    let dogs = if include_unready {
        store.list_dogs()?
    } else {
        adoptable_dogs(store)?
    };
    Ok(CmdResult::default().with_listed_dogs(dogs))
}

/// The landing list: adoptable dogs, youngest first.
pub fn home<S: DataStore>(store: &S) -> Result<CmdResult> {
    let dogs = adoptable_dogs(store)?;
    let ordered = QueryPlanner::new()
        .plan(&dogs, &FilterSpec::new(), &SortSpec::asc(Field::Age))?
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_dogs(ordered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;
    use crate::store::memory::fixtures::StoreFixture;

    fn names(result: &CmdResult) -> Vec<&str> {
        result.listed_dogs.iter().map(|d| d.name()).collect()
    }

    #[test]
    fn lists_only_adoptable_by_default() {
        let store = StoreFixture::new()
            .with_dog("a", "Al", Sex::Male, "Pug", 2, 100.0)
            .with_dog("b", "Bo", Sex::Male, "Pug", 3, 0.0)
            .build();

        assert_eq!(names(&run(&store, false).unwrap()), ["Al"]);
        assert_eq!(names(&run(&store, true).unwrap()), ["Al", "Bo"]);
    }

    #[test]
    fn home_orders_youngest_first() {
        let store = StoreFixture::new()
            .with_dog("a", "Two", Sex::Male, "Pug", 2, 100.0)
            .with_dog("b", "Five", Sex::Male, "Pug", 5, 100.0)
            .with_dog("c", "Four", Sex::Female, "Pug", 4, 100.0)
            .with_dog("d", "Unready", Sex::Female, "Pug", 1, 0.0)
            .build();

        assert_eq!(names(&home(&store).unwrap()), ["Two", "Four", "Five"]);
    }
}
