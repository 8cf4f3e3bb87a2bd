use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::wishlist_dogs;

/// Adds a dog to the wish list. Adding it twice is reported, not repeated.
pub fn add<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let dog = store.get_dog(id)?;
    let mut ids = store.wishlist()?;
    let mut result = CmdResult::default();

    if ids.iter().any(|wished| wished == id) {
        result.add_message(CmdMessage::info(format!(
            "{} is already in your wishlist.",
            dog.name()
        )));
        return Ok(result);
    }

    ids.push(id.to_string());
    store.save_wishlist(&ids)?;
    tracing::info!(id, "added to wish list");
    result.add_message(CmdMessage::success(format!(
        "{} has been added to your wishlist.",
        dog.name()
    )));
    Ok(result.with_affected_dogs(vec![dog]))
}

pub fn remove<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut ids = store.wishlist()?;
    let mut result = CmdResult::default();

    let Some(pos) = ids.iter().position(|wished| wished == id) else {
        result.add_message(CmdMessage::warning(format!(
            "{} could not be found in the wish list.",
            id
        )));
        return Ok(result);
    };
    ids.remove(pos);
    store.save_wishlist(&ids)?;
    tracing::info!(id, "removed from wish list");

    let name = match store.get_dog(id) {
        Ok(dog) => dog.name().to_string(),
        Err(_) => id.to_string(),
    };
    result.add_message(CmdMessage::success(format!(
        "{} was removed from wish list.",
        name
    )));
    Ok(result)
}

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let dogs = wishlist_dogs(store)?;
    let mut result = CmdResult::default();
    if dogs.is_empty() {
        result.add_message(CmdMessage::info("Your wish list is empty."));
    }
    Ok(result.with_listed_dogs(dogs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::KennelError;
    use crate::model::Sex;
    use crate::store::memory::{fixtures::StoreFixture, InMemoryStore};

    fn store() -> InMemoryStore {
        StoreFixture::new()
            .with_dog("1", "Rosie", Sex::Female, "Beagle", 4, 300.0)
            .with_dog("2", "Max", Sex::Male, "Beagle", 2, 200.0)
            .build()
    }

    #[test]
    fn add_is_idempotent() {
        let mut store = store();
        let first = add(&mut store, "1").unwrap();
        assert_eq!(
            first.messages[0].content,
            "Rosie has been added to your wishlist."
        );

        let second = add(&mut store, "1").unwrap();
        assert_eq!(second.messages[0].content, "Rosie is already in your wishlist.");
        assert_eq!(store.wishlist().unwrap(), ["1"]);
    }

    #[test]
    fn add_unknown_dog_fails() {
        let mut store = store();
        assert!(matches!(
            add(&mut store, "9"),
            Err(KennelError::DogNotFound(_))
        ));
    }

    #[test]
    fn remove_reports_missing_ids() {
        let mut store = store();
        add(&mut store, "1").unwrap();

        let missing = remove(&mut store, "2").unwrap();
        assert_eq!(missing.messages[0].level, MessageLevel::Warning);
        assert_eq!(
            missing.messages[0].content,
            "2 could not be found in the wish list."
        );

        let removed = remove(&mut store, "1").unwrap();
        assert_eq!(removed.messages[0].content, "Rosie was removed from wish list.");
        assert!(store.wishlist().unwrap().is_empty());
    }

    #[test]
    fn list_keeps_insertion_order_and_skips_missing_dogs() {
        let mut store = store();
        add(&mut store, "2").unwrap();
        add(&mut store, "1").unwrap();
        store.delete_dog("1").unwrap();

        let result = list(&store).unwrap();
        let names: Vec<&str> = result.listed_dogs.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["Max"]);
    }
}
