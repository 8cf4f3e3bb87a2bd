use crate::error::{KennelError, Result};
use crate::model::{Breed, Dog};
use crate::store::DataStore;

/// Dogs that are ready for adoption, in catalog order.
pub fn adoptable_dogs<S: DataStore>(store: &S) -> Result<Vec<Dog>> {
    Ok(store
        .list_dogs()?
        .into_iter()
        .filter(|dog| dog.is_ready())
        .collect())
}

/// Looks a breed up by name, ignoring case.
pub fn find_breed<S: DataStore>(store: &S, name: &str) -> Result<Breed> {
    store
        .list_breeds()?
        .into_iter()
        .find(|breed| breed.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| KennelError::BreedNotFound(name.to_string()))
}

/// Resolves wish list ids to dogs, skipping ids whose dog is gone.
pub fn wishlist_dogs<S: DataStore>(store: &S) -> Result<Vec<Dog>> {
    let dogs = store.list_dogs()?;
    Ok(store
        .wishlist()?
        .iter()
        .filter_map(|id| dogs.iter().find(|dog| dog.id() == id).cloned())
        .collect())
}
