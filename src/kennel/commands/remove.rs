use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KennelError, Result};
use crate::store::DataStore;

/// Removes dogs by id. Unknown ids are reported, not treated as failures.
pub fn run<S: DataStore, I: AsRef<str>>(store: &mut S, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut wishlist = store.wishlist()?;

    for id in ids {
        let id = id.as_ref();
        let dog = match store.get_dog(id) {
            Ok(dog) => dog,
            Err(KennelError::DogNotFound(_)) => {
                result.add_message(CmdMessage::warning(format!("No dog with id {}", id)));
                continue;
            }
            Err(e) => return Err(e),
        };
        store.delete_dog(id)?;
        wishlist.retain(|wished| wished != id);
        tracing::info!(id, name = dog.name(), "removed dog");

        result.add_message(CmdMessage::success(format!(
            "Dog removed ({}): {}",
            id,
            dog.name()
        )));
        result.affected_dogs.push(dog);
    }

    store.save_wishlist(&wishlist)?;
    Ok(result)
}
