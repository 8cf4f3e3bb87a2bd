use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KennelError, Result};
use crate::model::{Dog, Sex};
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::find_breed;

#[derive(Debug, Clone)]
pub struct NewDog {
    /// Generated when absent
    pub id: Option<String>,
    pub name: String,
    pub sex: Sex,
    pub breed: String,
    pub age: u32,
    pub weight: f64,
    pub price: f64,
    pub ready: bool,
    pub image: Option<String>,
}

pub fn run<S: DataStore>(store: &mut S, new_dog: NewDog) -> Result<CmdResult> {
    let id = new_dog
        .id
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string());

    if store.list_dogs()?.iter().any(|d| d.id() == id) {
        return Err(KennelError::DuplicateDog(id));
    }
    if new_dog.ready && new_dog.price <= 0.0 {
        return Err(KennelError::PriceRequired(new_dog.name));
    }

    let breed = find_breed(store, &new_dog.breed)?;
    let dog = Dog::with_price(
        id,
        new_dog.name,
        new_dog.sex,
        breed,
        new_dog.age,
        new_dog.weight,
        new_dog.price,
        new_dog.ready,
    )?;
    let dog = match new_dog.image {
        Some(image) => dog.with_image(image),
        None => dog,
    };
    store.save_dog(&dog)?;
    tracing::info!(id = dog.id(), name = dog.name(), "added dog");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Dog added ({}): {}",
        dog.id(),
        dog.name()
    )));
    Ok(result.with_affected_dogs(vec![dog]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn rex() -> NewDog {
        NewDog {
            id: Some("rex".into()),
            name: "Rex".into(),
            sex: Sex::Male,
            breed: "boxer".into(),
            age: 3,
            weight: 30.0,
            price: 0.0,
            ready: false,
            image: None,
        }
    }

    #[test]
    fn adds_dog_with_known_breed() {
        let mut store = StoreFixture::new().with_breeds(&["Boxer"]).build();
        let result = run(&mut store, rex()).unwrap();

        assert_eq!(result.affected_dogs.len(), 1);
        let saved = store.get_dog("rex").unwrap();
        assert_eq!(saved.breed().name, "Boxer");
        assert!(!saved.is_ready());
    }

    #[test]
    fn generates_an_id_when_missing() {
        let mut store = StoreFixture::new().with_breeds(&["Boxer"]).build();
        let result = run(&mut store, NewDog { id: None, ..rex() }).unwrap();

        let id = result.affected_dogs[0].id().to_string();
        assert_eq!(id.len(), 32);
        assert!(store.get_dog(&id).is_ok());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut store = StoreFixture::new().with_breeds(&["Boxer"]).build();
        run(&mut store, rex()).unwrap();
        assert!(matches!(
            run(&mut store, rex()),
            Err(KennelError::DuplicateDog(_))
        ));
    }

    #[test]
    fn rejects_unknown_breed() {
        let mut store = StoreFixture::new().with_breeds(&["Pug"]).build();
        assert!(matches!(
            run(&mut store, rex()),
            Err(KennelError::BreedNotFound(_))
        ));
    }

    #[test]
    fn ready_requires_a_price() {
        let mut store = StoreFixture::new().with_breeds(&["Boxer"]).build();
        let unpriced = NewDog {
            ready: true,
            ..rex()
        };
        assert!(matches!(
            run(&mut store, unpriced),
            Err(KennelError::PriceRequired(_))
        ));

        let priced = NewDog {
            ready: true,
            price: 250.0,
            ..rex()
        };
        run(&mut store, priced).unwrap();
        assert!(store.get_dog("rex").unwrap().is_ready());
    }

    #[test]
    fn keeps_the_image_path() {
        let mut store = StoreFixture::new().with_breeds(&["Boxer"]).build();
        let with_photo = NewDog {
            image: Some("photos/rex.jpg".into()),
            ..rex()
        };
        run(&mut store, with_photo).unwrap();
        assert_eq!(store.get_dog("rex").unwrap().image(), Some("photos/rex.jpg"));
    }

    #[test]
    fn invalid_fields_are_rejected_before_saving() {
        let mut store = StoreFixture::new().with_breeds(&["Boxer"]).build();
        let result = run(&mut store, NewDog { age: 0, ..rex() });
        assert!(matches!(result, Err(KennelError::InvalidDog(_))));
        assert!(store.list_dogs().unwrap().is_empty());
    }
}
