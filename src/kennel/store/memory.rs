use super::{Catalog, DataStore};
use crate::error::{KennelError, Result};
use crate::model::{Breed, Dog};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    catalog: Catalog,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_dog(&mut self, dog: &Dog) -> Result<()> {
        self.catalog.upsert_dog(dog);
        Ok(())
    }

    fn get_dog(&self, id: &str) -> Result<Dog> {
        self.catalog
            .find_dog(id)
            .cloned()
            .ok_or_else(|| KennelError::DogNotFound(id.to_string()))
    }

    fn list_dogs(&self) -> Result<Vec<Dog>> {
        Ok(self.catalog.dogs.clone())
    }

    fn delete_dog(&mut self, id: &str) -> Result<()> {
        if !self.catalog.remove_dog(id) {
            return Err(KennelError::DogNotFound(id.to_string()));
        }
        Ok(())
    }

    fn list_breeds(&self) -> Result<Vec<Breed>> {
        Ok(self.catalog.breeds.clone())
    }

    fn save_breeds(&mut self, breeds: &[Breed]) -> Result<()> {
        self.catalog.upsert_breeds(breeds);
        Ok(())
    }

    fn wishlist(&self) -> Result<Vec<String>> {
        Ok(self.catalog.wishlist.clone())
    }

    fn save_wishlist(&mut self, ids: &[String]) -> Result<()> {
        self.catalog.wishlist = ids.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Sex;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_breeds(mut self, names: &[&str]) -> Self {
            let breeds: Vec<Breed> = names.iter().map(|n| Breed::named(*n)).collect();
            self.store.save_breeds(&breeds).unwrap();
            self
        }

        /// Adds a dog; a positive `price` also marks it ready for adoption.
        pub fn with_dog(
            mut self,
            id: &str,
            name: &str,
            sex: Sex,
            breed: &str,
            age: u32,
            price: f64,
        ) -> Self {
            let ready = price > 0.0;
            let dog = Dog::with_price(
                id,
                name,
                sex,
                Breed::named(breed),
                age,
                10.0 + age as f64,
                price,
                ready,
            )
            .unwrap();
            self.store.save_dog(&dog).unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
