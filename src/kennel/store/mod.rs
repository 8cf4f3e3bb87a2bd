//! # Storage Layer
//!
//! This module defines the storage abstraction for kennel. The [`DataStore`]
//! trait lets the commands work against different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - The whole catalog lives in one `catalog.json` under the data directory
//!   - A missing file reads as an empty catalog; it is created on first write
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## What a store holds
//!
//! ```text
//! <data dir>/
//! ├── catalog.json   # dogs (insertion order), breeds, wish list ids
//! └── config.json    # KennelConfig
//! ```
//!
//! Dogs keep their insertion order; saving an existing id replaces it in
//! place. Queries run over `list_dogs()` snapshots, so that order is the
//! order unsorted results come back in.

use crate::error::Result;
use crate::model::{Breed, Dog};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
pub trait DataStore {
    /// Insert a dog, or replace the one with the same id in place
    fn save_dog(&mut self, dog: &Dog) -> Result<()>;

    /// Get a dog by id
    fn get_dog(&self, id: &str) -> Result<Dog>;

    /// List every dog in insertion order
    fn list_dogs(&self) -> Result<Vec<Dog>>;

    /// Delete a dog permanently
    fn delete_dog(&mut self, id: &str) -> Result<()>;

    /// List known breeds, sorted by name
    fn list_breeds(&self) -> Result<Vec<Breed>>;

    /// Insert or replace breeds, matched by name
    fn save_breeds(&mut self, breeds: &[Breed]) -> Result<()>;

    /// Dog ids on the wish list, in the order they were added
    fn wishlist(&self) -> Result<Vec<String>>;

    /// Replace the wish list
    fn save_wishlist(&mut self, ids: &[String]) -> Result<()>;
}

/// The persisted shape shared by both stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub dogs: Vec<Dog>,
    #[serde(default)]
    pub breeds: Vec<Breed>,
    #[serde(default)]
    pub wishlist: Vec<String>,
}

impl Catalog {
    pub fn find_dog(&self, id: &str) -> Option<&Dog> {
        self.dogs.iter().find(|d| d.id() == id)
    }

    pub fn upsert_dog(&mut self, dog: &Dog) {
        match self.dogs.iter_mut().find(|d| d.id() == dog.id()) {
            Some(existing) => *existing = dog.clone(),
            None => self.dogs.push(dog.clone()),
        }
    }

    /// Returns false when no dog had that id.
    pub fn remove_dog(&mut self, id: &str) -> bool {
        let before = self.dogs.len();
        self.dogs.retain(|d| d.id() != id);
        self.dogs.len() != before
    }

    pub fn upsert_breeds(&mut self, breeds: &[Breed]) {
        for breed in breeds {
            match self.breeds.iter_mut().find(|b| b.name == breed.name) {
                Some(existing) => *existing = breed.clone(),
                None => self.breeds.push(breed.clone()),
            }
        }
        self.breeds.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;

    fn dog(id: &str, name: &str) -> Dog {
        Dog::new(id, name, Sex::Male, Breed::named("Pug"), 2, 8.0).unwrap()
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut catalog = Catalog::default();
        catalog.upsert_dog(&dog("a", "First"));
        catalog.upsert_dog(&dog("b", "Second"));
        catalog.upsert_dog(&dog("a", "Renamed"));

        let names: Vec<&str> = catalog.dogs.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["Renamed", "Second"]);
    }

    #[test]
    fn upsert_breeds_keeps_them_sorted() {
        let mut catalog = Catalog::default();
        catalog.upsert_breeds(&[Breed::named("Pug"), Breed::named("Akita")]);
        catalog.upsert_breeds(&[Breed::named("Pug")]);

        let names: Vec<&str> = catalog.breeds.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Akita", "Pug"]);
    }

    #[test]
    fn remove_reports_missing_ids() {
        let mut catalog = Catalog::default();
        catalog.upsert_dog(&dog("a", "First"));
        assert!(catalog.remove_dog("a"));
        assert!(!catalog.remove_dog("a"));
    }
}
