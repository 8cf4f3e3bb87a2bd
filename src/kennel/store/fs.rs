use super::{Catalog, DataStore};
use crate::error::{KennelError, Result};
use crate::model::{Breed, Dog};
use std::fs;
use std::path::PathBuf;

const CATALOG_FILENAME: &str = "catalog.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn catalog_path(&self) -> PathBuf {
        self.root.join(CATALOG_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(KennelError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Catalog> {
        let path = self.catalog_path();
        if !path.exists() {
            return Ok(Catalog::default());
        }
        let content = fs::read_to_string(&path).map_err(KennelError::Io)?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(KennelError::Serialization)?;
        tracing::debug!(
            path = %path.display(),
            dogs = catalog.dogs.len(),
            breeds = catalog.breeds.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(catalog).map_err(KennelError::Serialization)?;
        fs::write(self.catalog_path(), content).map_err(KennelError::Io)?;
        Ok(())
    }

    fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Catalog) -> Result<()>,
    {
        let mut catalog = self.load()?;
        f(&mut catalog)?;
        self.save(&catalog)
    }
}

impl DataStore for FileStore {
    fn save_dog(&mut self, dog: &Dog) -> Result<()> {
        self.update(|catalog| {
            catalog.upsert_dog(dog);
            Ok(())
        })
    }

    fn get_dog(&self, id: &str) -> Result<Dog> {
        self.load()?
            .find_dog(id)
            .cloned()
            .ok_or_else(|| KennelError::DogNotFound(id.to_string()))
    }

    fn list_dogs(&self) -> Result<Vec<Dog>> {
        Ok(self.load()?.dogs)
    }

    fn delete_dog(&mut self, id: &str) -> Result<()> {
        self.update(|catalog| {
            if !catalog.remove_dog(id) {
                return Err(KennelError::DogNotFound(id.to_string()));
            }
            Ok(())
        })
    }

    fn list_breeds(&self) -> Result<Vec<Breed>> {
        Ok(self.load()?.breeds)
    }

    fn save_breeds(&mut self, breeds: &[Breed]) -> Result<()> {
        self.update(|catalog| {
            catalog.upsert_breeds(breeds);
            Ok(())
        })
    }

    fn wishlist(&self) -> Result<Vec<String>> {
        Ok(self.load()?.wishlist)
    }

    fn save_wishlist(&mut self, ids: &[String]) -> Result<()> {
        self.update(|catalog| {
            catalog.wishlist = ids.to_vec();
            Ok(())
        })
    }
}
