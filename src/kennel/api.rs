//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all kennel operations, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw filter text to a typed [`FilterSpec`], sort
//!   keys to a [`SortSpec`], falling back to the configured default sort)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no terminal I/O and no formatting.
//!
//! ## Generic Over DataStore
//!
//! `KennelApi<S: DataStore>` is generic over the storage backend:
//! - Production: `KennelApi<FileStore>`
//! - Testing: `KennelApi<InMemoryStore>`

use crate::commands;
use crate::config::KennelConfig;
use crate::error::Result;
use crate::query::{Field, FilterSpec, SortSpec};
use crate::store::DataStore;
use std::path::Path;

/// The main API facade for kennel operations.
pub struct KennelApi<S: DataStore> {
    store: S,
    paths: commands::KennelPaths,
}

impl<S: DataStore> KennelApi<S> {
    pub fn new(store: S, paths: commands::KennelPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_dog(&mut self, new_dog: NewDog) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, new_dog)
    }

    pub fn remove_dogs<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, ids)
    }

    pub fn view_dog(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn list_dogs(&self, include_unready: bool) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, include_unready)
    }

    pub fn home(&self) -> Result<commands::CmdResult> {
        commands::list::home(&self.store)
    }

    /// Searches adoptable dogs.
    ///
    /// `filters` pairs each field with the user's raw text; `Some` turns the
    /// filter on. With no `sort_key` the configured default field is used,
    /// and with no `ascending` the configured direction.
    pub fn search_dogs<I, T>(
        &self,
        filters: I,
        sort_key: Option<&str>,
        ascending: Option<bool>,
    ) -> Result<commands::CmdResult>
    where
        I: IntoIterator<Item = (Field, Option<T>)>,
        T: AsRef<str>,
    {
        let filter = FilterSpec::from_raw(filters)?;
        let config = KennelConfig::load(&self.paths.data_dir)?;
        let sort = SortSpec::parse(
            Some(sort_key.unwrap_or(&config.sort)),
            ascending.unwrap_or(config.ascending),
        );
        commands::search::run(&self.store, &filter, &sort)
    }

    /// Searches with an already typed request.
    pub fn query_dogs(&self, filter: &FilterSpec, sort: &SortSpec) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, filter, sort)
    }

    pub fn update_dog(&mut self, id: &str, update: DogUpdate) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn wish(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::wishlist::add(&mut self.store, id)
    }

    pub fn unwish(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::wishlist::remove(&mut self.store, id)
    }

    pub fn wishlist(&self) -> Result<commands::CmdResult> {
        commands::wishlist::list(&self.store)
    }

    pub fn export_wishlist(&self, target: Option<&Path>) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, target)
    }

    pub fn import_breeds(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::breeds::import(&mut self.store, path)
    }

    pub fn breeds(&self) -> Result<commands::CmdResult> {
        commands::breeds::list(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::KennelPaths {
        &self.paths
    }
}

pub use crate::commands::add::NewDog;
pub use crate::commands::config::ConfigAction;
pub use crate::commands::update::DogUpdate;
pub use commands::{CmdMessage, CmdResult, KennelPaths, MessageLevel};
