//! Edits to a single dog. Every change goes through the dog's own
//! `change_*` rules and is saved back in place.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KennelError, Result};
use crate::model::Dog;
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq)]
pub enum DogUpdate {
    Name(String),
    Age(u32),
    Weight(f64),
    Price(f64),
    Ready(bool),
}

pub fn run<S: DataStore>(store: &mut S, id: &str, update: DogUpdate) -> Result<CmdResult> {
    let mut dog = store.get_dog(id)?;
    let message = apply(&mut dog, &update)?;
    store.save_dog(&dog)?;
    tracing::info!(id, ?update, "updated dog");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(message));
    Ok(result.with_affected_dogs(vec![dog]))
}

pub fn rename<S: DataStore>(store: &mut S, id: &str, name: &str) -> Result<CmdResult> {
    run(store, id, DogUpdate::Name(name.to_string()))
}

pub fn set_age<S: DataStore>(store: &mut S, id: &str, age: u32) -> Result<CmdResult> {
    run(store, id, DogUpdate::Age(age))
}

pub fn set_weight<S: DataStore>(store: &mut S, id: &str, weight: f64) -> Result<CmdResult> {
    run(store, id, DogUpdate::Weight(weight))
}

pub fn set_price<S: DataStore>(store: &mut S, id: &str, price: f64) -> Result<CmdResult> {
    run(store, id, DogUpdate::Price(price))
}

pub fn mark_ready<S: DataStore>(store: &mut S, id: &str, ready: bool) -> Result<CmdResult> {
    run(store, id, DogUpdate::Ready(ready))
}

fn apply(dog: &mut Dog, update: &DogUpdate) -> Result<String> {
    match update {
        DogUpdate::Name(name) => {
            let old = dog.name().to_string();
            dog.change_name(name.as_str())?;
            Ok(format!("{} renamed to {}", old, dog.name()))
        }
        DogUpdate::Age(age) => {
            dog.change_age(*age)?;
            Ok(format!("{} is now {} years old", dog.name(), age))
        }
        DogUpdate::Weight(weight) => {
            dog.change_weight(*weight)?;
            Ok(format!("{} now weighs {}", dog.name(), weight))
        }
        DogUpdate::Price(price) => {
            // A ready dog must stay priced.
            if dog.is_ready() && *price <= 0.0 {
                return Err(KennelError::PriceRequired(dog.name().to_string()));
            }
            dog.change_price(*price)?;
            Ok(format!("{} is now priced at {:.2}", dog.name(), price))
        }
        DogUpdate::Ready(true) => {
            if dog.price() <= 0.0 {
                return Err(KennelError::PriceRequired(dog.name().to_string()));
            }
            dog.change_ready(true);
            Ok(format!("{} is ready for adoption", dog.name()))
        }
        DogUpdate::Ready(false) => {
            dog.change_ready(false);
            Ok(format!("{} is no longer up for adoption", dog.name()))
        }
    }
}
