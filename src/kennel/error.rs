use crate::query::Field;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KennelError {
    #[error("{0} filter cannot be null or empty")]
    InvalidFilterValue(Field),

    #[error("Invalid {field} filter value: {raw:?}")]
    UnparsableFilterValue { field: Field, raw: String },

    #[error("Invalid dog: {0}")]
    InvalidDog(String),

    #[error("Dog not found: {0}")]
    DogNotFound(String),

    #[error("A dog with id {0} already exists")]
    DuplicateDog(String),

    #[error("Breed not found: {0}")]
    BreedNotFound(String),

    #[error("Dog must have a price: {0}")]
    PriceRequired(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, KennelError>;
