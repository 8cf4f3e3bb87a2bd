use crate::error::{KennelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    /// The short tag records are stored and compared with.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = KennelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            _ => Err(KennelError::InvalidDog(
                "Sex must be either m or f, case insensitive.".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breed {
    pub id: String,
    pub name: String,
    pub description: String,
    pub life_min: u32,
    pub life_max: u32,
    pub male_weight_min: u32,
    pub male_weight_max: u32,
    pub female_weight_min: u32,
    pub female_weight_max: u32,
    pub hypoallergenic: bool,
}

impl Breed {
    /// A breed carrying only a name, handy where the rest is unknown.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.to_lowercase().replace(' ', "-"),
            name,
            description: String::new(),
            life_min: 0,
            life_max: 0,
            male_weight_min: 0,
            male_weight_max: 0,
            female_weight_min: 0,
            female_weight_max: 0,
            hypoallergenic: false,
        }
    }
}

/// One catalog entry.
///
/// Fields are read through accessors; every mutation goes through a
/// `change_*` method that applies the same rules as the constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    id: String,
    name: String,
    sex: Sex,
    breed: Breed,
    age: u32,
    weight: f64,
    /// Path to a photo of the dog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    price: f64,
    #[serde(rename = "isReady", alias = "is_ready")]
    is_ready: bool,
}

impl Dog {
    /// A new, unpriced dog that is not ready for adoption yet.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sex: Sex,
        breed: Breed,
        age: u32,
        weight: f64,
    ) -> Result<Self> {
        Self::with_price(id, name, sex, breed, age, weight, 0.0, false)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_price(
        id: impl Into<String>,
        name: impl Into<String>,
        sex: Sex,
        breed: Breed,
        age: u32,
        weight: f64,
        price: f64,
        is_ready: bool,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(KennelError::InvalidDog("Dog id cannot be empty.".into()));
        }
        if name.trim().is_empty() {
            return Err(KennelError::InvalidDog("Dog name cannot be empty.".into()));
        }
        if age == 0 {
            return Err(KennelError::InvalidDog(
                "Dog age must be greater than zero.".into(),
            ));
        }
        check_weight(weight)?;
        check_price(price)?;

        Ok(Self {
            id,
            name,
            sex,
            breed,
            age,
            weight,
            image: None,
            price,
            is_ready,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn breed(&self) -> &Breed {
        &self.breed
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.change_image(image);
        self
    }

    /// An empty path clears the image.
    pub fn change_image(&mut self, image: impl Into<String>) {
        let image = image.into();
        self.image = if image.trim().is_empty() {
            None
        } else {
            Some(image)
        };
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(KennelError::InvalidDog("Dog name cannot be empty.".into()));
        }
        self.name = name;
        Ok(())
    }

    /// Ages only move forward.
    pub fn change_age(&mut self, age: u32) -> Result<()> {
        if age <= self.age {
            return Err(KennelError::InvalidDog(
                "The new dog age must be older than the currently assigned one.".into(),
            ));
        }
        self.age = age;
        Ok(())
    }

    pub fn change_weight(&mut self, weight: f64) -> Result<()> {
        check_weight(weight)?;
        self.weight = weight;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<()> {
        check_price(price)?;
        self.price = price;
        Ok(())
    }

    pub fn change_ready(&mut self, is_ready: bool) {
        self.is_ready = is_ready;
    }
}

fn check_weight(weight: f64) -> Result<()> {
    if weight.is_nan() || weight <= 0.0 {
        return Err(KennelError::InvalidDog(
            "Dog weight must be greater than zero.".into(),
        ));
    }
    Ok(())
}

fn check_price(price: f64) -> Result<()> {
    if price.is_nan() || price < 0.0 {
        return Err(KennelError::InvalidDog(
            "Price of dog cannot be negative.".into(),
        ));
    }
    Ok(())
}
