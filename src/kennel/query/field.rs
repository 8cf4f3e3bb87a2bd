//! # Field Accessor Registry
//!
//! Single source of truth for what a catalog field means to a query: how to
//! pull its value out of a [`Dog`], how two dogs order on it, and how a
//! filter value turns into a test against a dog.
//!
//! Fields form a closed set ([`Field`]) and the registry is a static table
//! indexed by that tag. String keys only come in through
//! [`Field::from_key`], which is case-insensitive and returns `None` for
//! anything it does not know.
//!
//! | field    | ordering              | filter                          |
//! |----------|-----------------------|---------------------------------|
//! | `name`   | lexicographic         | substring, case-sensitive       |
//! | `sex`    | lexicographic on tag  | equality, case-insensitive      |
//! | `breed`  | lexicographic on name | substring, case-sensitive       |
//! | `age`    | integer               | exact equality                  |
//! | `weight` | real (total order)    | exact equality, no tolerance    |
//! | `price`  | real (total order)    | exact equality, no tolerance    |

use super::filter::FilterValue;
use crate::error::KennelError;
use crate::model::Dog;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Sex,
    Breed,
    Age,
    Weight,
    Price,
}

impl Field {
    /// Every field, in the order filters are validated and applied.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Sex,
        Field::Breed,
        Field::Age,
        Field::Weight,
        Field::Price,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Sex => "sex",
            Field::Breed => "breed",
            Field::Age => "age",
            Field::Weight => "weight",
            Field::Price => "price",
        }
    }

    /// Case-insensitive lookup. Unknown keys are `None`, not an error.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = KennelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_key(s).ok_or_else(|| KennelError::Api(format!("Unknown field: {}", s)))
    }
}

/// A field value extracted from a dog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(u32),
    Real(f64),
}

impl FieldValue<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Real(a), FieldValue::Real(b)) => a.total_cmp(b),
            // a field always extracts the same variant
            _ => Ordering::Equal,
        }
    }
}

/// Registry entry for one field.
pub struct FieldAccessor {
    pub field: Field,
    pub extract: for<'a> fn(&'a Dog) -> FieldValue<'a>,
    matches: fn(&Dog, &FilterValue) -> bool,
}

impl FieldAccessor {
    pub fn compare(&self, a: &Dog, b: &Dog) -> Ordering {
        (self.extract)(a).compare(&(self.extract)(b))
    }
}

// Indexed by `Field as usize`; the order must follow the enum declaration.
static REGISTRY: [FieldAccessor; 6] = [
    FieldAccessor {
        field: Field::Name,
        extract: name_of,
        matches: name_matches,
    },
    FieldAccessor {
        field: Field::Sex,
        extract: sex_of,
        matches: sex_matches,
    },
    FieldAccessor {
        field: Field::Breed,
        extract: breed_of,
        matches: breed_matches,
    },
    FieldAccessor {
        field: Field::Age,
        extract: age_of,
        matches: age_matches,
    },
    FieldAccessor {
        field: Field::Weight,
        extract: weight_of,
        matches: weight_matches,
    },
    FieldAccessor {
        field: Field::Price,
        extract: price_of,
        matches: price_matches,
    },
];

pub fn accessor(field: Field) -> &'static FieldAccessor {
    &REGISTRY[field as usize]
}

pub fn comparator_for(field: Field) -> impl Fn(&Dog, &Dog) -> Ordering {
    let accessor = accessor(field);
    move |a: &Dog, b: &Dog| accessor.compare(a, b)
}

pub fn comparator_for_key(key: &str) -> Option<impl Fn(&Dog, &Dog) -> Ordering> {
    Field::from_key(key).map(comparator_for)
}

/// Builds the test a filter value stands for.
///
/// Returns `None` when `value` carries another field's variant.
pub fn predicate_for(field: Field, value: &FilterValue) -> Option<impl Fn(&Dog) -> bool + '_> {
    if value.field() != field {
        return None;
    }
    let accessor = accessor(field);
    Some(move |dog: &Dog| (accessor.matches)(dog, value))
}

pub fn predicate_for_key<'v>(
    key: &str,
    value: &'v FilterValue,
) -> Option<impl Fn(&Dog) -> bool + 'v> {
    Field::from_key(key).and_then(|field| predicate_for(field, value))
}

fn name_of(dog: &Dog) -> FieldValue<'_> {
    FieldValue::Text(dog.name())
}

fn sex_of(dog: &Dog) -> FieldValue<'_> {
    FieldValue::Text(dog.sex().as_str())
}

fn breed_of(dog: &Dog) -> FieldValue<'_> {
    FieldValue::Text(&dog.breed().name)
}

fn age_of(dog: &Dog) -> FieldValue<'_> {
    FieldValue::Int(dog.age())
}

fn weight_of(dog: &Dog) -> FieldValue<'_> {
    FieldValue::Real(dog.weight())
}

fn price_of(dog: &Dog) -> FieldValue<'_> {
    FieldValue::Real(dog.price())
}

fn name_matches(dog: &Dog, value: &FilterValue) -> bool {
    matches!(value, FilterValue::Name(term) if dog.name().contains(term.as_str()))
}

fn sex_matches(dog: &Dog, value: &FilterValue) -> bool {
    let FilterValue::Sex(term) = value else {
        return false;
    };
    let sex = dog.sex();
    term.eq_ignore_ascii_case(sex.as_str()) || term.eq_ignore_ascii_case(sex.long_name())
}

fn breed_matches(dog: &Dog, value: &FilterValue) -> bool {
    matches!(value, FilterValue::Breed(term) if dog.breed().name.contains(term.as_str()))
}

fn age_matches(dog: &Dog, value: &FilterValue) -> bool {
    matches!(value, FilterValue::Age(age) if dog.age() == *age)
}

#[allow(clippy::float_cmp)]
fn weight_matches(dog: &Dog, value: &FilterValue) -> bool {
    matches!(value, FilterValue::Weight(weight) if dog.weight() == *weight)
}

#[allow(clippy::float_cmp)]
fn price_matches(dog: &Dog, value: &FilterValue) -> bool {
    matches!(value, FilterValue::Price(price) if dog.price() == *price)
}
