//! Filter requests.
//!
//! A [`FilterSpec`] is a sparse map from [`Field`] to a [`FilterEntry`]. An
//! entry can be present but disabled, which keeps the last value around
//! while the filter is switched off. Values are typed per field
//! ([`FilterValue`]); raw user text is converted once, at the boundary, by
//! [`FilterValue::parse`] or [`FilterSpec::from_raw`].

use super::field::Field;
use crate::error::{KennelError, Result};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Name(String),
    Sex(String),
    Breed(String),
    Age(u32),
    Weight(f64),
    Price(f64),
}

impl FilterValue {
    pub fn field(&self) -> Field {
        match self {
            FilterValue::Name(_) => Field::Name,
            FilterValue::Sex(_) => Field::Sex,
            FilterValue::Breed(_) => Field::Breed,
            FilterValue::Age(_) => Field::Age,
            FilterValue::Weight(_) => Field::Weight,
            FilterValue::Price(_) => Field::Price,
        }
    }

    /// True for a text value holding the empty string. Not trimmed.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Name(s) | FilterValue::Sex(s) | FilterValue::Breed(s) => s.is_empty(),
            FilterValue::Age(_) | FilterValue::Weight(_) | FilterValue::Price(_) => false,
        }
    }

    /// Converts raw user text into the value type of `field`.
    ///
    /// Text fields keep the input verbatim, including an empty string; the
    /// planner is the one that rejects it. Numeric fields must parse.
    pub fn parse(field: Field, raw: &str) -> Result<FilterValue> {
        let unparsable = || KennelError::UnparsableFilterValue {
            field,
            raw: raw.to_string(),
        };
        let value = match field {
            Field::Name => FilterValue::Name(raw.to_string()),
            Field::Sex => FilterValue::Sex(raw.to_string()),
            Field::Breed => FilterValue::Breed(raw.to_string()),
            Field::Age => FilterValue::Age(raw.trim().parse().map_err(|_| unparsable())?),
            Field::Weight => FilterValue::Weight(parse_real(raw).ok_or_else(unparsable)?),
            Field::Price => FilterValue::Price(parse_real(raw).ok_or_else(unparsable)?),
        };
        Ok(value)
    }
}

fn parse_real(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Name(s) | FilterValue::Sex(s) | FilterValue::Breed(s) => {
                write!(f, "{:?}", s)
            }
            FilterValue::Age(n) => write!(f, "{}", n),
            FilterValue::Weight(x) | FilterValue::Price(x) => write!(f, "{}", x),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterEntry {
    pub enabled: bool,
    pub value: Option<FilterValue>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    entries: BTreeMap<Field, FilterEntry>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterSpec::enable`].
    pub fn with(mut self, value: FilterValue) -> Self {
        self.enable(value);
        self
    }

    /// Enables the filter `value` belongs to.
    pub fn enable(&mut self, value: FilterValue) {
        let field = value.field();
        self.set(field, true, Some(value));
    }

    pub fn set(&mut self, field: Field, enabled: bool, value: Option<FilterValue>) {
        self.entries.insert(field, FilterEntry { enabled, value });
    }

    /// Switches a filter off but keeps its value.
    pub fn disable(&mut self, field: Field) {
        if let Some(entry) = self.entries.get_mut(&field) {
            entry.enabled = false;
        }
    }

    pub fn entry(&self, field: Field) -> Option<&FilterEntry> {
        self.entries.get(&field)
    }

    /// Enabled entries in field order.
    pub fn enabled(&self) -> impl Iterator<Item = (Field, Option<&FilterValue>)> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.enabled)
            .map(|(field, entry)| (*field, entry.value.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.enabled().next().is_none()
    }

    /// Builds the filter set from raw user text, one optional string per field.
    ///
    /// `Some` enables the field. An empty numeric input is stored as an
    /// absent value so the planner reports it like any other empty filter;
    /// non-empty input that does not parse is rejected here.
    pub fn from_raw<I, S>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Field, Option<S>)>,
        S: AsRef<str>,
    {
        let mut spec = FilterSpec::new();
        for (field, text) in raw {
            let Some(text) = text else {
                continue;
            };
            let text = text.as_ref();
            let value = if text.is_empty() && is_numeric(field) {
                None
            } else {
                Some(FilterValue::parse(field, text)?)
            };
            spec.set(field, true, value);
        }
        Ok(spec)
    }
}

fn is_numeric(field: Field) -> bool {
    matches!(field, Field::Age | Field::Weight | Field::Price)
}
