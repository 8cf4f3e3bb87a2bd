//! # Query Planner
//!
//! Turns a record snapshot plus a [`FilterSpec`] and a [`SortSpec`] into an
//! ordered result. Each call runs the same three steps:
//!
//! 1. **Validate** every enabled filter, in field order, before looking at a
//!    single record. An enabled filter whose value is absent, an empty
//!    string, or typed for another field fails the whole call with
//!    [`KennelError::InvalidFilterValue`] naming the first such field.
//! 2. **Narrow** the candidates through each enabled filter in field order
//!    (`name, sex, breed, age, weight, price`). Filters compose as AND.
//! 3. **Order** the survivors by at most one field with a stable sort;
//!    descending reverses the comparator, so ties keep the filtered order
//!    either way. No sort field means no reordering.
//!
//! The planner holds no state. Results borrow from the input slice, which is
//! never mutated.

use super::field::{self, Field};
use super::filter::{FilterSpec, FilterValue};
use super::sort::SortSpec;
use crate::error::{KennelError, Result};
use crate::model::Dog;

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryPlanner;

impl QueryPlanner {
    pub fn new() -> Self {
        Self
    }

    pub fn plan<'a>(
        &self,
        records: &'a [Dog],
        filter: &FilterSpec,
        sort: &SortSpec,
    ) -> Result<Vec<&'a Dog>> {
        let active = validate(filter)?;

        let mut candidates: Vec<&Dog> = records.iter().collect();
        for (field, value) in active {
            let Some(predicate) = field::predicate_for(field, value) else {
                continue;
            };
            candidates.retain(|&dog| predicate(dog));
            tracing::debug!(
                field = %field,
                value = %value,
                remaining = candidates.len(),
                "applied filter"
            );
        }

        if let Some(field) = sort.field {
            let compare = field::comparator_for(field);
            if sort.ascending {
                candidates.sort_by(|a, b| compare(*a, *b));
            } else {
                candidates.sort_by(|a, b| compare(*b, *a));
            }
            tracing::debug!(field = %field, ascending = sort.ascending, "sorted results");
        }

        Ok(candidates)
    }
}

fn validate(filter: &FilterSpec) -> Result<Vec<(Field, &FilterValue)>> {
    filter
        .enabled()
        .map(|(field, value)| match value {
            Some(value) if !value.is_empty() && value.field() == field => Ok((field, value)),
            _ => Err(KennelError::InvalidFilterValue(field)),
        })
        .collect()
}
