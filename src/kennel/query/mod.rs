//! # Query Layer
//!
//! The filter-and-sort core. It consumes a read-only snapshot of dogs and
//! never touches a store, a terminal or the network:
//!
//! - [`field`]: the field accessor registry (extractors, orderings, predicates)
//! - [`filter`]: typed filter values and the sparse [`FilterSpec`]
//! - [`sort`]: the [`SortSpec`]
//! - [`planner`]: the [`QueryPlanner`] that validates, narrows and orders
//!
//! ```
//! use kennel::model::{Breed, Dog, Sex};
//! use kennel::query::{Field, FilterSpec, FilterValue, QueryPlanner, SortSpec};
//!
//! let breed = Breed::named("Beagle");
//! let dogs = vec![
//!     Dog::new("1", "Rosie", Sex::Female, breed.clone(), 5, 11.0).unwrap(),
//!     Dog::new("2", "Max", Sex::Male, breed.clone(), 2, 12.5).unwrap(),
//!     Dog::new("3", "Ruby", Sex::Female, breed, 4, 10.0).unwrap(),
//! ];
//!
//! let filter = FilterSpec::new().with(FilterValue::Sex("f".into()));
//! let result = QueryPlanner::new()
//!     .plan(&dogs, &filter, &SortSpec::asc(Field::Age))
//!     .unwrap();
//!
//! let names: Vec<&str> = result.iter().map(|d| d.name()).collect();
//! assert_eq!(names, ["Ruby", "Rosie"]);
//! ```

pub mod field;
pub mod filter;
pub mod planner;
pub mod sort;

pub use field::{
    comparator_for, comparator_for_key, predicate_for, predicate_for_key, Field, FieldValue,
};
pub use filter::{FilterEntry, FilterSpec, FilterValue};
pub use planner::QueryPlanner;
pub use sort::SortSpec;
