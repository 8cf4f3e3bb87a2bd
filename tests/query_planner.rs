use kennel::error::KennelError;
use kennel::model::{Breed, Dog, Sex};
use kennel::query::{Field, FilterSpec, FilterValue, QueryPlanner, SortSpec};

fn dog(id: &str, name: &str, sex: Sex, breed: &str, age: u32, weight: f64, price: f64) -> Dog {
    Dog::with_price(
        id,
        name,
        sex,
        Breed::named(breed),
        age,
        weight,
        price,
        price > 0.0,
    )
    .unwrap()
}

/// Every dog shares every attribute value except id and name.
fn uniform() -> Vec<Dog> {
    (1..=3)
        .map(|i| {
            dog(
                &i.to_string(),
                &format!("Dog{}", i),
                Sex::Female,
                "Beagle",
                3,
                10.0,
                100.0,
            )
        })
        .collect()
}

/// No two dogs share a value on any field.
fn diverse() -> Vec<Dog> {
    vec![
        dog("a", "Rosie", Sex::Female, "Beagle", 4, 9.5, 300.0),
        dog("b", "Max", Sex::Male, "Boxer", 2, 31.0, 200.0),
        dog("c", "Ruby", Sex::Female, "Pug", 1, 7.25, 500.0),
        dog("d", "Otto", Sex::Male, "Beagle Harrier", 6, 20.0, 0.0),
    ]
}

fn matching_all() -> [FilterValue; 6] {
    [
        FilterValue::Name("Dog".into()),
        FilterValue::Sex("F".into()),
        FilterValue::Breed("Bea".into()),
        FilterValue::Age(3),
        FilterValue::Weight(10.0),
        FilterValue::Price(100.0),
    ]
}

fn matching_none() -> [FilterValue; 6] {
    [
        FilterValue::Name("Cat".into()),
        FilterValue::Sex("m".into()),
        FilterValue::Breed("Pug".into()),
        FilterValue::Age(9),
        FilterValue::Weight(99.0),
        FilterValue::Price(1.0),
    ]
}

fn ids(dogs: &[Dog], filter: &FilterSpec, sort: &SortSpec) -> Vec<String> {
    QueryPlanner::new()
        .plan(dogs, filter, sort)
        .unwrap()
        .into_iter()
        .map(|d| d.id().to_string())
        .collect()
}

#[test]
fn filter_matching_nothing_yields_empty_result() {
    let dogs = uniform();
    for value in matching_none() {
        let field = value.field();
        let filter = FilterSpec::new().with(value);
        assert!(
            ids(&dogs, &filter, &SortSpec::none()).is_empty(),
            "{} filter should match nothing",
            field
        );
    }
}

#[test]
fn filter_matching_everything_keeps_other_filters_result() {
    let dogs = uniform();
    let narrowing = FilterValue::Name("Dog2".into());

    for value in matching_all() {
        let field = value.field();
        let alone = FilterSpec::new().with(value.clone());
        assert_eq!(ids(&dogs, &alone, &SortSpec::none()), ["1", "2", "3"]);

        if field != Field::Name {
            let combined = FilterSpec::new().with(narrowing.clone()).with(value);
            assert_eq!(ids(&dogs, &combined, &SortSpec::none()), ["2"]);
        }
    }
}

#[test]
fn filters_compose_as_intersection() {
    let dogs = diverse();
    let values = [
        FilterValue::Sex("f".into()),
        FilterValue::Breed("Beagle".into()),
        FilterValue::Name("R".into()),
        FilterValue::Price(0.0),
    ];

    for a in &values {
        for b in &values {
            let only_a = ids(&dogs, &FilterSpec::new().with(a.clone()), &SortSpec::none());
            let only_b = ids(&dogs, &FilterSpec::new().with(b.clone()), &SortSpec::none());
            let both = ids(
                &dogs,
                &FilterSpec::new().with(a.clone()).with(b.clone()),
                &SortSpec::none(),
            );

            let expected: Vec<String> = only_a
                .iter()
                .filter(|id| only_b.contains(id))
                .cloned()
                .collect();
            assert_eq!(both, expected, "{} AND {}", a, b);
        }
    }
}

#[test]
fn sorting_is_idempotent_and_reversible() {
    let dogs = diverse();
    for field in Field::ALL {
        let asc = QueryPlanner::new()
            .plan(&dogs, &FilterSpec::new(), &SortSpec::asc(field))
            .unwrap();
        let sorted: Vec<Dog> = asc.iter().map(|d| (*d).clone()).collect();

        let again = ids(&sorted, &FilterSpec::new(), &SortSpec::asc(field));
        let first: Vec<String> = sorted.iter().map(|d| d.id().to_string()).collect();
        assert_eq!(again, first, "sorting by {} twice", field);

        // Sex has duplicate keys in this set, so only check reversal elsewhere.
        if field != Field::Sex {
            let mut desc = ids(&dogs, &FilterSpec::new(), &SortSpec::desc(field));
            desc.reverse();
            assert_eq!(desc, first, "reversing {}", field);
        }
    }
}

#[test]
fn empty_or_absent_values_always_fail_naming_the_field() {
    let dogs = diverse();
    for field in Field::ALL {
        let mut absent = FilterSpec::new();
        absent.set(field, true, None);
        let err = QueryPlanner::new()
            .plan(&dogs, &absent, &SortSpec::none())
            .unwrap_err();
        assert!(matches!(err, KennelError::InvalidFilterValue(f) if f == field));
        assert_eq!(
            err.to_string(),
            format!("{} filter cannot be null or empty", field)
        );
    }

    for value in [
        FilterValue::Name(String::new()),
        FilterValue::Sex(String::new()),
        FilterValue::Breed(String::new()),
    ] {
        let field = value.field();
        let filter = FilterSpec::new().with(value);
        let result = QueryPlanner::new().plan(&dogs, &filter, &SortSpec::none());
        assert!(matches!(result, Err(KennelError::InvalidFilterValue(f)) if f == field));
    }
}

#[test]
fn invalid_filter_fails_even_when_another_matches_nothing() {
    let mut filter = FilterSpec::new().with(FilterValue::Name("Cat".into()));
    filter.set(Field::Price, true, None);

    for dogs in [diverse(), Vec::new()] {
        let err = QueryPlanner::new()
            .plan(&dogs, &filter, &SortSpec::none())
            .unwrap_err();
        assert!(matches!(err, KennelError::InvalidFilterValue(Field::Price)));
        assert_eq!(err.to_string(), "price filter cannot be null or empty");
    }
}

#[test]
fn invalid_filter_fails_whatever_the_other_filters_hold() {
    let dogs = diverse();
    let others = [
        FilterValue::Sex("f".into()),
        FilterValue::Breed("Pug".into()),
        FilterValue::Age(99),
        FilterValue::Weight(31.0),
    ];

    for other in others {
        // The other filter switched on, then switched off with its value kept.
        let mut filter = FilterSpec::new()
            .with(other.clone())
            .with(FilterValue::Name(String::new()));
        let on = QueryPlanner::new().plan(&dogs, &filter, &SortSpec::asc(Field::Age));
        assert!(
            matches!(on, Err(KennelError::InvalidFilterValue(Field::Name))),
            "with {} enabled",
            other
        );

        filter.disable(other.field());
        assert!(!filter.entry(other.field()).unwrap().enabled);
        let off = QueryPlanner::new().plan(&dogs, &filter, &SortSpec::none());
        assert!(
            matches!(off, Err(KennelError::InvalidFilterValue(Field::Name))),
            "with {} disabled",
            other
        );
    }
}

#[test]
fn unknown_sort_key_is_a_no_op() {
    let dogs = diverse();
    let sort = SortSpec::parse(Some("colour"), false);
    assert_eq!(
        ids(&dogs, &FilterSpec::new(), &sort),
        ["a", "b", "c", "d"]
    );
}

#[test]
fn ages_sort_both_ways() {
    let dogs = vec![
        dog("2", "Two", Sex::Male, "Pug", 2, 5.0, 0.0),
        dog("5", "Five", Sex::Male, "Pug", 5, 5.0, 0.0),
        dog("4", "Four", Sex::Male, "Pug", 4, 5.0, 0.0),
    ];
    assert_eq!(
        ids(&dogs, &FilterSpec::new(), &SortSpec::asc(Field::Age)),
        ["2", "4", "5"]
    );
    assert_eq!(
        ids(&dogs, &FilterSpec::new(), &SortSpec::desc(Field::Age)),
        ["5", "4", "2"]
    );
}

#[test]
fn name_filter_is_a_substring_match() {
    let dogs = uniform();
    let exact = FilterSpec::new().with(FilterValue::Name("Dog1".into()));
    assert_eq!(ids(&dogs, &exact, &SortSpec::none()), ["1"]);

    let prefix = FilterSpec::new().with(FilterValue::Name("Dog".into()));
    assert_eq!(ids(&dogs, &prefix, &SortSpec::none()), ["1", "2", "3"]);
}

#[test]
fn unpriced_dogs_never_match_a_price() {
    let dogs = vec![
        dog("1", "Dog1", Sex::Female, "Pug", 2, 5.0, 0.0),
        dog("2", "Dog2", Sex::Male, "Pug", 3, 6.0, 0.0),
    ];
    let filter = FilterSpec::new().with(FilterValue::Price(5.0));
    assert!(ids(&dogs, &filter, &SortSpec::none()).is_empty());
}

#[test]
fn raw_filters_are_typed_at_the_boundary() {
    let dogs = diverse();
    let filter = FilterSpec::from_raw([
        (Field::Sex, Some("female")),
        (Field::Age, Some(" 4 ")),
        (Field::Weight, None),
    ])
    .unwrap();
    assert_eq!(ids(&dogs, &filter, &SortSpec::none()), ["a"]);

    assert!(matches!(
        FilterSpec::from_raw([(Field::Price, Some("cheap"))]),
        Err(KennelError::UnparsableFilterValue {
            field: Field::Price,
            ..
        })
    ));
}
