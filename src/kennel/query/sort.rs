use super::field::Field;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// `None` leaves the filtered order untouched.
    pub field: Option<Field>,
    pub ascending: bool,
}

impl SortSpec {
    pub fn none() -> Self {
        Self {
            field: None,
            ascending: true,
        }
    }

    pub fn asc(field: Field) -> Self {
        Self {
            field: Some(field),
            ascending: true,
        }
    }

    pub fn desc(field: Field) -> Self {
        Self {
            field: Some(field),
            ascending: false,
        }
    }

    /// Resolves a sort key the way a user typed it.
    ///
    /// Absent, empty and unrecognised keys all mean "no ordering".
    pub fn parse(key: Option<&str>, ascending: bool) -> Self {
        let field = key.filter(|k| !k.is_empty()).and_then(|k| {
            let field = Field::from_key(k);
            if field.is_none() {
                tracing::debug!(key = k, "unrecognised sort field, keeping filtered order");
            }
            field
        });
        Self { field, ascending }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_resolves_known_keys() {
        assert_eq!(SortSpec::parse(Some("Age"), false), SortSpec::desc(Field::Age));
        assert_eq!(SortSpec::parse(Some("price"), true), SortSpec::asc(Field::Price));
    }

    #[test]
    fn parse_is_lenient() {
        assert_eq!(SortSpec::parse(None, true).field, None);
        assert_eq!(SortSpec::parse(Some(""), true).field, None);
        assert_eq!(SortSpec::parse(Some("colour"), false).field, None);
    }
}
