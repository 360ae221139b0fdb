use std::fmt;

use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use {
    rusqlite::{
        types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
        ToSql,
    },
    std::str::FromStr,
};

/// Opaque record identifier. Stored and rendered in hyphenated form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Eq, Hash)]
pub struct Uuid(uuid::Uuid);

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<uuid::Uuid> for Uuid {
    fn from(value: uuid::Uuid) -> Self {
        Self(value)
    }
}

#[cfg(feature = "backend")]
impl ToSql for Uuid {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(self.to_string().into()))
    }
}

#[cfg(feature = "backend")]
impl FromSql for Uuid {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        uuid::Uuid::from_str(value.as_str()?)
            .map(Uuid::from)
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[cfg(feature = "backend")]
impl From<&Uuid> for sea_query::Value {
    fn from(value: &Uuid) -> Self {
        value.to_string().into()
    }
}

#[cfg(feature = "backend")]
impl From<Uuid> for sea_query::Value {
    fn from(value: Uuid) -> Self {
        value.to_string().into()
    }
}

impl Uuid {
    pub fn new_v4() -> Self {
        uuid::Uuid::new_v4().into()
    }

    /// Accepts only the lowercase hyphenated form ids are rendered in, so two
    /// different strings never name the same id
    pub fn parse(value: &str) -> Option<Self> {
        uuid::Uuid::parse_str(value)
            .ok()
            .map(Uuid::from)
            .filter(|id| id.to_string() == value)
    }
}

#[cfg(test)]
mod test {
    use super::Uuid;

    #[test]
    fn test_display_round_trips_through_parse() {
        let id = Uuid::new_v4();
        assert_eq!(Uuid::parse(&id.to_string()), Some(id));
    }

    #[test]
    fn test_parse_rejects_other_spellings() {
        let id = Uuid::new_v4();
        let hyphenated = id.to_string();
        for other in [
            hyphenated.to_uppercase(),
            hyphenated.replace('-', ""),
            format!("{{{hyphenated}}}"),
            format!("urn:uuid:{hyphenated}"),
            format!(" {hyphenated}"),
            format!("{hyphenated} "),
        ] {
            assert_eq!(Uuid::parse(&other), None, "{other:?}");
        }
    }

    #[test]
    fn test_serializes_as_hyphenated_string() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Uuid::parse("not-an-id").is_none());
        assert!(Uuid::parse("").is_none());
    }
}
