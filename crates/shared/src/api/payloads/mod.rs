use serde::{Deserialize, Deserializer};

mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

mod log;
pub use log::*;

/// Reads a text field that JSON clients may send as a number or boolean,
/// keeping the value's textual form
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|v| match v {
        Scalar::Text(v) => v,
        Scalar::Integer(v) => v.to_string(),
        Scalar::Float(v) => v.to_string(),
        Scalar::Bool(v) => v.to_string(),
    }))
}
