use serde::{Deserialize, Serialize};

use super::lenient_string;
use crate::types::Uuid;

/// A numeric field as it arrives on the wire. JSON bodies carry numbers while
/// form bodies carry everything as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExerciseRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<NumericInput>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Shape returned when an exercise is added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    /// The owning user's id. Existing clients read the user id from this key,
    /// the exercise's own id is not exposed
    #[serde(rename = "_id")]
    pub user_id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{NewExerciseRequest, NumericInput};

    #[test]
    fn test_duration_accepts_numbers_and_strings() {
        let req: NewExerciseRequest = serde_json::from_value(json!({
            "userId": "abc",
            "description": "run",
            "duration": 30,
        }))
        .unwrap();
        assert_eq!(req.duration, Some(NumericInput::Integer(30)));
        assert_eq!(req.user_id.as_deref(), Some("abc"));
        assert_eq!(req.date, None);

        let req: NewExerciseRequest =
            serde_json::from_value(json!({ "duration": 1.5 })).unwrap();
        assert_eq!(req.duration, Some(NumericInput::Float(1.5)));

        let req: NewExerciseRequest =
            serde_json::from_value(json!({ "duration": "45" })).unwrap();
        assert_eq!(req.duration, Some(NumericInput::Text("45".into())));
    }

    #[test]
    fn test_text_fields_accept_scalars() {
        let req: NewExerciseRequest = serde_json::from_value(json!({
            "userId": 123,
            "description": true,
        }))
        .unwrap();
        assert_eq!(req.user_id.as_deref(), Some("123"));
        assert_eq!(req.description.as_deref(), Some("true"));

        let req: NewExerciseRequest =
            serde_json::from_value(json!({ "userId": null })).unwrap();
        assert_eq!(req.user_id, None);
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let req: NewExerciseRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req, NewExerciseRequest::default());
    }
}
