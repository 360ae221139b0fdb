use crate::{
    api::{
        error::ValidationError,
        payloads::{NewExerciseRequest, NumericInput},
    },
    model::{
        constants::{DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, DURATION_MIN},
        Exercise, User,
    },
    types::{Timestamp, Uuid},
    utils::dates::parse_date,
};

impl NewExerciseRequest {
    /// Validates the request and builds the exercise for `user`
    ///
    /// `now` is the creation time, used when no date was supplied
    pub fn into_exercise(self, user: &User, now: Timestamp) -> Result<Exercise, ValidationError> {
        let (description, duration, date) = self.validated_fields(now)?;

        Ok(Exercise {
            id: Uuid::new_v4(),
            user_id: user.id,
            username: user.username.clone(),
            description,
            duration,
            date,
        })
    }

    fn validated_fields(&self, now: Timestamp) -> Result<(String, i64, Timestamp), ValidationError> {
        let description = validate_description(self.description.as_deref());
        let duration = validate_duration(self.duration.as_ref());
        let date = validate_date(self.date.as_deref(), now);

        match (description, duration, date) {
            (Ok(description), Ok(duration), Ok(date)) => Ok((description, duration, date)),
            (description, duration, date) => Err(ValidationError {
                error_messages: [description.err(), duration.err(), date.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            }),
        }
    }
}

fn validate_description(description: Option<&str>) -> Result<String, String> {
    let description = description.unwrap_or_default();
    let length = description.chars().count();
    if length < DESCRIPTION_MIN_LENGTH {
        Err("Path `description` is required.".into())
    } else if length > DESCRIPTION_MAX_LENGTH {
        Err("description too long".into())
    } else {
        Ok(description.to_owned())
    }
}

fn validate_duration(duration: Option<&NumericInput>) -> Result<i64, String> {
    let duration = match duration {
        None => return Err(duration_required()),
        Some(NumericInput::Integer(v)) => *v,
        Some(NumericInput::Float(v)) => whole_number(*v)?,
        Some(NumericInput::Text(v)) => {
            let v = v.trim();
            if v.is_empty() {
                return Err(duration_required());
            }
            match (v.parse::<i64>(), v.parse::<f64>()) {
                (Ok(v), _) => v,
                (_, Ok(v)) if v.is_finite() => whole_number(v)?,
                _ => {
                    return Err(format!(
                        "Cast to Number failed for value \"{v}\" at path \"duration\""
                    ))
                },
            }
        },
    };

    if duration < DURATION_MIN {
        Err("duration too short".into())
    } else {
        Ok(duration)
    }
}

fn duration_required() -> String {
    "Path `duration` is required.".into()
}

fn whole_number(v: f64) -> Result<i64, String> {
    if v.fract() == 0.0 {
        Ok(v as i64)
    } else {
        Err("duration must be a whole number".into())
    }
}

/// An empty date is the same as no date
fn validate_date(date: Option<&str>, now: Timestamp) -> Result<Timestamp, String> {
    match date.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(now),
        Some(v) => parse_date(v)
            .map(Timestamp::from)
            .ok_or_else(|| format!("Cast to Date failed for value \"{v}\" at path \"date\"")),
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".into(),
        }
    }

    fn request(description: &str, duration: NumericInput, date: Option<&str>) -> NewExerciseRequest {
        NewExerciseRequest {
            user_id: None,
            description: Some(description.into()),
            duration: Some(duration),
            date: date.map(Into::into),
        }
    }

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap().into()
    }

    fn first_error(req: NewExerciseRequest) -> String {
        req.into_exercise(&user(), now())
            .unwrap_err()
            .first_message()
            .to_owned()
    }

    #[test]
    fn test_valid_exercise_copies_user() {
        let user = user();
        let exercise = request("run", NumericInput::Integer(30), Some("2024-01-05"))
            .into_exercise(&user, now())
            .unwrap();

        assert_eq!(exercise.user_id, user.id);
        assert_eq!(exercise.username, "alice");
        assert_eq!(exercise.description, "run");
        assert_eq!(exercise.duration, 30);
        assert_eq!(exercise.date.calendar_string(), "Fri Jan 05 2024");
        assert_ne!(exercise.id, user.id);
    }

    #[test]
    fn test_missing_date_uses_now() {
        for date in [None, Some(""), Some("  ")] {
            let exercise = request("run", NumericInput::Integer(30), date)
                .into_exercise(&user(), now())
                .unwrap();
            assert_eq!(exercise.date, now());
        }
    }

    #[test]
    fn test_duration_from_text_and_whole_floats() {
        for duration in [
            NumericInput::Text("15".into()),
            NumericInput::Text(" 15 ".into()),
            NumericInput::Text("15.0".into()),
            NumericInput::Float(15.0),
        ] {
            let exercise = request("run", duration, None)
                .into_exercise(&user(), now())
                .unwrap();
            assert_eq!(exercise.duration, 15);
        }
    }

    #[test]
    fn test_duration_too_short() {
        for duration in [0i64, -5] {
            assert_eq!(
                first_error(request("run", NumericInput::Integer(duration), None)),
                "duration too short"
            );
        }
        assert_eq!(
            first_error(request("run", NumericInput::Text("0".into()), None)),
            "duration too short"
        );
    }

    #[test]
    fn test_duration_must_be_whole() {
        assert_eq!(
            first_error(request("run", NumericInput::Float(1.5), None)),
            "duration must be a whole number"
        );
        assert_eq!(
            first_error(request("run", NumericInput::Text("2.25".into()), None)),
            "duration must be a whole number"
        );
    }

    #[test]
    fn test_duration_not_a_number() {
        assert_eq!(
            first_error(request("run", NumericInput::Text("abc".into()), None)),
            "Cast to Number failed for value \"abc\" at path \"duration\""
        );
    }

    #[test]
    fn test_duration_required() {
        let mut req = request("run", NumericInput::Text(String::new()), None);
        assert_eq!(first_error(req.clone()), "Path `duration` is required.");
        req.duration = None;
        assert_eq!(first_error(req), "Path `duration` is required.");
    }

    #[test]
    fn test_description_bounds() {
        assert_eq!(
            first_error(request("", NumericInput::Integer(10), None)),
            "Path `description` is required."
        );
        assert_eq!(
            first_error(request("a description too long", NumericInput::Integer(10), None)),
            "description too long"
        );
        assert!(request("twenty characters!!!", NumericInput::Integer(10), None)
            .into_exercise(&user(), now())
            .is_ok());
    }

    #[test]
    fn test_bad_date() {
        assert_eq!(
            first_error(request("run", NumericInput::Integer(10), Some("someday"))),
            "Cast to Date failed for value \"someday\" at path \"date\""
        );
    }

    #[test]
    fn test_errors_are_reported_in_field_order() {
        let err = request("a description too long", NumericInput::Integer(0), Some("someday"))
            .into_exercise(&user(), now())
            .unwrap_err();
        assert_eq!(
            err.error_messages,
            vec![
                "description too long".to_owned(),
                "duration too short".to_owned(),
                "Cast to Date failed for value \"someday\" at path \"date\"".to_owned(),
            ]
        );
    }
}
