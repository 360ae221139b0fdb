use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use {
    crate::{api::error::ServerError, internal_error, model::LogFilter},
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Expr, Order, Query, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

use crate::{
    api::payloads::ExerciseResponse,
    types::{Timestamp, Uuid},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Copied from the user when the exercise is created
    pub username: String,
    pub description: String,
    /// Minutes
    pub duration: i64,
    pub date: Timestamp,
}

#[cfg(feature = "backend")]
const EXERCISE_STAR: [ExerciseIden; 6] = [
    ExerciseIden::Id,
    ExerciseIden::UserId,
    ExerciseIden::Username,
    ExerciseIden::Description,
    ExerciseIden::Duration,
    ExerciseIden::Date,
];

#[cfg(feature = "backend")]
impl Exercise {
    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<Exercise>, ServerError> {
        let (sql, values) = Query::select()
            .columns(EXERCISE_STAR)
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_row(&*values.as_params(), Exercise::from_row)
            .optional()?;
        Ok(res)
    }

    /// A user's exercises strictly inside the filter's bounds, most recent
    /// first. Without an explicit upper bound `now` is used
    pub fn fetch_log(
        conn: &Connection,
        user_id: &Uuid,
        filter: &LogFilter,
        now: Timestamp,
    ) -> Result<Vec<Exercise>, ServerError> {
        let mut query = Query::select();
        query
            .columns(EXERCISE_STAR)
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::UserId).eq(user_id))
            .and_where(Expr::col(ExerciseIden::Date).lt(filter.upper_bound(now)))
            .order_by(ExerciseIden::Date, Order::Desc);

        if let Some(from) = filter.from {
            query.and_where(Expr::col(ExerciseIden::Date).gt(from));
        }
        if let Some(limit) = filter.limit {
            query.limit(limit);
        }

        let (sql, values) = query.build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), Exercise::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    pub fn create(conn: &mut Connection, exercise: Exercise) -> Result<Exercise, ServerError> {
        let tx = conn.transaction()?;
        let exercise = {
            exercise.insert(&tx)?;
            Exercise::fetch_by_id(&tx, &exercise.id)?
                .ok_or_else(|| internal_error!("Exercise {} missing after insert", exercise.id))?
        };
        tx.commit()?;

        Ok(exercise)
    }
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            user_id: exercise.user_id,
            date: exercise.date.calendar_string(),
            username: exercise.username,
            description: exercise.description,
            duration: exercise.duration,
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_response_exposes_user_id_and_calendar_date() {
        let user_id = Uuid::new_v4();
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id,
            username: "bob".into(),
            description: "swim".into(),
            duration: 45,
            date: Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap().into(),
        };

        let response = ExerciseResponse::from(exercise);
        assert_eq!(response.user_id, user_id);
        assert_eq!(response.date, "Mon Jan 01 2024");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["_id"], user_id.to_string());
        assert_eq!(json["username"], "bob");
        assert_eq!(json["description"], "swim");
        assert_eq!(json["duration"], 45);
        assert!(json.get("user_id").is_none());
    }
}
