use axum::{extract::Query, Json};
use shared::{
    api::{
        error::ServerError,
        payloads::{LogQuery, LogResponse},
    },
    model::{Exercise, LogFilter, User},
    types::Timestamp,
};
use tracing::instrument;

use crate::db::DatabaseConnection;

pub const UNKNOWN_USER_ID: &str = "unknown userId";

#[instrument(skip(conn))]
pub async fn fetch_log(
    DatabaseConnection(conn): DatabaseConnection,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogResponse>, ServerError> {
    let filter = LogFilter::from(&query);
    let response = conn
        .interact(move |conn| {
            let user = User::lookup(conn, query.user_id.as_deref())?
                .ok_or_else(|| ServerError::reference(UNKNOWN_USER_ID))?;
            let exercises = Exercise::fetch_log(conn, &user.id, &filter, Timestamp::now())?;

            Ok::<_, ServerError>(LogResponse::new(&user, &filter, exercises))
        })
        .await??;

    Ok(Json(response))
}
