use axum::Json;
use shared::{
    api::{
        error::ServerError,
        payloads::{ExerciseResponse, NewExerciseRequest},
    },
    model::{Exercise, User},
    types::Timestamp,
};
use tracing::{debug, instrument};

use crate::{db::DatabaseConnection, FormOrJson};

pub const USER_ID_NOT_FOUND: &str = "UserId not found";

#[instrument(skip(conn))]
pub async fn add_exercise(
    DatabaseConnection(conn): DatabaseConnection,
    FormOrJson(request): FormOrJson<NewExerciseRequest>,
) -> Result<Json<ExerciseResponse>, ServerError> {
    let exercise = conn
        .interact(move |conn| {
            let user = User::lookup(conn, request.user_id.as_deref())?
                .ok_or_else(|| ServerError::reference(USER_ID_NOT_FOUND))?;
            let exercise = request.into_exercise(&user, Timestamp::now())?;

            Exercise::create(conn, exercise)
        })
        .await??;

    debug!(id = %exercise.id, user_id = %exercise.user_id, "Added exercise");
    Ok(Json(exercise.into()))
}
