use axum::Json;
use shared::{
    api::{error::ServerError, payloads::NewUserRequest},
    model::{NewUser, User},
};
use tracing::{info, instrument};

use crate::{db::DatabaseConnection, FormOrJson};

#[instrument(skip_all)]
pub async fn list_users(
    DatabaseConnection(conn): DatabaseConnection,
) -> Result<Json<Vec<User>>, ServerError> {
    let users = conn.interact(|conn| User::fetch_all(conn)).await??;
    Ok(Json(users))
}

#[instrument(skip(conn))]
pub async fn create_user(
    DatabaseConnection(conn): DatabaseConnection,
    FormOrJson(request): FormOrJson<NewUserRequest>,
) -> Result<Json<User>, ServerError> {
    let new_user = NewUser::try_from(request)?;
    let user = conn
        .interact(move |conn| User::create(conn, new_user))
        .await??;

    info!(id = %user.id, username = %user.username, "Created user");
    Ok(Json(user))
}
