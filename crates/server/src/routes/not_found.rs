use shared::api::error::ServerError;

pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
