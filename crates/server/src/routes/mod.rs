use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use shared::api::Object;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::AppState;

mod users;
pub use users::*;

mod exercise;
pub use exercise::*;

mod not_found;
pub use not_found::*;

/// Builds the application. Unknown paths and known paths called with the
/// wrong method both get the plain "not found" response
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(match &state.args.cors_origin {
            Some(origin) => AllowOrigin::exact(origin.clone()),
            None => Any.into(),
        })
        .allow_methods([Method::GET, Method::HEAD, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route(Object::Users.path(), get(list_users).fallback(not_found))
        .route(Object::NewUser.path(), post(create_user).fallback(not_found))
        .route(Object::AddExercise.path(), post(add_exercise).fallback(not_found))
        .route(Object::Log.path(), get(fetch_log).fallback(not_found))
        .fallback(not_found)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
