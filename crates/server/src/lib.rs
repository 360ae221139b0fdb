pub mod cli;
pub use cli::*;

pub mod db;

mod form_or_json;
pub use form_or_json::*;

mod state;
pub use state::*;

pub mod routes;
