use axum::http::HeaderValue;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker server")]
pub struct Cli {
    #[clap(long, env, default_value = "exercise.sqlite")]
    pub sqlite_connection_string: String,
    #[clap(long, env, default_value = "3000")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
    /// Allowed CORS origin. Any origin is allowed when unset
    #[arg(long, env)]
    pub cors_origin: Option<HeaderValue>,

    /// Deletes the database before starting the main program for debug purposes
    #[arg(long, env, default_value = "false")]
    pub debug_delete_database: bool,
}

impl Cli {
    /// Configuration for a server backed by `sqlite_connection_string` with
    /// every other option at its default
    pub fn for_database<S: Into<String>>(sqlite_connection_string: S) -> Self {
        Self {
            sqlite_connection_string: sqlite_connection_string.into(),
            port: 3000,
            bind_addr: "127.0.0.1".into(),
            cors_origin: None,
            debug_delete_database: false,
        }
    }
}
