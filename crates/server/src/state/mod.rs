use std::sync::Arc;

use axum::extract::FromRef;
use deadpool_sqlite::Pool;
use shared::api::error::ServerError;
use tracing::{info, instrument, warn};

use crate::{cli::Cli, db};

#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: Pool,
    pub args: Arc<Cli>,
}

impl AppState {
    /// Prepares the database and opens the connection pool. Migrations run
    /// synchronously so nothing is served from an outdated schema
    #[instrument(skip_all)]
    pub fn new(args: Cli) -> Result<Self, anyhow::Error> {
        if args.debug_delete_database {
            warn!("Deleting database {}", args.sqlite_connection_string);
            db::delete_database(&args.sqlite_connection_string)?;
        }

        let ran = db::run_migrations(&args.sqlite_connection_string)?;
        info!("Ran {ran} db migrations");

        let pool = db::create_pool(&args.sqlite_connection_string)?;

        Ok(Self {
            pool,
            args: Arc::new(args),
        })
    }

    /// Optimizes the database and closes the pool. Connections still checked
    /// out are dropped as they are returned
    #[instrument(skip_all)]
    pub async fn close(self) -> Result<(), ServerError> {
        let conn = self.pool.get().await?;
        let elapsed = conn
            .interact(|conn| db::optimize_database(conn))
            .await??;
        info!("Optimize db took: {:.3}", elapsed.as_secs_f32());
        drop(conn);

        self.pool.close();
        Ok(())
    }
}

impl FromRef<AppState> for Pool {
    fn from_ref(state: &AppState) -> Self {
        // pool uses an Arc internally so clone is cheap
        state.pool.clone()
    }
}
