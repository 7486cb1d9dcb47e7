//! # Application entry point

use gym_api::api::{ApiServer, AppState};
use gym_api::config::AppConfig;
use gym_api::database::{init_database, run_migrations};
use gym_api::error::Result;
use gym_api::logging::init_logging;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(None);

    let config = AppConfig::load()?;
    info!(
        "configuration loaded, binding {}:{}",
        config.server.bind_address, config.server.port
    );

    let db = init_database(&config.database.url).await?;
    run_migrations(&db).await?;

    let state = AppState::new(db, &config);
    let server = ApiServer::new(config, state);
    server.serve().await
}
