//! # Database module
//!
//! Connection bootstrap and migration runner.

use std::path::Path;

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

/// Initialize the database connection.
///
/// For SQLite URLs the backing file (and its directory) is created when
/// missing, and foreign-key enforcement is switched on — the cascade rules in
/// the schema rely on it.
pub async fn init_database(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    if let Some(db_path) = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        && db_path != ":memory:"
    {
        let db_file_path = Path::new(db_path);

        if let Some(parent_dir) = db_file_path.parent()
            && !parent_dir.as_os_str().is_empty()
            && !parent_dir.exists()
        {
            debug!("creating database directory {}", parent_dir.display());
            std::fs::create_dir_all(parent_dir).map_err(|e| {
                DbErr::Custom(format!(
                    "cannot create database directory {}: {e}",
                    parent_dir.display()
                ))
            })?;
        }

        if !db_file_path.exists() {
            debug!("creating database file {}", db_file_path.display());
            std::fs::File::create(db_file_path).map_err(|e| {
                DbErr::Custom(format!(
                    "cannot create database file {}: {e}",
                    db_file_path.display()
                ))
            })?;
        }
    }

    let db = Database::connect(database_url).await?;

    if database_url.starts_with("sqlite") {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            "PRAGMA foreign_keys = ON;".to_string(),
        ))
        .await?;
    }

    info!("database connection established");
    Ok(db)
}

/// Apply all pending migrations.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    migration::Migrator::up(db, None).await?;
    info!("database migrations applied");
    Ok(())
}
