use crate::server::{config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Works with any backend SeaORM is built for here (SQLite or PostgreSQL), chosen by the
/// scheme of the connection string. Migrations create the user, catalog, cart, review,
/// statistics and PBV option tables before the server accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready");

    Ok(db)
}
