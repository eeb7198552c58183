use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseService {
    /// Connects and brings the schema up to date. Accepts anything SeaORM
    /// can turn into connect options, so tests can constrain the pool.
    pub async fn new<C>(options: C) -> Result<Self, DbErr>
    where
        C: Into<ConnectOptions>,
    {
        info!("Connecting to database...");
        let db = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Database ready.");
        Ok(Self { db })
    }
}
