use std::env;

use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;
use dotenv::dotenv;
use log::info;
use rocket::tokio::task;

pub mod schema;

const DEFAULT_POOL_SIZE: u32 = 10;

// An alias to the type for a pool of Diesel Postgres connections.
pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

error_chain! {
    foreign_links {
        Var(::std::env::VarError);
        R2D2(::r2d2::Error);
        Diesel(::diesel::result::Error);
    }
}

/// Database settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub pool_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL").chain_err(|| "DATABASE_URL must be set")?;
        let pool_size = match env::var("DATABASE_POOL_SIZE") {
            Ok(size) => size
                .parse::<u32>()
                .chain_err(|| format!("invalid DATABASE_POOL_SIZE: {}", size))?,
            Err(env::VarError::NotPresent) => DEFAULT_POOL_SIZE,
            Err(e) => return Err(e.into()),
        };
        Ok(Config {
            database_url,
            pool_size,
        })
    }
}

/// Handle to the connection pool. Created once at startup and handed to
/// Rocket as managed state; connections close when the last clone drops.
#[derive(Clone)]
pub struct Db {
    pool: Pool,
}

impl Db {
    /// Opens the pool and establishes its initial connections, failing fast
    /// if the database is unreachable.
    pub fn open(config: &Config) -> Result<Db> {
        let manager = ConnectionManager::<PgConnection>::new(config.database_url.as_str());
        let pool = Pool::builder().max_size(config.pool_size).build(manager)?;
        info!(
            "database pool opened ({} connections max)",
            config.pool_size
        );
        Ok(Db { pool })
    }

    /// Builds the pool without connecting. Connections are made on first
    /// checkout, which gives up after a second.
    #[cfg(test)]
    pub fn open_lazy(config: &Config) -> Db {
        let manager = ConnectionManager::<PgConnection>::new(config.database_url.as_str());
        let pool = Pool::builder()
            .max_size(config.pool_size)
            .min_idle(Some(0))
            .connection_timeout(std::time::Duration::from_secs(1))
            .build_unchecked(manager);
        Db { pool }
    }

    pub fn get(&self) -> Result<DbConnection> {
        Ok(self.pool.get()?)
    }

    /// Runs `f` with a pooled connection on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut PgConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        task::spawn_blocking(move || {
            let mut connection = pool.get()?;
            f(&mut connection)
        })
        .await
        .chain_err(|| "database task did not complete")?
    }
}
