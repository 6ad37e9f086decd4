use crate::{DbError, Result};

use salon_core::ErrorLocation;

use std::collections::HashMap;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::sync::RwLock;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// One SQLite database per tenant (signed-in salon owner). Every query a
/// repository runs is scoped by the pool it was handed, so tenant isolation
/// never depends on a WHERE clause.
pub struct TenantConnectionManager {
    pools: Arc<RwLock<HashMap<String, SqlitePool>>>,
    base_path: PathBuf,
    max_connections: u32,
}

impl TenantConnectionManager {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self::with_max_connections(base_path, DEFAULT_MAX_CONNECTIONS)
    }

    pub fn with_max_connections(base_path: impl Into<PathBuf>, max_connections: u32) -> Self {
        Self {
            pools: Arc::new(RwLock::new(HashMap::new())),
            base_path: base_path.into(),
            max_connections,
        }
    }

    pub async fn get_pool(&self, tenant_id: &str) -> Result<SqlitePool> {
        Self::validate_tenant_id(tenant_id)?;

        // Fast path: pool already exists
        {
            let pools = self.pools.read().await;
            if let Some(pool) = pools.get(tenant_id) {
                return Ok(pool.clone());
            }
        }

        let mut pools = self.pools.write().await;

        // Another task may have created it while we waited for the write lock
        if let Some(pool) = pools.get(tenant_id) {
            return Ok(pool.clone());
        }

        let pool = self.create_pool(tenant_id).await?;
        pools.insert(tenant_id.to_string(), pool.clone());

        Ok(pool)
    }

    async fn create_pool(&self, tenant_id: &str) -> Result<SqlitePool> {
        let db_path = self.get_database_path(tenant_id);

        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create tenant directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        info!("Opened tenant database {}", db_path.display());

        Ok(pool)
    }

    pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    /// Tenant ids become directory names; keep them to a safe alphabet.
    #[track_caller]
    fn validate_tenant_id(tenant_id: &str) -> Result<()> {
        let valid = !tenant_id.is_empty()
            && tenant_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if valid {
            Ok(())
        } else {
            Err(DbError::InvalidTenant {
                tenant_id: tenant_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    fn get_database_path(&self, tenant_id: &str) -> PathBuf {
        self.base_path.join(tenant_id).join("main.db")
    }
}
