//! Pooled driver backed by deadpool-postgres with required TLS.

use std::time::Duration;

use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;
use tokio_postgres_rustls::MakeRustlsConnect;
use tracing::{debug, info};

use crate::config::GatewayConfig;
use crate::driver::{BoxFuture, StatementDriver};
use crate::error::{GatewayError, GatewayResult};
use crate::params::{self, SqlParam};

/// Configuration for the connection pool.
#[derive(Debug, Clone)]
pub struct PoolOptions {
    /// Maximum number of connections in the pool.
    pub max_connections: usize,
    /// Maximum time to wait for a connection.
    pub connection_timeout: Option<Duration>,
    /// Maximum idle time before a connection is recycled.
    pub idle_timeout: Option<Duration>,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            connection_timeout: Some(Duration::from_secs(30)),
            idle_timeout: Some(Duration::from_secs(600)),
        }
    }
}

/// The production [`StatementDriver`]: a deadpool-postgres pool with a rustls
/// connector built from the system root store.
///
/// Each call acquires its own pooled connection; the connection returns to
/// the pool when dropped, on every exit path.
pub struct PooledDriver {
    pool: Pool,
}

impl PooledDriver {
    /// Build the pool from configuration. Connections are established lazily;
    /// no I/O occurs here.
    pub fn connect(config: &GatewayConfig, options: &PoolOptions) -> GatewayResult<Self> {
        let tls = tls_connector()?;

        let mgr_config = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };
        let mgr = Manager::from_config(config.to_pg_config(), tls, mgr_config);

        let pool = Pool::builder(mgr)
            .max_size(options.max_connections)
            .wait_timeout(options.connection_timeout)
            .create_timeout(options.connection_timeout)
            .recycle_timeout(options.idle_timeout)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| GatewayError::config(format!("failed to create pool: {}", e)))?;

        info!(
            host = %config.host,
            port = %config.port,
            database = %config.database,
            max_connections = %options.max_connections,
            "PostgreSQL connection pool created"
        );

        Ok(Self { pool })
    }
}

/// Build the rustls connector from the system root certificate store.
fn tls_connector() -> GatewayResult<MakeRustlsConnect> {
    let mut roots = rustls::RootCertStore::empty();

    let certs = rustls_native_certs::load_native_certs()
        .map_err(|e| GatewayError::tls(format!("failed to load system root certificates: {}", e)))?;

    for cert in certs {
        roots
            .add(cert)
            .map_err(|e| GatewayError::tls(format!("failed to add root certificate: {}", e)))?;
    }

    debug!(roots = %roots.len(), "loaded system root certificates");

    let config = rustls::ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth();

    Ok(MakeRustlsConnect::new(config))
}

impl StatementDriver for PooledDriver {
    fn fetch(
        &self,
        statement: String,
        params: Vec<SqlParam>,
    ) -> BoxFuture<'_, GatewayResult<Vec<Row>>> {
        Box::pin(async move {
            debug!(statement = %statement, "acquiring connection for fetch");
            let client = self.pool.get().await?;

            let stmt = client.prepare_cached(&statement).await?;
            let owned = params::to_sql_params(&params);
            let refs: Vec<&(dyn ToSql + Sync)> = owned.iter().map(|p| p.as_ref() as _).collect();

            let rows = client.query(&stmt, &refs).await?;
            Ok(rows)
        })
    }

    fn execute(
        &self,
        statement: String,
        params: Vec<SqlParam>,
    ) -> BoxFuture<'_, GatewayResult<u64>> {
        Box::pin(async move {
            debug!(statement = %statement, "acquiring connection for execute");
            let client = self.pool.get().await?;

            let stmt = client.prepare_cached(&statement).await?;
            let owned = params::to_sql_params(&params);
            let refs: Vec<&(dyn ToSql + Sync)> = owned.iter().map(|p| p.as_ref() as _).collect();

            let count = client.execute(&stmt, &refs).await?;
            Ok(count)
        })
    }

    fn close(&self) -> BoxFuture<'_, GatewayResult<()>> {
        Box::pin(async move {
            self.pool.close();
            debug!("connection pool closed");
            Ok(())
        })
    }
}
