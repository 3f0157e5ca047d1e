//! The seam between the gateway and the pooled driver.

use std::future::Future;
use std::pin::Pin;

use tokio_postgres::Row;

use crate::error::GatewayResult;
use crate::params::SqlParam;

/// A boxed future returned by driver operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Executes classified statements against a database.
///
/// The production implementation is [`crate::pool::PooledDriver`], which
/// acquires a pooled connection per call and releases it on every exit path.
/// The trait exists so gateway behavior can be exercised without a live
/// database.
pub trait StatementDriver: Send + Sync {
    /// Execute a statement and return its row set.
    fn fetch(
        &self,
        statement: String,
        params: Vec<SqlParam>,
    ) -> BoxFuture<'_, GatewayResult<Vec<Row>>>;

    /// Execute a statement and return the number of affected rows.
    fn execute(
        &self,
        statement: String,
        params: Vec<SqlParam>,
    ) -> BoxFuture<'_, GatewayResult<u64>>;

    /// Close the underlying pool. No statement may execute afterward.
    fn close(&self) -> BoxFuture<'_, GatewayResult<()>>;
}
