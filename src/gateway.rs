//! The statement gateway.

use std::sync::Arc;

use tokio_postgres::Row;

use crate::command::StatementClass;
use crate::config::GatewayConfig;
use crate::driver::StatementDriver;
use crate::error::GatewayResult;
use crate::logger::{ConsoleLogger, GatewayLogger};
use crate::pagination::Page;
use crate::params::SqlParam;
use crate::pool::{PoolOptions, PooledDriver};

/// A classified facade over a pooled PostgreSQL driver.
///
/// Each execution method classifies the statement's leading keyword against
/// its own allow-list before any connection is acquired, executes through the
/// driver, and reports the outcome through the logging collaborator. Driver
/// errors are logged and propagated unchanged; nothing is retried.
///
/// The gateway is safe for concurrent use; each in-flight call borrows its
/// own pooled connection.
pub struct StatementGateway {
    driver: Arc<dyn StatementDriver>,
    logger: Arc<dyn GatewayLogger>,
}

impl StatementGateway {
    /// Connect with the default console logger.
    pub fn connect(config: &GatewayConfig) -> GatewayResult<Self> {
        Self::builder().config(config.clone()).build()
    }

    /// Connect with a caller-supplied logger.
    pub fn connect_with_logger(
        config: &GatewayConfig,
        logger: Arc<dyn GatewayLogger>,
    ) -> GatewayResult<Self> {
        Self::builder().config(config.clone()).logger(logger).build()
    }

    /// Create a gateway over an existing driver.
    pub fn with_driver(driver: Arc<dyn StatementDriver>, logger: Arc<dyn GatewayLogger>) -> Self {
        Self { driver, logger }
    }

    /// Create a builder for configuring the gateway.
    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::new()
    }

    /// Execute a schema-change statement.
    ///
    /// Allowed leading keywords: CREATE, ALTER, DROP, TRUNCATE.
    pub async fn execute_schema_change(
        &self,
        statement: &str,
        params: Vec<SqlParam>,
    ) -> GatewayResult<()> {
        StatementClass::SchemaChange.classify(statement)?;

        match self.driver.execute(statement.to_string(), params).await {
            Ok(_) => {
                self.logger.info("schema change statement executed successfully");
                Ok(())
            }
            Err(err) => {
                self.logger
                    .error(&format!("error executing schema change statement: {}", err));
                Err(err)
            }
        }
    }

    /// Execute a query statement and return its rows.
    ///
    /// Allowed leading keyword: SELECT. With `Some(page)` the statement is
    /// rewritten to append a parameterized LIMIT/OFFSET clause whose
    /// placeholder numbering continues from the caller-supplied parameter
    /// count, and the page size and offset are appended to the parameters in
    /// that order.
    pub async fn execute_query(
        &self,
        statement: &str,
        params: Vec<SqlParam>,
        page: Option<Page>,
    ) -> GatewayResult<Vec<Row>> {
        StatementClass::Query.classify(statement)?;

        let mut params = params;
        let statement = match page {
            Some(page) => page.apply(statement, &mut params),
            None => statement.to_string(),
        };

        match self.driver.fetch(statement, params).await {
            Ok(rows) => {
                self.logger.info("query statement executed successfully");
                Ok(rows)
            }
            Err(err) => {
                self.logger
                    .error(&format!("error executing query statement: {}", err));
                Err(err)
            }
        }
    }

    /// Execute a mutation statement and return the affected-row count.
    ///
    /// Allowed leading keywords: INSERT, UPDATE, DELETE. The driver reports
    /// an unsigned count, so callers never see an absent or negative value.
    pub async fn execute_mutation(
        &self,
        statement: &str,
        params: Vec<SqlParam>,
    ) -> GatewayResult<u64> {
        StatementClass::Mutation.classify(statement)?;

        match self.driver.execute(statement.to_string(), params).await {
            Ok(count) => {
                self.logger.info("mutation statement executed successfully");
                Ok(count)
            }
            Err(err) => {
                self.logger
                    .error(&format!("error executing mutation statement: {}", err));
                Err(err)
            }
        }
    }

    /// Close the connection pool.
    ///
    /// Behavior of the execution methods after shutdown is a caller error;
    /// the pool reports itself closed on any later acquisition attempt.
    pub async fn shutdown(&self) -> GatewayResult<()> {
        match self.driver.close().await {
            Ok(()) => {
                self.logger.info("connection pool closed");
                Ok(())
            }
            Err(err) => {
                self.logger
                    .error(&format!("error closing connection pool: {}", err));
                Err(err)
            }
        }
    }
}

/// Builder for creating a gateway.
pub struct GatewayBuilder {
    config: Option<GatewayConfig>,
    url: Option<String>,
    logger: Option<Arc<dyn GatewayLogger>>,
    pool_options: PoolOptions,
}

impl GatewayBuilder {
    /// Create a new gateway builder.
    pub fn new() -> Self {
        Self {
            config: None,
            url: None,
            logger: None,
            pool_options: PoolOptions::default(),
        }
    }

    /// Set the database URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the configuration.
    pub fn config(mut self, config: GatewayConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the logging collaborator.
    pub fn logger(mut self, logger: Arc<dyn GatewayLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Set the maximum number of pooled connections.
    pub fn max_connections(mut self, n: usize) -> Self {
        self.pool_options.max_connections = n;
        self
    }

    /// Set the pool options.
    pub fn pool_options(mut self, options: PoolOptions) -> Self {
        self.pool_options = options;
        self
    }

    /// Build the gateway. Pool construction performs no I/O; connections are
    /// established lazily on first use.
    pub fn build(self) -> GatewayResult<StatementGateway> {
        let config = if let Some(config) = self.config {
            config
        } else if let Some(url) = self.url {
            GatewayConfig::from_url(url)?
        } else {
            return Err(crate::error::GatewayError::config(
                "no database URL or config provided",
            ))
        };

        let driver = PooledDriver::connect(&config, &self.pool_options)?;
        let logger = self.logger.unwrap_or_else(|| Arc::new(ConsoleLogger));

        Ok(StatementGateway::with_driver(Arc::new(driver), logger))
    }
}

impl Default for GatewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}
